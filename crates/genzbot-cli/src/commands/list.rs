//! Implementation of the `genzbot list` command.

use genzbot_core::application::{BackendInfo, CatalogService, TemplateInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let backends = CatalogService::backends();
    let templates = CatalogService::templates();

    // `--output-format json` implies the JSON listing.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => print_table(&backends, &templates, &output)?,
        ListFormat::Json => {
            output.json(&serde_json::json!({
                "backends": backends,
                "templates": templates,
            }))?;
        }
        ListFormat::List => {
            for name in backend_lines(&backends).chain(template_lines(&templates)) {
                output.print(&name)?;
            }
        }
        ListFormat::Csv => {
            for row in csv_rows(&backends, &templates) {
                output.print(&row)?;
            }
        }
    }

    Ok(())
}

fn print_table(
    backends: &[BackendInfo],
    templates: &[TemplateInfo],
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Backends:")?;
    output.print(&format!(
        "  {:<9} {:<8} {:<16} {:<17} {}",
        "NAME", "PROVIDER", "MODEL", "API KEY VARIABLE", "LIBRARY"
    ))?;
    for b in backends {
        output.print(&format!(
            "  {:<9} {:<8} {:<16} {:<17} {}",
            b.name, b.provider, b.model, b.credential_var, b.client_library
        ))?;
    }

    output.print("")?;
    output.header("Templates:")?;
    for t in templates {
        let default = if t.default { " (default)" } else { "" };
        output.print(&format!("  {:<9} {}{default}", t.name, t.description))?;
    }
    Ok(())
}

fn backend_lines(backends: &[BackendInfo]) -> impl Iterator<Item = String> + '_ {
    backends.iter().map(|b| format!("backend/{}", b.name))
}

fn template_lines(templates: &[TemplateInfo]) -> impl Iterator<Item = String> + '_ {
    templates.iter().map(|t| format!("template/{}", t.name))
}

fn csv_rows(backends: &[BackendInfo], templates: &[TemplateInfo]) -> Vec<String> {
    let mut rows = vec!["kind,name,detail,credential_var,client_library".to_string()];
    rows.extend(backends.iter().map(|b| {
        format!(
            "backend,{},{},{},{}",
            b.name, b.model, b.credential_var, b.client_library
        )
    }));
    rows.extend(
        templates
            .iter()
            .map(|t| format!("template,{},{},,", t.name, csv_field(&t.description))),
    );
    rows
}

/// Quote a field if it contains a comma or quote.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_one_row_per_entry() {
        let rows = csv_rows(&CatalogService::backends(), &CatalogService::templates());
        assert_eq!(rows.len(), 1 + 5 + 2);
        assert!(rows.contains(&"backend,openai,gpt-4o-mini,OPENAI_API_KEY,openai".to_string()));
        assert!(rows.iter().any(|r| r.starts_with("template,galaxy,")));
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("stars, image"), "\"stars, image\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn list_lines_are_prefixed_by_kind() {
        let lines: Vec<_> = backend_lines(&CatalogService::backends()).collect();
        assert_eq!(lines[0], "backend/gemini");
        let lines: Vec<_> = template_lines(&CatalogService::templates()).collect();
        assert_eq!(lines, vec!["template/plain", "template/galaxy"]);
    }
}
