//! Placeholder substitution for source templates.
//!
//! Sources use `{{NAME}}` placeholders. Rendering is a single left-to-right
//! scan, so substituted values are never re-scanned: a bot named
//! `{{MODEL_NAME}}` stays exactly that.
//!
//! ## Standard Variables
//!
//! | Variable | Example | Set by |
//! |----------|---------|--------|
//! | `BOT_NAME` | "AI-BOT" | template resolver |
//! | `MODEL_NAME` | "llama3-8b-8192" | backend resolver |
//! | `CREDENTIAL_VAR` | "LLAMA_API_KEY" | backend resolver |
//! | `SYSTEM_INSTRUCTION` | `"Be kind"` / `None` | backend resolver |

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning the extended context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Substitute every known `{{KEY}}`; unknown placeholders are kept as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Render an optional string as a Python expression: a double-quoted
/// literal, or `None`.
pub fn python_literal(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "None".to_string();
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_variables() {
        let ctx = RenderContext::new().with_variable("BOT_NAME", "Helper");
        assert_eq!(ctx.render("<h1>{{BOT_NAME}}</h1>"), "<h1>Helper</h1>");
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("{{ jinja_var }}"), "{{ jinja_var }}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::new()
            .with_variable("BOT_NAME", "{{MODEL_NAME}}")
            .with_variable("MODEL_NAME", "gpt");
        assert_eq!(ctx.render("{{BOT_NAME}}/{{MODEL_NAME}}"), "{{MODEL_NAME}}/gpt");
    }

    #[test]
    fn unterminated_placeholder_is_left_alone() {
        let ctx = RenderContext::new().with_variable("A", "x");
        assert_eq!(ctx.render("{{A}} {{A"), "x {{A");
    }

    #[test]
    fn python_literal_escapes() {
        assert_eq!(python_literal(None), "None");
        assert_eq!(python_literal(Some("be \"nice\"\n")), r#""be \"nice\"\n""#);
        assert_eq!(python_literal(Some(r"C:\x")), r#""C:\\x""#);
    }
}
