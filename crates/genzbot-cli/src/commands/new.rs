//! Implementation of the `genzbot new` command.
//!
//! Translates flags and config defaults into a `GenerationConfig`, calls the
//! core generator and reports the result. No generation logic lives here.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use genzbot_adapters::{BuiltinSources, BundledAssets, LocalFilesystem};
use genzbot_core::{
    application::{CatalogService, GeneratedProject, ProjectGenerator},
    domain::{FileContent, GenerationConfig, ProjectStructure, layout, profiles::find_backend},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    commands::run,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `genzbot new` command.
///
/// 1. Merge flags over config defaults and validate them
/// 2. Prompt for anything missing when a terminal is attached
/// 3. `--dry-run`: print the plan and stop
/// 4. Confirm unless `--yes` or `--quiet`
/// 5. Generate, then provision and launch with `--run`
#[instrument(skip_all, fields(dir = ?args.dir))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let generation = build_config(&args, &config, &output)?;
    let generation = ensure_credential(generation, &output)?;

    debug!(config = ?generation, "Generation config resolved");

    let generator = ProjectGenerator::new(
        Box::new(BuiltinSources::new()),
        Box::new(BundledAssets::discover()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let plan = generator.plan(&generation)?;
        return show_plan(&generation, &plan, &output);
    }

    if !global.quiet && !args.yes && output.can_prompt() {
        show_configuration(&generation, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    output.header(&format!("Creating {}...", generation.output_dir().display()))?;
    let project = generator.create_project(&generation)?;
    info!(run_id = %project.run_id, files = project.files.len(), "Project generated");

    report(&project, &generation, &output)?;

    if args.run {
        run::provision(&project.root, &config, &output)?;
    } else if !output.is_json() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  genzbot run {}", project.root.display()))?;
    }

    Ok(())
}

// ── Config construction ───────────────────────────────────────────────────────

/// Flags win over config defaults. Backend and template strings from either
/// source go through the same case-insensitive validation.
fn build_config(
    args: &NewArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<GenerationConfig> {
    let backend = match args.backend.as_ref().or(config.defaults.backend.as_ref()) {
        Some(backend) => backend.clone(),
        None => choose_backend(output)?,
    };
    let template = args
        .template
        .as_deref()
        .unwrap_or(&config.defaults.template);

    let mut builder = GenerationConfig::from_choices(&backend, template)?
        .bot_name(args.name.as_deref().unwrap_or(&config.defaults.bot_name))
        .output_dir(
            args.dir
                .clone()
                .unwrap_or_else(|| config.defaults.output_dir.clone()),
        );

    if let Some(key) = &args.api_key {
        builder = builder.credential(key);
    }
    if let Some(behavior) = read_behavior(args)? {
        builder = builder.behavior(behavior);
    }

    Ok(builder.build()?)
}

fn read_behavior(args: &NewArgs) -> CliResult<Option<String>> {
    match (&args.behavior, &args.behavior_file) {
        (Some(text), _) => Ok(Some(text.clone())),
        (None, Some(path)) => fs::read_to_string(path)
            .map(Some)
            .with_cli_context(|| format!("Failed to read behavior file '{}'", path.display())),
        (None, None) => Ok(None),
    }
}

/// Without a backend flag or config default, ask; else fail with the list
/// of valid choices.
fn choose_backend(output: &OutputManager) -> CliResult<String> {
    if output.can_prompt() {
        if let Some(name) = prompt_backend()? {
            return Ok(name);
        }
    }
    Err(CliError::InvalidInput {
        message: format!(
            "no backend chosen; pass --backend with one of: {}",
            CatalogService::backend_names().join(", ")
        ),
        source: None,
    })
}

/// Prompt for a missing API key on a terminal. Without one the generator
/// reports the missing credential itself.
fn ensure_credential(
    config: GenerationConfig,
    output: &OutputManager,
) -> CliResult<GenerationConfig> {
    if config.credential().is_some() || !output.can_prompt() {
        return Ok(config);
    }
    match prompt_credential(&config)? {
        Some(key) => Ok(config.with_credential(key)),
        None => Ok(config),
    }
}

#[cfg(feature = "interactive")]
fn prompt_backend() -> CliResult<Option<String>> {
    use dialoguer::{Select, theme::ColorfulTheme};

    let names = CatalogService::backend_names();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Backend")
        .items(&names)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(names.get(index).map(|name| name.to_string()))
}

#[cfg(feature = "interactive")]
fn prompt_credential(config: &GenerationConfig) -> CliResult<Option<String>> {
    use dialoguer::{Password, theme::ColorfulTheme};

    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("API key for {}", config.backend()))
        .interact()
        .map(Some)
        .map_err(prompt_error)
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::Prompt {
        message: err.to_string(),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_backend() -> CliResult<Option<String>> {
    Ok(None)
}

#[cfg(not(feature = "interactive"))]
fn prompt_credential(_config: &GenerationConfig) -> CliResult<Option<String>> {
    Ok(None)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(config: &GenerationConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.field("Bot name", config.bot_name())?;
    out.field("Backend", config.backend().as_str())?;
    out.field("Template", config.template().as_str())?;
    out.field(
        "Behavior",
        config.behavior().map_or("(model default)", first_line),
    )?;
    out.field("Location", &config.output_dir().display().to_string())?;
    out.print("")?;
    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(prompt_error)
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

/// One planned file, as printed by `--dry-run`.
#[derive(Debug, Serialize)]
struct PlannedFile {
    path: String,
    bytes: usize,
    binary: bool,
}

fn planned_files(plan: &ProjectStructure) -> Vec<PlannedFile> {
    plan.files()
        .map(|file| PlannedFile {
            path: display_path(&file.path),
            bytes: file.size(),
            binary: matches!(file.content, FileContent::Binary(_)),
        })
        .collect()
}

/// The credential file is listed by size only.
fn show_plan(
    config: &GenerationConfig,
    plan: &ProjectStructure,
    out: &OutputManager,
) -> CliResult<()> {
    let files = planned_files(plan);

    if out.is_json() {
        out.json(&serde_json::json!({
            "dry_run": true,
            "root": plan.root(),
            "backend": config.backend().as_str(),
            "template": config.template().as_str(),
            "directories": plan.directories().map(|d| display_path(&d.path)).collect::<Vec<_>>(),
            "files": files,
        }))?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create {} at {}",
        config,
        plan.root().display()
    ))?;
    for dir in plan.directories() {
        out.print(&format!("  {}/", display_path(&dir.path)))?;
    }
    for file in &files {
        let kind = if file.binary { "binary" } else { "text" };
        out.print(&format!("  {:<34} {:>6} bytes ({kind})", file.path, file.bytes))?;
    }
    Ok(())
}

fn report(
    project: &GeneratedProject,
    config: &GenerationConfig,
    out: &OutputManager,
) -> CliResult<()> {
    if out.is_json() {
        out.json(&serde_json::json!({
            "run_id": project.run_id.to_string(),
            "root": project.root,
            "backend": project.backend.as_str(),
            "template": project.template.as_str(),
            "bot_name": config.bot_name(),
            "files": project.files.iter().map(|p| display_path(p)).collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    out.success(&format!("Created {config}"))?;
    for path in &project.files {
        debug!(path = %path.display(), "Generated");
    }
    out.field("Location", &project.root.display().to_string())?;
    if let Some(def) = find_backend(project.backend) {
        out.field(
            "Credential",
            &format!("{} in {}", def.credential_var, layout::ENV_FILE),
        )?;
    }
    Ok(())
}

/// Forward slashes on every platform so output is stable.
fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands, OutputFormat};
    use genzbot_core::domain::{Backend, Template};

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["genzbot", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            other => panic!("expected New, got {other:?}"),
        }
    }

    fn plain_output() -> OutputManager {
        let args = GlobalArgs {
            output_format: OutputFormat::Plain,
            ..GlobalArgs::for_tests()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn flags_win_over_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.backend = Some("gemini".into());
        config.defaults.bot_name = "FromConfig".into();

        let args = new_args(&["bot", "-b", "MIXTRAL", "-n", "Flag", "-k", "gsk_1"]);
        let generation = build_config(&args, &config, &plain_output()).unwrap();

        assert_eq!(generation.backend(), Backend::Mixtral);
        assert_eq!(generation.bot_name(), "Flag");
        assert_eq!(generation.output_dir(), Path::new("bot"));
        assert_eq!(generation.credential(), Some("gsk_1"));
    }

    #[test]
    fn config_defaults_fill_missing_flags() {
        let mut config = AppConfig::default();
        config.defaults.backend = Some("openai".into());
        config.defaults.template = "galaxy".into();

        let args = new_args(&["-k", "sk-1"]);
        let generation = build_config(&args, &config, &plain_output()).unwrap();

        assert_eq!(generation.backend(), Backend::OpenAi);
        assert_eq!(generation.template(), Template::Galaxy);
        assert_eq!(generation.bot_name(), "AI-BOT");
        assert_eq!(generation.output_dir(), Path::new("Chatbot_Project"));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let args = new_args(&["-b", "claude", "-k", "x"]);
        let err = build_config(&args, &AppConfig::default(), &plain_output()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("claude"));
    }

    #[test]
    fn no_backend_without_terminal_is_invalid_input() {
        let args = new_args(&["-k", "x"]);
        let err = build_config(&args, &AppConfig::default(), &plain_output()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn behavior_is_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.txt");
        fs::write(&path, "You answer in haiku.").unwrap();

        let args = new_args(&["-b", "gemma", "--behavior-file", path.to_str().unwrap()]);
        let generation = build_config(&args, &AppConfig::default(), &plain_output()).unwrap();
        assert_eq!(generation.behavior(), Some("You answer in haiku."));
    }

    #[test]
    fn missing_behavior_file_is_io_error() {
        let args = new_args(&["-b", "gemma", "--behavior-file", "/definitely/not/here.txt"]);
        let err = build_config(&args, &AppConfig::default(), &plain_output()).unwrap_err();
        assert!(matches!(err, CliError::IoError { .. }));
    }

    #[test]
    fn plan_listing_hides_credential_contents() {
        let plan = ProjectStructure::new("bot")
            .with_directory("Backend")
            .with_file(layout::ENV_FILE, FileContent::Text("GOOGLE_API_KEY=\"secret\"\n".into()))
            .with_file("Frontend/static/galaxy_img.png", FileContent::Binary(vec![0; 8]));

        let files = planned_files(&plan);
        assert_eq!(files.len(), 2);
        let env = &files[0];
        assert_eq!(env.path, ".env");
        assert_eq!(env.bytes, 24);
        assert!(files[1].binary);
        let json = serde_json::to_string(&files).unwrap();
        assert!(!json.contains("secret"));
    }
}
