//! `genzbot init` - write a default configuration file.

use std::fs;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# GenZBot configuration.
# Flags override these values; GENZBOT__SECTION__KEY variables override both.
#
# [defaults]
# backend = \"gemini\"    # gemini, openai, llama, gemma, mixtral
";

/// Write the built-in defaults to `--config` or the platform location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path(global.config.as_deref());

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let body = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
    }

    fs::write(&config_path, format!("{HEADER}\n{body}"))
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    tracing::info!(path = %config_path.display(), "Configuration written");
    output.success(&format!("Configuration created at {}", config_path.display()))?;

    Ok(())
}
