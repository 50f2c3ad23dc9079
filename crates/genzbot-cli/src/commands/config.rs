//! `genzbot config` - inspect configuration values.

use std::collections::BTreeMap;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&BTreeMap::from([(key, value)]))?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.header("Current Configuration:")?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path(global.config.as_deref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key)
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.bot_name").unwrap(), "AI-BOT");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "defaults.lang"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_configured_python() {
        let mut cfg = AppConfig::default();
        cfg.provision.python = Some("/opt/py/bin/python3".into());
        assert_eq!(
            get_config_value(&cfg, "provision.python").unwrap(),
            "/opt/py/bin/python3"
        );
    }
}
