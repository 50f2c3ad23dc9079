//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GENZBOT__SECTION__KEY` environment variables
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use genzbot_core::domain::{DEFAULT_BOT_NAME, DEFAULT_OUTPUT_DIR, Template};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "GENZBOT";

/// Every key `config get` understands.
pub const KEYS: [&str; 7] = [
    "defaults.backend",
    "defaults.template",
    "defaults.bot_name",
    "defaults.output_dir",
    "provision.python",
    "output.no_color",
    "output.format",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for `genzbot new` flags.
    pub defaults: Defaults,
    pub provision: ProvisionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// No built-in default: the user must choose a backend once.
    pub backend: Option<String>,
    pub template: String,
    pub bot_name: String,
    pub output_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            backend: None,
            template: Template::default().to_string(),
            bot_name: DEFAULT_BOT_NAME.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Interpreter used to create the virtual environment.
    /// Unset means `python3` (`python` on Windows).
    pub python: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file at `config_file` (or the default
    /// location) layered under `GENZBOT__*` environment variables.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = Self::config_path(config_file);
        tracing::debug!(path = %path.display(), exists = path.exists(), "Loading configuration");

        Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    }

    /// `explicit` if given, else `config.toml` in the platform config
    /// directory, else `.genzbot.toml` in the current directory.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        directories::ProjectDirs::from("dev", "genzbot", "genzbot")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".genzbot.toml"))
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Value of a dotted key, `None` if the key is unknown.
    /// Unset optional values read as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let path_value = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        let value = match key {
            "defaults.backend" => self.defaults.backend.clone().unwrap_or_default(),
            "defaults.template" => self.defaults.template.clone(),
            "defaults.bot_name" => self.defaults.bot_name.clone(),
            "defaults.output_dir" => self.defaults.output_dir.display().to_string(),
            "provision.python" => path_value(&self.provision.python),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_match_the_generator() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.backend, None);
        assert_eq!(cfg.defaults.template, "plain");
        assert_eq!(cfg.defaults.bot_name, "AI-BOT");
        assert_eq!(cfg.defaults.output_dir, PathBuf::from("Chatbot_Project"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(cfg.defaults.template, "plain");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nbackend = \"llama\"\nbot_name = \"Nova\"\n\n[provision]\npython = \"/usr/bin/python3.12\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.defaults.backend.as_deref(), Some("llama"));
        assert_eq!(cfg.defaults.bot_name, "Nova");
        // Untouched keys keep their defaults.
        assert_eq!(cfg.defaults.template, "plain");
        assert_eq!(
            cfg.provision.python,
            Some(PathBuf::from("/usr/bin/python3.12"))
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults\nbackend = ").unwrap();
        assert!(AppConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = cfg.to_toml().unwrap();
        assert!(text.contains("[defaults]"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.template").as_deref(), Some("plain"));
        assert_eq!(cfg.get("defaults.backend").as_deref(), Some(""));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
        for key in KEYS {
            assert!(cfg.get(key).is_some(), "{key} not readable");
        }
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = AppConfig::config_path(Some(Path::new("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
        assert!(!AppConfig::config_path(None).as_os_str().is_empty());
    }
}
