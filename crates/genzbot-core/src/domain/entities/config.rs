//! The `GenerationConfig` aggregate and its typestate builder.
//!
//! A `GenerationConfig` is the caller-owned description of the chatbot
//! project to generate. Backend and template are validated enum members by
//! construction. The credential is deliberately optional here: it is only
//! required once generation starts (see [`GenerationConfig::require_credential`]).
//!
//! # Typestate builder
//!
//! The builder carries its backend in the type parameter (`NoBackend` /
//! `HasBackend`) so that `build()` is only reachable once a backend is chosen.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    validation::ConfigValidator,
    value_objects::{Backend, Template},
};

/// Display name used when the caller does not pick one.
pub const DEFAULT_BOT_NAME: &str = "AI-BOT";

/// Project root used when the caller does not pick one.
pub const DEFAULT_OUTPUT_DIR: &str = "Chatbot_Project";

// ── Aggregate ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    backend: Backend,
    template: Template,
    credential: Option<String>,
    behavior: Option<String>,
    bot_name: String,
    output_dir: PathBuf,
}

impl GenerationConfig {
    pub fn builder() -> GenerationConfigBuilder<NoBackend> {
        GenerationConfigBuilder::new()
    }

    /// Start a builder from user-supplied strings.
    ///
    /// Both identifiers are matched case-insensitively. Fails with
    /// [`DomainError::InvalidChoice`] naming the bad field.
    pub fn from_choices(
        backend: &str,
        template: &str,
    ) -> Result<GenerationConfigBuilder<HasBackend>, DomainError> {
        let (backend, template) = ConfigValidator::validate_choices(backend, template)?;
        Ok(Self::builder().backend(backend).template(template))
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }
    pub const fn template(&self) -> Template {
        self.template
    }
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
    pub fn behavior(&self) -> Option<&str> {
        self.behavior.as_deref()
    }
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The credential, or [`DomainError::MissingCredential`] if none is set.
    pub fn require_credential(&self) -> Result<&str, DomainError> {
        ConfigValidator::validate_credential(self.credential())
    }

    /// Replace the credential, e.g. after prompting the user for it.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Re-check the invariants the builder enforces.
    pub fn validate(&self) -> Result<(), DomainError> {
        ConfigValidator::validate_bot_name(&self.bot_name)
    }
}

// The credential never reaches logs or panic messages.
impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("backend", &self.backend)
            .field("template", &self.template)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("behavior", &self.behavior)
            .field("bot_name", &self.bot_name)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bot '{}' ({} template)",
            self.backend, self.bot_name, self.template
        )
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: backend has not yet been set.
pub struct NoBackend;
/// Marker carrying the chosen backend; the config may now be built.
pub struct HasBackend(Backend);

// ── Builder ───────────────────────────────────────────────────────────────────

pub struct GenerationConfigBuilder<B> {
    backend: B,
    template: Template,
    credential: Option<String>,
    behavior: Option<String>,
    bot_name: Option<String>,
    output_dir: Option<PathBuf>,
}

impl GenerationConfigBuilder<NoBackend> {
    pub fn new() -> Self {
        Self {
            backend: NoBackend,
            template: Template::default(),
            credential: None,
            behavior: None,
            bot_name: None,
            output_dir: None,
        }
    }

    /// Set the backend. This transitions the builder to `HasBackend`.
    pub fn backend(self, backend: Backend) -> GenerationConfigBuilder<HasBackend> {
        GenerationConfigBuilder {
            backend: HasBackend(backend),
            template: self.template,
            credential: self.credential,
            behavior: self.behavior,
            bot_name: self.bot_name,
            output_dir: self.output_dir,
        }
    }
}

impl Default for GenerationConfigBuilder<NoBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> GenerationConfigBuilder<B> {
    pub fn template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Behavior text injected as the model's system instruction.
    pub fn behavior(mut self, behavior: impl Into<String>) -> Self {
        self.behavior = Some(behavior.into());
        self
    }

    pub fn bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = Some(name.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

impl GenerationConfigBuilder<HasBackend> {
    /// Build the config.
    ///
    /// A blank credential is normalised to `None`; blank behavior likewise.
    pub fn build(self) -> Result<GenerationConfig, DomainError> {
        let config = GenerationConfig {
            backend: self.backend.0,
            template: self.template,
            credential: self.credential.filter(|c| !c.trim().is_empty()),
            behavior: self.behavior.filter(|b| !b.trim().is_empty()),
            bot_name: self.bot_name.unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        };

        config.validate()?;
        Ok(config)
    }
}
