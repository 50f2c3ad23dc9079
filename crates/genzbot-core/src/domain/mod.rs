// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for GenZBot.
//!
//! This module contains pure generation logic with no I/O. Source text,
//! bundled assets, the filesystem and external processes are reached via
//! ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: observability belongs to the application layer
//! - **Static profiles**: backends and templates are registry rows
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod profiles;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    config::{
        DEFAULT_BOT_NAME, DEFAULT_OUTPUT_DIR, GenerationConfig, GenerationConfigBuilder,
        HasBackend, NoBackend,
    },
    profile::{AuxiliaryAsset, BackendProfile, BackendSources, TemplateProfile, TemplateSources},
    project_structure::{
        DirectoryToCreate, FileContent, FileToWrite, FsEntry, ProjectStructure, layout,
    },
    render_context::{RenderContext, python_literal},
};

pub use error::{DomainError, ErrorCategory};

pub use profiles::{
    AssetId, BACKEND_REGISTRY, BASE_DEPENDENCIES, BackendDef, Dependency, GALAXY_IMAGE,
    TEMPLATE_REGISTRY, TemplateDef,
};

pub use value_objects::{Backend, Provider, Template};

pub use validation::ConfigValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!(Backend::from_str("gemini").unwrap(), Backend::Gemini);
        assert_eq!(Backend::from_str("OpenAI").unwrap(), Backend::OpenAi);
        assert_eq!(Backend::from_str(" MIXTRAL ").unwrap(), Backend::Mixtral);
    }

    #[test]
    fn unknown_backend_lists_valid_choices() {
        let err = Backend::from_str("claude").unwrap_err();
        match &err {
            DomainError::InvalidChoice {
                field,
                value,
                valid,
            } => {
                assert_eq!(*field, "backend");
                assert_eq!(value, "claude");
                assert_eq!(valid, &["gemini", "openai", "llama", "gemma", "mixtral"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("claude"));
        assert!(msg.contains("gemini, openai, llama, gemma, mixtral"));
    }

    #[test]
    fn template_parses_case_insensitively() {
        assert_eq!(Template::from_str("Plain").unwrap(), Template::Plain);
        assert_eq!(Template::from_str("GALAXY").unwrap(), Template::Galaxy);
        assert!(matches!(
            Template::from_str("neon"),
            Err(DomainError::InvalidChoice {
                field: "template",
                ..
            })
        ));
    }

    #[test]
    fn default_template_is_plain() {
        assert_eq!(Template::default(), Template::Plain);
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_reports_backend_before_template() {
        let err = ConfigValidator::validate_choices("claude", "neon").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidChoice {
                field: "backend",
                ..
            }
        ));
    }

    #[test]
    fn validator_rejects_blank_credential() {
        assert_eq!(
            ConfigValidator::validate_credential(None),
            Err(DomainError::MissingCredential)
        );
        assert_eq!(
            ConfigValidator::validate_credential(Some("   ")),
            Err(DomainError::MissingCredential)
        );
        assert_eq!(ConfigValidator::validate_credential(Some("k")), Ok("k"));
    }

    #[test]
    fn validator_rejects_multiline_credential() {
        for key in ["sk-1\nINJECTED=1", "sk-1\r", "\n"] {
            let err = ConfigValidator::validate_credential(Some(key)).unwrap_err();
            assert!(matches!(err, DomainError::InvalidCredential { .. }), "{key:?}");
            assert_eq!(err.category(), ErrorCategory::Validation);
        }
    }

    #[test]
    fn choice_errors_are_validation_category() {
        assert_eq!(
            DomainError::MissingCredential.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::EmptyStructure.category(),
            ErrorCategory::Internal
        );
    }

    // ========================================================================
    // GenerationConfig Tests
    // ========================================================================

    #[test]
    fn config_builder_defaults() {
        let config = GenerationConfig::builder()
            .backend(Backend::Gemini)
            .build()
            .unwrap();

        assert_eq!(config.template(), Template::Plain);
        assert_eq!(config.bot_name(), "AI-BOT");
        assert_eq!(config.output_dir(), Path::new("Chatbot_Project"));
        assert_eq!(config.behavior(), None);
    }

    #[test]
    fn config_does_not_require_credential_to_build() {
        let config = GenerationConfig::builder()
            .backend(Backend::Llama)
            .build()
            .unwrap();

        assert_eq!(config.credential(), None);
        assert_eq!(
            config.require_credential(),
            Err(DomainError::MissingCredential)
        );
        let config = config.with_credential("gsk_1");
        assert_eq!(config.require_credential(), Ok("gsk_1"));
    }

    #[test]
    fn config_from_choices() {
        let config = GenerationConfig::from_choices("GEMMA", "galaxy")
            .unwrap()
            .credential("k")
            .behavior("You are terse.")
            .bot_name("Gem")
            .build()
            .unwrap();

        assert_eq!(config.backend(), Backend::Gemma);
        assert_eq!(config.template(), Template::Galaxy);
        assert_eq!(config.behavior(), Some("You are terse."));
    }

    #[test]
    fn config_rejects_empty_bot_name() {
        let result = GenerationConfig::builder()
            .backend(Backend::Gemini)
            .bot_name("  ")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidBotName { .. })));
    }

    #[test]
    fn bot_name_may_not_open_a_template_tag() {
        for name in ["{% endraw %}", "Bot %}"] {
            assert!(matches!(
                ConfigValidator::validate_bot_name(name),
                Err(DomainError::InvalidBotName { .. })
            ));
        }
        assert!(ConfigValidator::validate_bot_name("{{ Bot }} 100%").is_ok());
    }

    #[test]
    fn config_debug_redacts_credential() {
        let config = GenerationConfig::builder()
            .backend(Backend::OpenAi)
            .credential("sk-secret")
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    // ========================================================================
    // Project Structure Tests
    // ========================================================================

    #[test]
    fn project_structure_builds_correctly() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_directory("Backend")
            .with_file("Backend/app.py", FileContent::Text("app".into()));

        assert_eq!(structure.entry_count(), 2);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.directories().count(), 1);
        assert!(structure.file("Backend/app.py").is_some());
    }

    #[test]
    fn project_structure_validates_duplicates() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_file(".env", FileContent::Text(String::new()))
            .with_file(".env", FileContent::Text(String::new()));

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn project_structure_validates_empty() {
        let structure = ProjectStructure::new("/tmp/test");
        assert_eq!(structure.validate(), Err(DomainError::EmptyStructure));
    }

    #[test]
    fn project_structure_rejects_absolute_paths() {
        let structure = ProjectStructure::new("/tmp/test")
            .with_file("/etc/passwd", FileContent::Binary(vec![]));
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
