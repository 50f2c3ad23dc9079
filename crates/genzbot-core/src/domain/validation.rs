use crate::domain::{
    entities::ProjectStructure,
    error::DomainError,
    value_objects::{Backend, Template},
};

/// Centralized configuration validation.
///
/// All validation logic lives here, not scattered across entities. Nothing
/// in here touches the filesystem.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Parse and check the backend and template identifiers.
    ///
    /// The backend is checked first, so when both are wrong the error names
    /// the backend.
    pub fn validate_choices(
        backend: &str,
        template: &str,
    ) -> Result<(Backend, Template), DomainError> {
        let backend = backend.parse::<Backend>()?;
        let template = template.parse::<Template>()?;
        Ok((backend, template))
    }

    /// The credential becomes the single line of the generated `.env`.
    pub fn validate_credential(credential: Option<&str>) -> Result<&str, DomainError> {
        match credential {
            Some(c) if c.contains(['\n', '\r']) => Err(DomainError::InvalidCredential {
                reason: "key contains a line break".into(),
            }),
            Some(c) if !c.trim().is_empty() => Ok(c),
            _ => Err(DomainError::MissingCredential),
        }
    }

    /// The bot name lands verbatim in a `<title>` and a header line, inside a
    /// Jinja `raw` block.
    pub fn validate_bot_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidBotName {
                reason: "name cannot be empty".into(),
            });
        }
        if name.contains(['\n', '\r']) {
            return Err(DomainError::InvalidBotName {
                reason: "name must fit on one line".into(),
            });
        }
        if name.contains("{%") || name.contains("%}") {
            return Err(DomainError::InvalidBotName {
                reason: "name cannot contain template tags ({% or %})".into(),
            });
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
