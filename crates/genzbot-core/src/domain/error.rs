// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (user-correctable)
    // ========================================================================
    #[error("invalid {field} '{value}'. Valid options are: {}", .valid.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },

    #[error("API key is required to create the project")]
    MissingCredential,

    #[error("Invalid API key: {reason}")]
    InvalidCredential { reason: String },

    #[error("Invalid bot name: {reason}")]
    InvalidBotName { reason: String },

    // ========================================================================
    // Structure invariants
    // ========================================================================
    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    // ========================================================================
    // Registry gaps (programming errors)
    // ========================================================================
    #[error("No profile registered for {kind} '{name}'")]
    UnregisteredProfile { kind: &'static str, name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidChoice { field, valid, .. } => {
                let mut out = vec![format!("Supported {field} values:")];
                out.extend(valid.iter().map(|v| format!("  • {v}")));
                if let Some(first) = valid.first() {
                    out.push(format!("Example: genzbot new --{field} {first}"));
                }
                out
            }
            Self::MissingCredential => vec![
                "Pass the key with --api-key <KEY>".into(),
                "Or set GENZBOT_API_KEY in your environment or .env".into(),
            ],
            Self::InvalidCredential { .. } => vec![
                "The API key must be a single line".into(),
                "Check for a stray newline when pasting or reading the key from a file".into(),
            ],
            Self::InvalidBotName { .. } => vec![
                "The bot name must be a single non-empty line".into(),
                "Template tags ({% and %}) are not allowed".into(),
                "Example: --name \"Support Bot\"".into(),
            ],
            Self::UnregisteredProfile { .. } => vec![
                "This appears to be a bug in GenZBot".into(),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChoice { .. }
            | Self::MissingCredential
            | Self::InvalidCredential { .. }
            | Self::InvalidBotName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
