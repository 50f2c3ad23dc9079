//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation and provisioning.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A bundled asset is missing: the installation is broken.
    #[error("Internal error: bundled asset '{asset}' not found (searched: {searched})")]
    InternalAsset { asset: String, searched: String },

    /// An external tool exited non-zero or could not be started.
    #[error("{step} failed: `{command}` {}", describe_status(.status, .reason))]
    ExternalProcess {
        step: &'static str,
        command: String,
        status: Option<i32>,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A generated file the provisioner relies on is missing.
    #[error("Missing project artifact: {path}")]
    MissingArtifact { path: PathBuf },

    /// An adapter's lock was poisoned by a panicking writer.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn describe_status(status: &Option<i32>, reason: &str) -> String {
    match *status {
        Some(code) => format!("exited with status {code}"),
        None if reason.is_empty() => "terminated without an exit status".to_string(),
        None => format!("could not run: {reason}"),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InternalAsset { searched, .. } => vec![
                "The GenZBot installation looks incomplete".into(),
                format!("Searched: {searched}"),
                "Set GENZBOT_ASSETS_DIR to the bundled assets directory".into(),
                "Or reinstall GenZBot".into(),
            ],
            Self::ExternalProcess { step, status, .. } => {
                let mut out = vec![format!("The {step} step failed")];
                if status.is_none() {
                    out.push("Ensure Python 3 is installed and on your PATH".into());
                    out.push("Or set provision.python in the config file".into());
                } else {
                    out.push("Check the tool output above for details".into());
                }
                out
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "A partially written project may remain; remove it manually".into(),
            ],
            Self::MissingArtifact { path } => vec![
                format!("Expected file not found: {}", path.display()),
                "Generate the project first: genzbot new <DIR>".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InternalAsset { .. } | Self::FilesystemError { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
            Self::ExternalProcess { .. } => ErrorCategory::External,
            Self::MissingArtifact { .. } => ErrorCategory::NotFound,
        }
    }
}
