//! Unified error handling for GenZBot Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for GenZBot Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenZBotError {
    /// Errors from the domain layer (invalid choices, missing credential).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (assets, filesystem, processes).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl GenZBotError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the user can fix this by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Validation)
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    /// An external tool failed.
    External,
    Internal,
}

/// Convenient result type alias.
pub type GenZBotResult<T> = Result<T, GenZBotError>;
