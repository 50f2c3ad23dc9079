//! Domain value objects: Backend, Provider, Template.
//!
//! # Design
//!
//! These are pure `Copy` value types compared by value.
//! They hold NO profile data. Credential variables, models and dependency
//! pins live in `profiles.rs`. This file's only job is to define the types,
//! their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `ALL` entry and the `FromStr` arm here
//! 3. Add a registry row in `profiles.rs`
//! 4. Nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Backend ──────────────────────────────────────────────────────────────────

/// A language-model backend the generated chatbot talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Gemini,
    OpenAi,
    Llama,
    Gemma,
    Mixtral,
}

impl Backend {
    /// Every backend, in the order they are presented to users.
    pub const ALL: [Backend; 5] = [
        Self::Gemini,
        Self::OpenAi,
        Self::Llama,
        Self::Gemma,
        Self::Mixtral,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Llama => "llama",
            Self::Gemma => "gemma",
            Self::Mixtral => "mixtral",
        }
    }

    /// Names of all backends, for error messages and help text.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Backend::as_str).collect()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == wanted)
            .ok_or_else(|| DomainError::InvalidChoice {
                field: "backend",
                value: s.to_string(),
                valid: Self::names(),
            })
    }
}

// ── Provider ─────────────────────────────────────────────────────────────────

/// The API vendor that hosts a backend.
///
/// Backends that share a provider share the generated source structure; the
/// Groq-hosted models differ only by model id and credential variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    OpenAi,
    Groq,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Self::Google, Self::OpenAi, Self::Groq];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::OpenAi => "openai",
            Self::Groq => "groq",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// The visual design of the generated frontend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Plain,
    Galaxy,
}

impl Template {
    pub const ALL: [Template; 2] = [Self::Plain, Self::Galaxy];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Galaxy => "galaxy",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Template::as_str).collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| DomainError::InvalidChoice {
                field: "template",
                value: s.to_string(),
                valid: Self::names(),
            })
    }
}
