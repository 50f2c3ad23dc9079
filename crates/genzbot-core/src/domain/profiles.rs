//! Backend and template profile registries.
//!
//! Each backend and each template is described exactly once by a static
//! row. Everything the generator needs to know about a choice (credential
//! variable, model id, client library, bundled assets) derives from here.
//! All lookups are O(n) table scans over a handful of rows.
//!
//! # Adding a New Backend
//!
//! 1. Add a variant to `Backend` in `value_objects.rs`
//! 2. Add one [`BackendDef`] row to [`BACKEND_REGISTRY`]
//! 3. If it needs a new provider, add provider sources to the source store

use std::fmt;

use crate::domain::value_objects::{Backend, Provider, Template};

// ── Dependencies ─────────────────────────────────────────────────────────────

/// One line of a generated `requirements.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub name: &'static str,
    pub version: Option<&'static str>,
}

impl Dependency {
    pub const fn unpinned(name: &'static str) -> Self {
        Self {
            name,
            version: None,
        }
    }

    pub const fn pinned(name: &'static str, version: &'static str) -> Self {
        Self {
            name,
            version: Some(version),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(v) => write!(f, "{}=={}", self.name, v),
            None => f.write_str(self.name),
        }
    }
}

/// Web micro-framework every generated service is built on.
pub const WEB_FRAMEWORK: Dependency = Dependency::unpinned("flask");

/// Loader for the generated `.env` file.
pub const ENV_LOADER: Dependency = Dependency::unpinned("python-dotenv");

/// Production WSGI server, pinned.
pub const WSGI_SERVER: Dependency = Dependency::pinned("gunicorn", "20.1.0");

/// Dependencies shared by every backend, in manifest order around the client.
pub const BASE_DEPENDENCIES: [Dependency; 3] = [WEB_FRAMEWORK, ENV_LOADER, WSGI_SERVER];

// ── Backend definitions ──────────────────────────────────────────────────────

/// Everything the generator needs to know about one backend.
#[derive(Debug, Clone, Copy)]
pub struct BackendDef {
    pub backend: Backend,

    /// Determines which response-wrapper and service sources are used.
    pub provider: Provider,

    /// Variable written to `.env` and read back by the generated wrapper.
    ///
    /// Unique across the registry.
    pub credential_var: &'static str,

    /// Model id passed to the provider's client library.
    pub model: &'static str,

    /// The provider's Python client, the only backend-specific dependency.
    pub client_library: Dependency,
}

impl BackendDef {
    /// The full dependency list in manifest order.
    ///
    /// Always framework, env loader, client library, then the WSGI pin.
    pub fn dependencies(&self) -> Vec<Dependency> {
        let [framework, loader, server] = BASE_DEPENDENCIES;
        vec![framework, loader, self.client_library, server]
    }
}

/// Single source of truth for backend profiles.
pub static BACKEND_REGISTRY: &[BackendDef] = &[
    BackendDef {
        backend: Backend::Gemini,
        provider: Provider::Google,
        credential_var: "GOOGLE_API_KEY",
        model: "gemini-1.5-flash",
        client_library: Dependency::unpinned("google-generativeai"),
    },
    BackendDef {
        backend: Backend::OpenAi,
        provider: Provider::OpenAi,
        credential_var: "OPENAI_API_KEY",
        model: "gpt-4o-mini",
        client_library: Dependency::unpinned("openai"),
    },
    // ── Groq-hosted ──────────────────────────────────────────────────────────
    BackendDef {
        backend: Backend::Llama,
        provider: Provider::Groq,
        credential_var: "LLAMA_API_KEY",
        model: "llama3-8b-8192",
        client_library: Dependency::unpinned("groq"),
    },
    BackendDef {
        backend: Backend::Gemma,
        provider: Provider::Groq,
        credential_var: "GEMMA_API_KEY",
        model: "gemma-7b-it",
        client_library: Dependency::unpinned("groq"),
    },
    BackendDef {
        backend: Backend::Mixtral,
        provider: Provider::Groq,
        credential_var: "MIXTRAL_API_KEY",
        model: "mixtral-8x7b-32768",
        client_library: Dependency::unpinned("groq"),
    },
];

// ── Template definitions ─────────────────────────────────────────────────────

/// A binary file bundled with the generator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId {
    /// Location inside the bundled assets directory.
    pub source: &'static str,
    /// File name inside `Frontend/static/` of the generated project.
    pub file_name: &'static str,
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

/// Background image used by the galaxy design.
pub const GALAXY_IMAGE: AssetId = AssetId {
    source: "images/galaxy_img.png",
    file_name: "galaxy_img.png",
};

#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    pub template: Template,
    pub description: &'static str,
    pub auxiliary_asset: Option<AssetId>,
}

/// Single source of truth for frontend designs.
pub static TEMPLATE_REGISTRY: &[TemplateDef] = &[
    TemplateDef {
        template: Template::Plain,
        description: "Minimal light chat window",
        auxiliary_asset: None,
    },
    TemplateDef {
        template: Template::Galaxy,
        description: "Dark chat window over a galaxy backdrop",
        auxiliary_asset: Some(GALAXY_IMAGE),
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────

/// Find the profile row for a backend.
///
/// `None` is a programming error, not a user error. The registry integrity
/// test catches it.
pub fn find_backend(backend: Backend) -> Option<&'static BackendDef> {
    BACKEND_REGISTRY.iter().find(|def| def.backend == backend)
}

pub fn find_template(template: Template) -> Option<&'static TemplateDef> {
    TEMPLATE_REGISTRY.iter().find(|def| def.template == template)
}

/// Client libraries of every provider other than `provider`.
pub fn foreign_client_libraries(provider: Provider) -> Vec<&'static str> {
    let mut libs: Vec<&'static str> = BACKEND_REGISTRY
        .iter()
        .filter(|def| def.provider != provider)
        .map(|def| def.client_library.name)
        .collect();
    libs.dedup();
    libs
}
