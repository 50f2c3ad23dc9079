//! Catalog Service - what can be generated.
//!
//! Read-only views over the backend and template registries for listing.

use serde::Serialize;

use crate::domain::{BACKEND_REGISTRY, Backend, TEMPLATE_REGISTRY, Template};

/// Information about a backend for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendInfo {
    pub name: String,
    pub provider: String,
    pub model: String,
    pub credential_var: String,
    pub client_library: String,
}

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub assets: Vec<String>,
    pub default: bool,
}

pub struct CatalogService;

impl CatalogService {
    pub fn backends() -> Vec<BackendInfo> {
        BACKEND_REGISTRY
            .iter()
            .map(|def| BackendInfo {
                name: def.backend.to_string(),
                provider: def.provider.to_string(),
                model: def.model.to_string(),
                credential_var: def.credential_var.to_string(),
                client_library: def.client_library.to_string(),
            })
            .collect()
    }

    pub fn templates() -> Vec<TemplateInfo> {
        TEMPLATE_REGISTRY
            .iter()
            .map(|def| TemplateInfo {
                name: def.template.to_string(),
                description: def.description.to_string(),
                assets: def
                    .auxiliary_asset
                    .iter()
                    .map(|a| a.file_name.to_string())
                    .collect(),
                default: def.template == Template::default(),
            })
            .collect()
    }

    /// Valid backend identifiers, in registry order.
    pub fn backend_names() -> Vec<&'static str> {
        Backend::names()
    }

    pub fn template_names() -> Vec<&'static str> {
        Template::names()
    }
}
