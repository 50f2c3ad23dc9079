//! Resolve validated choices into profiles.
//!
//! Both resolvers join a static registry row with source text from the
//! [`SourceStore`]. The template resolver also loads the bundled auxiliary
//! asset, so a broken installation is reported before anything is written.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetProvider, SourceStore},
    },
    domain::{
        AuxiliaryAsset, Backend, BackendProfile, DomainError, RenderContext, Template,
        TemplateProfile,
        profiles::{find_backend, find_template},
        python_literal,
    },
    error::GenZBotResult,
};

/// Map a backend to its profile, rendering the response wrapper with the
/// model id, credential variable and behavior text.
///
/// Deterministic for a given source store; performs no filesystem access.
#[instrument(skip_all, fields(backend = %backend))]
pub fn resolve_backend(
    backend: Backend,
    behavior: Option<&str>,
    sources: &dyn SourceStore,
) -> GenZBotResult<BackendProfile> {
    let def = find_backend(backend).ok_or_else(|| DomainError::UnregisteredProfile {
        kind: "backend",
        name: backend.to_string(),
    })?;

    let raw = sources.backend_sources(def.provider)?;

    let context = RenderContext::new()
        .with_variable("MODEL_NAME", def.model)
        .with_variable("CREDENTIAL_VAR", def.credential_var)
        .with_variable("SYSTEM_INSTRUCTION", python_literal(behavior));

    debug!(provider = %def.provider, model = def.model, "Backend resolved");

    Ok(BackendProfile {
        backend,
        provider: def.provider,
        credential_var: def.credential_var,
        response_wrapper_source: context.render(&raw.response_wrapper),
        service_source: context.render(&raw.service),
        dependencies: def.dependencies(),
    })
}

/// Map a template to its profile.
///
/// Fails with [`ApplicationError::InternalAsset`] when the template bundles
/// an asset the provider cannot find.
#[instrument(skip_all, fields(template = %template))]
pub fn resolve_template(
    template: Template,
    sources: &dyn SourceStore,
    assets: &dyn AssetProvider,
) -> GenZBotResult<TemplateProfile> {
    let def = find_template(template).ok_or_else(|| DomainError::UnregisteredProfile {
        kind: "template",
        name: template.to_string(),
    })?;

    let raw = sources.template_sources(template)?;

    let auxiliary_asset = match def.auxiliary_asset {
        Some(id) => {
            let bytes = assets
                .load(&id)?
                .ok_or_else(|| ApplicationError::InternalAsset {
                    asset: id.to_string(),
                    searched: assets.searched(),
                })?;
            debug!(asset = %id, size = bytes.len(), "Auxiliary asset loaded");
            Some(AuxiliaryAsset { id, bytes })
        }
        None => None,
    };

    Ok(TemplateProfile::new(template, raw, auxiliary_asset))
}
