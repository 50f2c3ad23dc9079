//! Resolved backend and template profiles.
//!
//! A profile is what the resolvers hand to the assembler: registry data
//! joined with the source text for one choice. Profiles are built fresh per
//! generation pass and never mutated.

use crate::domain::{
    entities::render_context::RenderContext,
    profiles::{AssetId, Dependency},
    value_objects::{Backend, Provider, Template},
};

/// Raw source text for one provider, straight from a source store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSources {
    /// `AI_Service/AIResponse.py`, with `{{MODEL_NAME}}`, `{{CREDENTIAL_VAR}}`
    /// and `{{SYSTEM_INSTRUCTION}}` placeholders.
    pub response_wrapper: String,
    /// `Backend/app.py`.
    pub service: String,
}

/// Raw source text for one frontend design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSources {
    /// `index.html` with a `{{BOT_NAME}}` placeholder.
    pub markup: String,
    pub style: String,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendProfile {
    pub backend: Backend,
    pub provider: Provider,
    pub credential_var: &'static str,
    pub response_wrapper_source: String,
    pub service_source: String,
    pub dependencies: Vec<Dependency>,
}

impl BackendProfile {
    /// Content of the generated `.env`: exactly one line.
    pub fn env_file(&self, credential: &str) -> String {
        let escaped = credential.replace('\\', "\\\\").replace('"', "\\\"");
        format!("{}=\"{}\"\n", self.credential_var, escaped)
    }

    /// Content of the generated `requirements.txt`, one pin per line.
    pub fn requirements(&self) -> String {
        self.dependencies
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A bundled binary copied verbatim into the generated project.
#[derive(Clone, PartialEq, Eq)]
pub struct AuxiliaryAsset {
    pub id: AssetId,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AuxiliaryAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuxiliaryAsset")
            .field("id", &self.id)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateProfile {
    pub template: Template,
    sources: TemplateSources,
    pub auxiliary_asset: Option<AuxiliaryAsset>,
}

impl TemplateProfile {
    pub fn new(
        template: Template,
        sources: TemplateSources,
        auxiliary_asset: Option<AuxiliaryAsset>,
    ) -> Self {
        Self {
            template,
            sources,
            auxiliary_asset,
        }
    }

    /// The page markup with `bot_name` inserted verbatim. The sources keep the
    /// slot inside `{% raw %}` so Flask shows the name as written.
    pub fn markup(&self, bot_name: &str) -> String {
        RenderContext::new()
            .with_variable("BOT_NAME", bot_name)
            .render(&self.sources.markup)
    }

    pub fn style(&self) -> String {
        self.sources.style.clone()
    }

    pub fn script(&self) -> String {
        self.sources.script.clone()
    }
}
