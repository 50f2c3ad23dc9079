//! Compiled-in source text for generated projects.
//!
//! Every file under `sources/` is embedded with `include_str!`, so the
//! generator needs nothing on disk to produce a project's text files.
//! Only binary assets are looked up at runtime (see [`crate::assets`]).

use genzbot_core::{
    application::ports::SourceStore,
    domain::{BackendSources, Provider, RenderContext, Template, TemplateSources},
    error::GenZBotResult,
};

const SERVICE: &str = include_str!("../sources/shared/app.py");
const SCRIPT: &str = include_str!("../sources/shared/script.js");

const GOOGLE_WRAPPER: &str = include_str!("../sources/google/AIResponse.py");
const OPENAI_WRAPPER: &str = include_str!("../sources/openai/AIResponse.py");
const GROQ_WRAPPER: &str = include_str!("../sources/groq/AIResponse.py");

const PLAIN_MARKUP: &str = include_str!("../sources/plain/index.html");
const PLAIN_STYLE: &str = include_str!("../sources/plain/style.css");
const GALAXY_MARKUP: &str = include_str!("../sources/galaxy/index.html");
const GALAXY_STYLE: &str = include_str!("../sources/galaxy/style.css");

/// Source store backed by the embedded `sources/` tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSources;

impl BuiltinSources {
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for BuiltinSources {
    fn backend_sources(&self, provider: Provider) -> GenZBotResult<BackendSources> {
        let response_wrapper = match provider {
            Provider::Google => GOOGLE_WRAPPER,
            Provider::OpenAi => OPENAI_WRAPPER,
            Provider::Groq => GROQ_WRAPPER,
        };

        // The service is shared; only the provider label differs.
        let service = RenderContext::new()
            .with_variable("PROVIDER", provider.as_str())
            .render(SERVICE);

        Ok(BackendSources {
            response_wrapper: response_wrapper.to_string(),
            service,
        })
    }

    fn template_sources(&self, template: Template) -> GenZBotResult<TemplateSources> {
        let (markup, style) = match template {
            Template::Plain => (PLAIN_MARKUP, PLAIN_STYLE),
            Template::Galaxy => (GALAXY_MARKUP, GALAXY_STYLE),
        };

        Ok(TemplateSources {
            markup: markup.to_string(),
            style: style.to_string(),
            script: SCRIPT.to_string(),
        })
    }
}
