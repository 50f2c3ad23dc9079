pub mod config;
pub mod profile;
pub mod project_structure;
pub mod render_context;

pub use crate::domain::DomainError;
pub use config::GenerationConfig;
pub use profile::{BackendProfile, TemplateProfile};
pub use project_structure::ProjectStructure;
