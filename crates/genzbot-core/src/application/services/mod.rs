//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "provision it".

pub mod assembler;
pub mod catalog_service;
pub mod generator_service;
pub mod provisioner;
pub mod resolver;

pub use assembler::{assemble, customize};
pub use catalog_service::{BackendInfo, CatalogService, TemplateInfo};
pub use generator_service::{GeneratedProject, ProjectGenerator};
pub use provisioner::{EnvironmentLayout, EnvironmentProvisioner, HostPlatform, ProvisionState};
pub use resolver::{resolve_backend, resolve_template};
