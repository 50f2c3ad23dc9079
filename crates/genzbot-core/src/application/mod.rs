//! Application layer for GenZBot.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectGenerator, EnvironmentProvisioner)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BackendInfo, // DTO for listing
    CatalogService,
    EnvironmentLayout,
    EnvironmentProvisioner,
    GeneratedProject,
    HostPlatform,
    ProjectGenerator,
    ProvisionState,
    TemplateInfo, // DTO for listing
};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetProvider, Filesystem, Invocation, ProcessExit, ProcessRunner, SourceStore};

pub use error::ApplicationError;
