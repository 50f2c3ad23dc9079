//! GenZBot Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the GenZBot
//! chatbot project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           genzbot-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectGenerator, EnvironmentProvisioner)
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SourceStore, AssetProvider, Filesystem,│
//! │  ProcessRunner)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     genzbot-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationConfig, registries, plans)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use genzbot_core::prelude::*;
//!
//! let config = GenerationConfig::from_choices("gemini", "galaxy")?
//!     .credential("AIza...")
//!     .bot_name("Nova")
//!     .build()?;
//!
//! // Adapters come from `genzbot-adapters`.
//! # let generator: ProjectGenerator = unimplemented!();
//! let project = generator.create_project(&config)?;
//! println!("created {}", project.root.display());
//! # Ok::<(), GenZBotError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, EnvironmentProvisioner, GeneratedProject, HostPlatform, ProjectGenerator,
        ProvisionState,
        ports::{AssetProvider, Filesystem, ProcessRunner, SourceStore},
    };
    pub use crate::domain::{
        Backend, GenerationConfig, GenerationConfigBuilder, ProjectStructure, Provider,
        RenderContext, Template,
    };
    pub use crate::error::{GenZBotError, GenZBotResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
