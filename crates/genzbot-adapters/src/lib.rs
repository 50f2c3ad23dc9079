//! Infrastructure adapters for GenZBot.
//!
//! This crate implements the ports defined in `genzbot-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod assets;
pub mod filesystem;
pub mod process;
pub mod sources;

// Re-export commonly used adapters
pub use assets::{BundledAssets, MemoryAssets};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemProcessRunner;
pub use sources::BuiltinSources;
