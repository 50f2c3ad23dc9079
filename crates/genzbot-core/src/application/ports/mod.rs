//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `genzbot-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file writes
//!   - `SourceStore`: source text per provider and design
//!   - `AssetProvider`: bundled binary assets
//!   - `ProcessRunner`: external programs (venv, pip, the generated service)

pub mod output;

pub use output::{AssetProvider, Filesystem, Invocation, ProcessExit, ProcessRunner, SourceStore};

#[cfg(test)]
pub use output::{MockAssetProvider, MockFilesystem, MockProcessRunner, MockSourceStore};
