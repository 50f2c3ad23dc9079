//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `genzbot-adapters` crate provides implementations.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AssetId, BackendSources, Provider, Template, TemplateSources};
use crate::error::GenZBotResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `genzbot_adapters::filesystem::LocalFilesystem` (production)
/// - `genzbot_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> GenZBotResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> GenZBotResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the ready-made source text of generated projects.
///
/// Implemented by:
/// - `genzbot_adapters::sources::BuiltinSources` (compiled-in sources)
#[cfg_attr(test, mockall::automock)]
pub trait SourceStore: Send + Sync {
    /// Response wrapper and service sources shared by a provider's backends.
    fn backend_sources(&self, provider: Provider) -> GenZBotResult<BackendSources>;

    /// Markup, stylesheet and script of a frontend design.
    fn template_sources(&self, template: Template) -> GenZBotResult<TemplateSources>;
}

/// Port for binary assets bundled with the generator.
///
/// Implemented by:
/// - `genzbot_adapters::assets::BundledAssets` (assets directory on disk)
/// - `genzbot_adapters::assets::MemoryAssets` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait AssetProvider: Send + Sync {
    /// Load an asset. `Ok(None)` means the asset is not present.
    fn load(&self, asset: &AssetId) -> GenZBotResult<Option<Vec<u8>>>;

    /// Human-readable list of the locations searched, for error messages.
    fn searched(&self) -> String;
}

/// Port for running external programs to completion.
///
/// Implemented by:
/// - `genzbot_adapters::process::SystemProcessRunner` (std::process)
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run the program in the foreground and wait for it to exit.
    ///
    /// An `Err` means the program could not be started at all.
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessExit>;
}

/// A fully-resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How an external program ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub const SUCCESS: ProcessExit = ProcessExit { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
