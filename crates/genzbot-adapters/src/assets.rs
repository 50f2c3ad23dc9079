//! Bundled binary asset discovery.
//!
//! Assets ship next to the generator in an `assets/` directory. The
//! directory is searched in this order, first hit wins per asset:
//!
//! 1. **`$GENZBOT_ASSETS_DIR`**: environment variable override.
//! 2. **`./assets`**: relative to the current working directory.
//! 3. **`<executable-dir>/assets`**: sibling to the `genzbot` binary.
//! 4. **`../assets`**: one level above CWD.
//! 5. The `assets/` directory of this crate's source tree, fixed at build
//!    time. Covers `cargo run` and tests.
//!
//! A miss in every location is reported as `Ok(None)`; the generator turns
//! that into an internal-asset error naming [`AssetProvider::searched`].

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::{debug, instrument};

use genzbot_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::AssetId,
    error::GenZBotResult,
};

/// Environment variable pointing at an assets directory.
pub const ASSETS_DIR_ENV: &str = "GENZBOT_ASSETS_DIR";

/// Assets read from the first candidate directory that holds them.
#[derive(Debug, Clone)]
pub struct BundledAssets {
    candidates: Vec<PathBuf>,
}

impl BundledAssets {
    /// Use the standard search order from the module docs.
    pub fn discover() -> Self {
        Self {
            candidates: candidate_paths(),
        }
    }

    /// Search only the given directories, in order.
    pub fn with_dirs(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

impl Default for BundledAssets {
    fn default() -> Self {
        Self::discover()
    }
}

impl AssetProvider for BundledAssets {
    #[instrument(skip_all, fields(asset = %asset))]
    fn load(&self, asset: &AssetId) -> GenZBotResult<Option<Vec<u8>>> {
        for dir in &self.candidates {
            let path = dir.join(asset.source);
            match std::fs::read(&path) {
                Ok(bytes) => {
                    debug!(path = %path.display(), "asset found");
                    return Ok(Some(bytes));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "asset not in candidate");
                }
                Err(e) => {
                    return Err(ApplicationError::FilesystemError {
                        path,
                        reason: format!("Failed to read asset: {e}"),
                    }
                    .into());
                }
            }
        }
        Ok(None)
    }

    fn searched(&self) -> String {
        self.candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(5);

    // 1. Explicit environment variable.
    if let Ok(env_dir) = std::env::var(ASSETS_DIR_ENV) {
        let p = PathBuf::from(env_dir);
        debug!(path = %p.display(), "candidate from environment");
        paths.push(p);
    }

    // 2. ./assets (CWD-relative).
    paths.push(PathBuf::from("assets"));

    // 3. <executable-dir>/assets.
    if let Some(exe_sibling) = exe_sibling_assets() {
        paths.push(exe_sibling);
    }

    // 4. ../assets (development fallback).
    paths.push(PathBuf::from("../assets"));

    // 5. Source tree of this crate.
    paths.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));

    paths
}

fn exe_sibling_assets() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("assets")))
}

/// In-memory asset provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    inner: Arc<RwLock<HashMap<&'static str, Vec<u8>>>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(self, asset: AssetId, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(asset.source, bytes.into());
        }
        self
    }
}

impl AssetProvider for MemoryAssets {
    fn load(&self, asset: &AssetId) -> GenZBotResult<Option<Vec<u8>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.get(asset.source).cloned())
    }

    fn searched(&self) -> String {
        "<memory>".to_string()
    }
}
