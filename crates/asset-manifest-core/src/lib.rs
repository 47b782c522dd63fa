//! Core functionality for building an image asset manifest.
//!
//! This library provides the components for turning a directory of icons into
//! an `assets.json` manifest:
//! - Directory discovery of supported image files
//! - Filename heuristics for asset names and pixel sizes
//! - Merging files into assets keyed by name and size
//! - Manifest serialization

// -- External Dependencies --
use log::info;

// -- Standard Library --
use std::path::Path;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod collector;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod types;

/// Main entry point for building a manifest
pub struct AssetManifest {
    config: Config,
}

impl AssetManifest {
    /// Create a new AssetManifest with the provided configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Group the images under `root` into assets without writing anything
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        collector::scan(root, &self.config)
    }

    /// Write `assets` to `output_path`
    pub fn write_manifest(&self, assets: &[Asset], output_path: &Path) -> Result<()> {
        manifest::write_manifest(assets, output_path)
    }

    /// Scan `root` and write its manifest to the configured location
    pub fn run(&self, root: &Path) -> Result<ScanReport> {
        info!("Scanning {} for images...", root.display());
        let outcome = self.scan(root)?;
        info!(
            "Found {} images grouped into {} assets",
            outcome.stats.total_images,
            outcome.assets.len()
        );

        let manifest_path = self.config.manifest_path(root);
        self.write_manifest(&outcome.assets, &manifest_path)?;
        info!("Manifest generated at: {}", manifest_path.display());

        Ok(ScanReport {
            outcome,
            manifest_path,
        })
    }
}
