use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// A logical image, possibly available in several file types and sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Display name, the file stem with underscores turned into spaces
    pub name: String,

    /// Root-relative URL of the first file seen for this asset
    pub url: String,

    /// Extensions this asset is available in, in first-seen order
    pub supported_file_types: IndexSet<String>,

    /// Size tokens such as `32x32`, in first-seen order
    pub supported_sizes: IndexSet<String>,
}

impl Asset {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            supported_file_types: IndexSet::new(),
            supported_sizes: IndexSet::new(),
        }
    }
}

/// Counters gathered during a single scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of files with a supported extension
    pub total_images: usize,

    /// Files whose extension is exactly `png`
    pub png_files: usize,

    /// Files whose extension is exactly `svg`
    pub svg_files: usize,

    /// Every distinct extension encountered
    pub file_types: BTreeSet<String>,

    /// Wall time spent walking and classifying
    pub elapsed: Duration,
}

impl ScanStats {
    pub(crate) fn record(&mut self, extension: &str) {
        self.total_images += 1;
        match extension {
            "png" => self.png_files += 1,
            "svg" => self.svg_files += 1,
            _ => {}
        }
        self.file_types.insert(extension.to_string());
    }

    pub fn unique_file_types(&self) -> usize {
        self.file_types.len()
    }
}

/// Assets and counters produced by a scan
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Assets in first-creation order
    pub assets: Vec<Asset>,
    pub stats: ScanStats,
}

/// Result of a full run: the scan plus where its manifest went
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    pub manifest_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_lowercase_literals_only() {
        let mut stats = ScanStats::default();
        stats.record("png");
        stats.record("svg");
        stats.record("PNG");
        stats.record("png");

        assert_eq!(stats.total_images, 4);
        assert_eq!(stats.png_files, 2);
        assert_eq!(stats.svg_files, 1);
        assert_eq!(stats.unique_file_types(), 3);
    }

    #[test]
    fn test_asset_serializes_camel_case() {
        let mut asset = Asset::new("my icon", "/my_icon_32.png");
        asset.supported_file_types.insert("png".to_string());
        asset.supported_sizes.insert("32x32".to_string());

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "my icon",
                "url": "/my_icon_32.png",
                "supportedFileTypes": ["png"],
                "supportedSizes": ["32x32"],
            })
        );
    }
}
