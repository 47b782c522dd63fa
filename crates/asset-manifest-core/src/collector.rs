use indexmap::IndexMap;
use log::debug;
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::discovery::discover_files;
use crate::error::Result;
use crate::naming::{display_name, infer_size, relative_url, split_file_name, AssetKey};
use crate::types::{Asset, ScanOutcome, ScanStats};

/// Assets keyed by stem and size, kept in first-creation order
#[derive(Debug, Default)]
pub struct AssetCollection {
    assets: IndexMap<AssetKey, Asset>,
}

impl AssetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file into the collection.
    ///
    /// The first file for a key decides the asset's name and url; later files
    /// only add their extension and size.
    pub fn add_file(&mut self, file_name: &str, extension: &str, size: &str, url: &str) {
        let key = AssetKey::new(file_name, size);

        let asset = self
            .assets
            .entry(key)
            .or_insert_with(|| Asset::new(display_name(file_name), url));

        asset.supported_file_types.insert(extension.to_string());

        if !size.is_empty() {
            asset.supported_sizes.insert(size.to_string());
        }
    }

    pub fn get(&self, key: &AssetKey) -> Option<&Asset> {
        self.assets.get(key)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn into_assets(self) -> Vec<Asset> {
        self.assets.into_values().collect()
    }
}

/// Walk `root` and group every supported image into assets
pub fn scan(root: &Path, config: &Config) -> Result<ScanOutcome> {
    let start_time = Instant::now();

    let files = discover_files(root, config)?;

    let mut collection = AssetCollection::new();
    let mut stats = ScanStats::default();

    for path in &files {
        let Some((file_name, extension)) = split_file_name(path) else {
            continue;
        };

        let url = relative_url(root, path)?;
        let size = infer_size(&file_name, &config.size_tokens);

        debug!(
            "Classified {} as '{}' (size: '{}', type: {})",
            path.display(),
            file_name,
            size,
            extension
        );

        collection.add_file(&file_name, &extension, &size, &url);
        stats.record(&extension);
    }

    stats.elapsed = start_time.elapsed();

    Ok(ScanOutcome {
        assets: collection.into_assets(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_merges() {
        let mut collection = AssetCollection::new();
        collection.add_file("logo_32", "png", "32x32", "/logo_32.png");
        collection.add_file("logo_32", "svg", "32x32", "/logo_32.svg");
        collection.add_file("logo_32", "png", "32x32", "/other/logo_32.png");

        assert_eq!(collection.len(), 1);
        let asset = collection.get(&AssetKey::new("logo_32", "32x32")).unwrap();
        assert_eq!(asset.name, "logo 32");
        assert_eq!(asset.url, "/logo_32.png");
        assert_eq!(
            asset.supported_file_types.iter().collect::<Vec<_>>(),
            vec!["png", "svg"]
        );
        assert_eq!(
            asset.supported_sizes.iter().collect::<Vec<_>>(),
            vec!["32x32"]
        );
    }

    #[test]
    fn test_empty_size_is_its_own_key() {
        let mut collection = AssetCollection::new();
        collection.add_file("logo", "svg", "", "/logo.svg");
        collection.add_file("logo", "png", "", "/logo.png");

        assert_eq!(collection.len(), 1);
        let asset = collection.get(&AssetKey::new("logo", "")).unwrap();
        assert!(asset.supported_sizes.is_empty());
        assert_eq!(asset.url, "/logo.svg");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut collection = AssetCollection::new();
        collection.add_file("zebra", "png", "", "/zebra.png");
        collection.add_file("apple", "png", "", "/apple.png");
        collection.add_file("zebra", "svg", "", "/zebra.svg");

        let names: Vec<_> = collection
            .into_assets()
            .into_iter()
            .map(|asset| asset.name)
            .collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }
}
