use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for an asset scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extensions (without the dot) that count as images. Matched case-sensitively.
    pub supported_extensions: Vec<String>,

    /// Numbers looked for in file names, tested in this order
    pub size_tokens: Vec<u32>,

    /// Name of the manifest written into the scanned directory
    pub manifest_file_name: String,

    /// Explicit manifest location, overriding `manifest_file_name`
    pub output_path: Option<PathBuf>,

    /// Maximum directory depth for scanning
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links while walking
    pub follow_links: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supported_extensions: vec!["png".to_string(), "svg".to_string()],
            size_tokens: vec![16, 32, 64, 128, 256],
            manifest_file_name: "assets.json".to_string(),
            output_path: None,
            max_depth: None,
            follow_links: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.supported_extensions.is_empty() {
            return Err(Error::Configuration(
                "At least one supported extension is required".to_string(),
            ));
        }

        for ext in &self.supported_extensions {
            if ext.is_empty() {
                return Err(Error::Configuration(
                    "Supported extensions must not be empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(Error::Configuration(format!(
                    "Supported extension '{}' must be given without the leading dot",
                    ext
                )));
            }
        }

        if self.size_tokens.is_empty() {
            return Err(Error::Configuration(
                "At least one size token is required".to_string(),
            ));
        }

        if self.size_tokens.contains(&0) {
            return Err(Error::Configuration(
                "Size tokens must be greater than zero".to_string(),
            ));
        }

        if self.max_depth == Some(0) {
            return Err(Error::Configuration(
                "Maximum depth must be at least 1".to_string(),
            ));
        }

        if self.output_path.is_none() && self.manifest_file_name.trim().is_empty() {
            return Err(Error::Configuration(
                "Manifest file name must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Where the manifest for `root` is written
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => root.join(&self.manifest_file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.supported_extensions, vec!["png", "svg"]);
        assert_eq!(config.size_tokens, vec![16, 32, 64, 128, 256]);
    }

    #[test]
    fn test_validate_rejects_bad_extensions() {
        let config = Config {
            supported_extensions: vec![".png".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = Config {
            supported_extensions: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_zero_size_token() {
        let config = Config {
            size_tokens: vec![16, 0],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = Config {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = Config {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_manifest_path() {
        let config = Config::default();
        assert_eq!(
            config.manifest_path(Path::new("/icons")),
            PathBuf::from("/icons/assets.json")
        );

        let config = Config {
            output_path: Some(PathBuf::from("/tmp/out.json")),
            ..Default::default()
        };
        assert_eq!(
            config.manifest_path(Path::new("/icons")),
            PathBuf::from("/tmp/out.json")
        );
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asset-manifest.json");

        let config = Config {
            max_depth: Some(2),
            log_level: LogLevel::Debug,
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "supported_extensions": ["png"] }"#).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.supported_extensions, vec!["png"]);
        assert_eq!(loaded.manifest_file_name, "assets.json");
    }
}
