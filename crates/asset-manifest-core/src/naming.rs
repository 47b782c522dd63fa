//! Filename heuristics: everything the collector infers about an asset comes
//! from the file's name and its location under the scan root.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Identity of an asset: file stem plus inferred size (possibly empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(file_name: &str, size: &str) -> Self {
        Self(format!("{}_{}", file_name, size))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extension of `path` without the dot, as found on disk.
///
/// A bare dot-file such as `.png` counts as an extension with an empty stem.
/// Returns `None` for paths without an extension or with non UTF-8 extensions.
pub fn file_extension(path: &Path) -> Option<&str> {
    let extension = match path.extension() {
        Some(ext) => ext.to_str()?,
        None => path.file_name()?.to_str()?.strip_prefix('.')?,
    };
    Some(extension).filter(|ext| !ext.is_empty())
}

/// Split a path into its stem and extension, both as found on disk.
pub fn split_file_name(path: &Path) -> Option<(String, String)> {
    let extension = file_extension(path)?;
    let name = path.file_name()?.to_string_lossy();
    let stem = name.strip_suffix(extension)?.strip_suffix('.')?;
    Some((stem.to_string(), extension.to_string()))
}

/// First token contained in `file_name`, formatted as `NxN`.
///
/// Tokens are tested in the given order and matched as plain substrings, so
/// `icon16_128` resolves to `16x16` with the default token list.
pub fn infer_size(file_name: &str, tokens: &[u32]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .find(|token| file_name.contains(token.as_str()))
        .map(|token| format!("{}x{}", token, token))
        .unwrap_or_default()
}

pub fn display_name(file_name: &str) -> String {
    file_name.replace('_', " ")
}

/// `/`-separated path of `path` relative to `root`, with a leading `/`
pub fn relative_url(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::PathOutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    Ok(format!("/{}", relative.to_string_lossy().replace('\\', "/")))
}
