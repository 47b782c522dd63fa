use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::naming::file_extension;

/// Discover supported image files under `directory`.
///
/// Entries are visited depth-first, sorted by file name within each
/// directory, so the returned order is stable across runs. Any error while
/// walking aborts discovery.
pub fn discover_files(directory: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !directory.exists() {
        return Err(Error::FileNotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(Error::NotADirectory(directory.to_path_buf()));
    }

    // Determine max depth for directory traversal
    let max_depth = config.max_depth.unwrap_or(usize::MAX);

    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .max_depth(max_depth)
        .follow_links(config.follow_links)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        if has_supported_extension(entry.path(), config) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Returns if the given path has one of the configured extensions (case-sensitive)
pub fn has_supported_extension(path: &Path, config: &Config) -> bool {
    match file_extension(path) {
        Some(ext) => config.supported_extensions.iter().any(|s| s == ext),
        None => false,
    }
}

// -- Tests --
