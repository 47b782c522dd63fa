use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::logging::log_file_error;
use crate::types::Asset;

/// Write `assets` as an indented JSON array, replacing any existing file
pub fn write_manifest(assets: &[Asset], output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(assets)?;

    write_file(output_path, json.as_bytes()).map_err(|source| {
        log_file_error(output_path, "write manifest", &source);
        Error::ManifestWrite {
            path: output_path.to_path_buf(),
            source,
        }
    })?;

    info!(
        "Wrote {} assets to manifest {}",
        assets.len(),
        output_path.display()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()
}
