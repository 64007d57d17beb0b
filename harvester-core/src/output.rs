// Reading and writing the resource JSON files

use crate::error::{HarvestError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

// Data files live in the project's `src/data`, one level above this crate,
// regardless of the directory the binary is started from.

/// Where `harvest` writes and `merge` reads the scraped resources
pub const DEFAULT_OUTPUT_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../src/data/roadmap-resources-scraped.json"
);

/// The curated catalog `merge` folds new resources into
pub const DEFAULT_CATALOG_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../src/data/resources.json");

/// Write `records` as a pretty-printed JSON array, replacing any existing file.
///
/// Output is UTF-8 with two-space indentation and non-ASCII characters left
/// unescaped. The parent directory must already exist.
pub fn write_resources<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let io_err = |source| HarvestError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(io_err)?;

    Ok(())
}

/// Read a JSON array of records
pub fn read_resources<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(HarvestError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| HarvestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| HarvestError::Json {
        path: path.to_path_buf(),
        source,
    })
}
