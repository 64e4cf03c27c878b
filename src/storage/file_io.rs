//! Atomic JSON file I/O
//!
//! The ledger journal and settings are rewritten whole; these helpers make
//! sure a failed write never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::KaskuError;

/// Read a JSON value from `path`; a missing file reads as the default
pub fn read_json<T, P>(path: P) -> Result<T, KaskuError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| KaskuError::Store(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| KaskuError::Store(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a JSON value atomically: serialize to a temp file in the same
/// directory, fsync, then rename over the target. The target is either
/// fully replaced or untouched, even across a crash mid-write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), KaskuError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KaskuError::Store(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| KaskuError::Store(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| KaskuError::Store(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| KaskuError::Store(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| KaskuError::Store(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KaskuError::Store(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
