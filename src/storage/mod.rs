//! File-based codecs and path resolution.
//!
//! Each save/load call touches exactly one file,
//! `<base-dir>/<file_name>.<json|csv>`, read and written whole. Two
//! interchangeable formats are supported:
//!
//! - **JSON**: a single top-level array, one element per record.
//! - **Delimited text**: UTF-8 lines, first line is a header of field
//!   names joined by the separator, one record per line thereafter.
//!
//! ## Components
//!
//! - [`json`]: structured-record codec
//! - [`delimited`]: delimited-text codec
//! - [`paths`]: maps a logical file name + format to a concrete path

pub mod delimited;
pub mod json;
pub mod paths;

use crate::error::{Result, StowageError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Selects the codec and the canonical file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Delimited,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Delimited => "csv",
        }
    }
}

/// Write content to a file via temp file + rename, so a crash mid-write
/// never leaves a partially written file at the target path.
pub(crate) fn write_atomic(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = target_path.parent().ok_or_else(|| {
        StowageError::Storage("Target path has no parent directory".to_string())
    })?;

    // Temp file must live in the target directory for the rename to be atomic
    let mut temp_file = NamedTempFile::new_in(target_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(target_path)
        .map_err(|e| StowageError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
