use super::Format;
use crate::error::{Result, StowageError};
use directories::UserDirs;
use std::path::{Path, PathBuf};

/// The per-user documents directory, the default base for persisted files.
pub fn documents_dir() -> Result<PathBuf> {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        .ok_or(StowageError::DirectoryNotFound)
}

/// Map a logical file name and format to a concrete path under `base`.
pub fn resolve(base: &Path, file_name: &str, format: Format) -> PathBuf {
    base.join(format!("{}.{}", file_name, format.extension()))
}
