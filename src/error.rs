use thiserror::Error;

#[derive(Error, Debug)]
pub enum StowageError {
    #[error("Could not locate the user documents directory")]
    DirectoryNotFound,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StowageError>;
