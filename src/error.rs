// compliance-docgen/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid request format: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Document packing error: {0}")]
    PackingError(String),
}
