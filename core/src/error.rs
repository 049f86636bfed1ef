use thiserror::Error;

/// Qrdrop error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("QR generation failed: {0}")]
    Encode(String),

    #[error("Drive upload failed: {0}")]
    Upload(String),

    #[error("invalid content: {0}")]
    Validation(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
