use std::io;

/// All error types for the MTL loader.
#[derive(thiserror::Error, Debug)]
pub enum MtlError {
    #[error("Output error: {0}")]
    Output(String),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MtlError>;
