//! Runtime error types.

use thiserror::Error;

/// Errors that can occur while decoding an embedded payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload text is not valid base64
    #[error("Invalid payload encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Payload decoded to a corrupt gzip stream
    #[error("Corrupt payload stream: {0}")]
    Decompress(#[source] std::io::Error),
}

/// Errors returned by the virtual filesystem.
#[derive(Debug, Error)]
pub enum VfsError {
    /// No entry under this virtual path
    #[error("File not found: {0}")]
    NotFound(String),

    /// Entry exists but its payload could not be decoded
    #[error("{0}")]
    Decode(#[from] DecodeError),
}
