//! Structured error types for the editor library.
//!
//! Library modules return these; the binary wraps them with `anyhow`
//! context at startup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorParseError {
    #[error("unrecognized color value '{0}'")]
    Unrecognized(String),
}

/// Failures of the durable key-value slot
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed snapshot under key '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create export directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write image {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
