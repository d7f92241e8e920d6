//! Error types for document loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read a source file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse a JSON source file.
    #[error("failed to parse JSON {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON parse error.
        source: serde_json::Error,
    },

    /// The file extension does not map to a supported format.
    #[error("unsupported document format: {path}")]
    UnsupportedFormat {
        /// The path with the unrecognized extension.
        path: PathBuf,
    },
}
