//! Document loading for keyword extraction.
//!
//! Turns supported source files into plain text ready for the ranker:
//!
//! - **txt**: the file content as-is
//! - **json**: string values flattened depth-first, optionally restricted to
//!   named fields
//!
//! Loading errors propagate to the caller; unlike extraction, ingest has no
//! absorb-and-continue contract.

#![warn(missing_docs)]

mod error;
mod json;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use error::IngestError;

/// A loaded document: plain text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document's text content.
    pub text: String,
    /// Path the document was loaded from.
    pub path: PathBuf,
}

/// Loads a document, dispatching on the file extension.
///
/// `text_fields` applies to JSON sources only: when given, only string values
/// under those keys are extracted.
pub fn load(path: &Path, text_fields: Option<&[String]>) -> Result<Document, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("txt") => load_txt(path),
        Some("json") => json::load_json(path, text_fields),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads a plain-text file.
pub fn load_txt(path: &Path) -> Result<Document, IngestError> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Document {
        text,
        path: path.to_path_buf(),
    })
}
