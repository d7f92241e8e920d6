//! Error types for keyword extraction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while constructing a ranker or running an extraction.
///
/// Construction-time resource failures (`UnsupportedLanguage`,
/// `StopwordsUnavailable`) are fatal and propagate to the caller. Everything
/// else is absorbed by [`KeywordRanker::extract`](crate::KeywordRanker::extract)
/// and surfaces only as an error log entry plus an empty result.
#[derive(Debug, Error)]
pub enum KeywordError {
    /// The language identifier did not match any supported language.
    #[error("unsupported language '{language}'")]
    UnsupportedLanguage {
        /// The identifier that failed to parse.
        language: String,
    },

    /// No stop-word list is available for the requested language.
    #[error("no stop-word list available for language '{language}'")]
    StopwordsUnavailable {
        /// The language whose resources could not be loaded.
        language: String,
    },

    /// Extraction was invoked on empty input text.
    #[error("input text is empty")]
    EmptyText,

    /// Extraction was invoked with a keyword count of zero.
    #[error("keyword count must be positive")]
    ZeroKeywordCount,

    /// Extraction was invoked with a minimum term length of zero.
    #[error("minimum term length must be positive")]
    ZeroMinLength,

    /// Failed to read an embedding table file.
    #[error("failed to read embeddings {path}: {source}")]
    EmbeddingRead {
        /// Path to the embedding file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An embedding file line did not parse as `word v1 v2 … vn`.
    #[error("malformed embedding entry at line {line} in {path}")]
    EmbeddingParse {
        /// Path to the embedding file.
        path: PathBuf,
        /// One-based line number of the malformed entry.
        line: usize,
    },
}
