//! Multi-signal keyword extraction for study material.
//!
//! The [`KeywordRanker`] turns raw text into a ranked list of keyword records.
//! Candidate terms come from three routes over the token stream (nouns and
//! proper nouns, noun-phrase chunks, raw 2-/3-grams); every surviving
//! candidate is scored along five independent signals and the signals are
//! linearly combined:
//!
//! 1. **Unsupervised extraction**: YAKE from the `keyword_extraction` crate,
//!    run on the isolated term, score inverted to higher-is-better
//! 2. **Statistical co-occurrence**: normalized PMI over the document's
//!    frequency-filtered bigrams
//! 3. **Embedding similarity**: cosine between mean term and document vectors
//!    from an optional pretrained table
//! 4. **Domain relevance**: token overlap with an optional domain vocabulary
//! 5. **Position**: bias toward terms that appear early in the document
//!
//! Construction loads the language's stop-word list (fatal on failure) and the
//! embedding table (best-effort; the signal degrades to zero on failure).
//! Extraction itself never fails: pipeline errors are logged and masked as an
//! empty result.
//!
//! ```no_run
//! use cram_keywords::{ExtractParams, KeywordRanker, Language};
//!
//! let ranker = KeywordRanker::new(Language::English, None, None)?;
//! for keyword in ranker.extract("Mitochondria are the powerhouse of the cell.",
//!     &ExtractParams::default())
//! {
//!     println!("{} {:.3}", keyword.term, keyword.score);
//! }
//! # Ok::<(), cram_keywords::KeywordError>(())
//! ```

#![warn(missing_docs)]

mod candidates;
mod embedding;
mod error;
mod pmi;
mod pos;
mod ranker;
mod score;
mod stopwords;
mod tokenize;

pub use embedding::EmbeddingTable;
pub use error::KeywordError;
pub use ranker::{
    ContextKeyword, DEFAULT_CONTEXT_WINDOW, DEFAULT_MIN_LENGTH, DEFAULT_NUM_KEYWORDS,
    ExtractParams, KeywordContext, KeywordRanker, RankedKeyword,
};
pub use score::{SignalScores, SignalWeights};
pub use stopwords::{Language, Stopwords};
