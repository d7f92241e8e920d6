//! The multi-signal keyword ranker.
//!
//! [`KeywordRanker`] is the single entry point of this crate: construct it once
//! with a language and optional embedding table and domain vocabulary, then
//! call [`extract`](KeywordRanker::extract) or
//! [`extract_with_context`](KeywordRanker::extract_with_context) per document.
//! Extraction is a pure request → response transformation; everything loaded at
//! construction stays immutable, so one instance is safe to share across
//! threads without locking.

use std::{cmp::Ordering, collections::HashSet, path::Path};

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::{
    candidates::{self, Candidate},
    embedding::EmbeddingTable,
    error::KeywordError,
    pmi::{BigramPmi, MIN_BIGRAM_COUNT},
    pos::tag_tokens,
    score::{ScoreContext, SignalScores, SignalWeights, score_candidate},
    stopwords::{Language, Stopwords},
    tokenize::tokenize,
};

/// Default number of keywords returned by an extraction.
pub const DEFAULT_NUM_KEYWORDS: usize = 10;
/// Default minimum candidate length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;
/// Default context window size in bytes on each side of a match.
pub const DEFAULT_CONTEXT_WINDOW: usize = 50;

/// Per-call extraction parameters.
#[derive(Debug, Clone)]
pub struct ExtractParams {
    /// Maximum number of keywords to return.
    pub num_keywords: usize,
    /// Minimum candidate length in characters.
    pub min_length: usize,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            num_keywords: DEFAULT_NUM_KEYWORDS,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// A ranked keyword with its per-signal and combined scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedKeyword {
    /// The normalized (lowercased) term.
    pub term: String,
    /// The weighted combined score.
    pub score: f32,
    /// The five individual signal scores.
    pub scores: SignalScores,
}

/// The text surrounding a keyword's first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordContext {
    /// Literal substring of the source text around the match.
    pub snippet: String,
    /// Byte offset of the match in the source text.
    pub offset: usize,
}

/// A ranked keyword, annotated with source context when the term was found
/// literally in the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextKeyword {
    /// The ranked keyword record.
    #[serde(flatten)]
    pub keyword: RankedKeyword,
    /// Surrounding context; absent when the term's surface form does not
    /// occur literally (e.g. grams rejoined across punctuation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<KeywordContext>,
}

/// Multi-signal keyword extractor.
///
/// Combines five signals per candidate term: an unsupervised extractor run on
/// the isolated term, bigram PMI co-occurrence, embedding similarity, domain
/// vocabulary overlap, and positional bias.
pub struct KeywordRanker {
    /// Configured language.
    language: Language,
    /// Stop-word filter for candidate generation and tagging.
    stopwords: Stopwords,
    /// The same stop words in the form the unsupervised extractor takes.
    stopword_list: Vec<String>,
    /// Embedding table; `None` when unconfigured or when loading failed.
    embeddings: Option<EmbeddingTable>,
    /// Domain vocabulary of lowercased entries.
    domain_vocab: Option<HashSet<String>>,
    /// Signal weight vector, fixed at construction.
    weights: SignalWeights,
}

impl KeywordRanker {
    /// Constructs a ranker for a language.
    ///
    /// Loading linguistic resources (the stop-word list) is fatal on failure.
    /// Loading the embedding table is best-effort: on failure the embedding
    /// signal is permanently disabled for this instance and a warning is
    /// logged.
    pub fn new(
        language: Language,
        embedding_path: Option<&Path>,
        domain_vocab: Option<HashSet<String>>,
    ) -> Result<Self, KeywordError> {
        let stopwords = Stopwords::for_language(language)?;
        let stopword_list = stopwords.as_vec();

        let embeddings = embedding_path.and_then(|path| match EmbeddingTable::load(path) {
            Ok(table) => {
                debug!(entries = table.len(), "loaded embedding table");
                Some(table)
            }
            Err(e) => {
                warn!(error = %e, "embedding table unavailable, embedding signal disabled");
                None
            }
        });

        let domain_vocab = domain_vocab
            .map(|vocab| vocab.into_iter().map(|t| t.to_lowercase()).collect());

        Ok(Self {
            language,
            stopwords,
            stopword_list,
            embeddings,
            domain_vocab,
            weights: SignalWeights::default(),
        })
    }

    /// Replaces the signal weight vector. Construction-time tuning only;
    /// weights never change per call.
    #[must_use]
    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Returns the configured language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns true when an embedding table is loaded.
    pub fn has_embeddings(&self) -> bool {
        self.embeddings.is_some()
    }

    /// Extracts ranked keywords from a document.
    ///
    /// Returns at most `params.num_keywords` records sorted by non-increasing
    /// combined score; ties keep candidate generation order. This operation
    /// never fails: any pipeline error is logged at ERROR level and masked as
    /// an empty result.
    pub fn extract(&self, text: &str, params: &ExtractParams) -> Vec<RankedKeyword> {
        match self.try_extract(text, params) {
            Ok(ranked) => ranked,
            Err(e) => {
                error!(error = %e, "keyword extraction failed");
                Vec::new()
            }
        }
    }

    /// Extracts keywords with default parameters and annotates each with the
    /// text surrounding its first occurrence.
    ///
    /// The keyword count and minimum length are not composable with the window
    /// size here; this mirrors the extraction surface as shipped. Terms whose
    /// normalized form never occurs literally in the text are returned without
    /// context.
    pub fn extract_with_context(&self, text: &str, window_size: usize) -> Vec<ContextKeyword> {
        self.extract(text, &ExtractParams::default())
            .into_iter()
            .map(|keyword| {
                let context = find_case_insensitive(text, &keyword.term).map(|(start, end)| {
                    KeywordContext {
                        snippet: context_window(text, start, end, window_size),
                        offset: start,
                    }
                });
                ContextKeyword { keyword, context }
            })
            .collect()
    }

    /// The fallible extraction pipeline behind [`extract`](Self::extract).
    fn try_extract(
        &self,
        text: &str,
        params: &ExtractParams,
    ) -> Result<Vec<RankedKeyword>, KeywordError> {
        if text.trim().is_empty() {
            return Err(KeywordError::EmptyText);
        }
        if params.num_keywords == 0 {
            return Err(KeywordError::ZeroKeywordCount);
        }
        if params.min_length == 0 {
            return Err(KeywordError::ZeroMinLength);
        }

        let tokens = tokenize(text);
        let tags = tag_tokens(&tokens, &self.stopwords);
        let candidates =
            candidates::generate(&tokens, &tags, &self.stopwords, params.min_length);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        debug!(candidates = candidates.len(), "generated candidate terms");

        let lower_tokens: Vec<String> =
            tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let pmi = BigramPmi::build(&lower_tokens, MIN_BIGRAM_COUNT);
        let text_lower = text.to_lowercase();
        let doc_vector = self
            .embeddings
            .as_ref()
            .and_then(|table| table.mean_vector(lower_tokens.iter().map(String::as_str)));

        let ctx = ScoreContext {
            text_lower: &text_lower,
            pmi: &pmi,
            embeddings: self.embeddings.as_ref(),
            doc_vector: doc_vector.as_deref(),
            domain_vocab: self.domain_vocab.as_ref(),
            stopword_list: &self.stopword_list,
        };

        let mut ranked: Vec<RankedKeyword> = candidates
            .iter()
            .map(|candidate| self.rank_candidate(candidate, &ctx))
            .collect();

        // Stable sort: equal scores keep candidate generation order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(params.num_keywords);

        Ok(ranked)
    }

    /// Scores one candidate on all signals and combines them.
    fn rank_candidate(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> RankedKeyword {
        let scores = score_candidate(candidate, ctx);
        RankedKeyword {
            term: candidate.term.clone(),
            score: self.weights.combine(&scores),
            scores,
        }
    }
}

/// Finds the first case-insensitive occurrence of `needle_lower` in `haystack`.
///
/// Returns the byte range of the match in the original text. The needle must
/// already be lowercase (candidate terms are).
fn find_case_insensitive(haystack: &str, needle_lower: &str) -> Option<(usize, usize)> {
    if needle_lower.is_empty() {
        return None;
    }
    for (idx, _) in haystack.char_indices() {
        if let Some(len) = match_len_ci(&haystack[idx..], needle_lower) {
            return Some((idx, idx + len));
        }
    }
    None
}

/// Byte length of a case-insensitive match of `needle_lower` at the start of
/// `hay`, or `None` if it does not match there.
fn match_len_ci(hay: &str, needle_lower: &str) -> Option<usize> {
    let mut needle = needle_lower.chars();
    let mut pending = needle.next();
    let mut consumed = 0;

    for ch in hay.chars() {
        if pending.is_none() {
            break;
        }
        for lower in ch.to_lowercase() {
            match pending {
                Some(expected) if expected == lower => pending = needle.next(),
                _ => return None,
            }
        }
        consumed += ch.len_utf8();
    }

    pending.is_none().then_some(consumed)
}

/// Slices the window `[start − window, end + window]` out of `text`, clamped to
/// the text bounds and to UTF-8 character boundaries.
fn context_window(text: &str, start: usize, end: usize, window: usize) -> String {
    let mut from = start.saturating_sub(window);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }

    let mut to = end.saturating_add(window).min(text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }

    text[from..to].to_string()
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    const NLP_TEXT: &str = "Natural language processing enables computers to understand \
        text. Natural language processing is powerful.";

    fn english_ranker() -> KeywordRanker {
        KeywordRanker::new(Language::English, None, None).unwrap()
    }

    fn params(num_keywords: usize, min_length: usize) -> ExtractParams {
        ExtractParams {
            num_keywords,
            min_length,
        }
    }

    #[test]
    fn empty_text_yields_empty_result() {
        let ranker = english_ranker();
        assert!(ranker.extract("", &ExtractParams::default()).is_empty());
        assert!(ranker.extract("   ", &ExtractParams::default()).is_empty());
    }

    #[test]
    fn text_without_candidates_yields_empty_result() {
        let ranker = english_ranker();
        // Only stop words and short tokens.
        let ranked = ranker.extract("it is so", &params(10, 5));
        assert!(ranked.is_empty());
    }

    #[test]
    fn invalid_params_are_absorbed_as_empty() {
        let ranker = english_ranker();
        assert!(ranker.extract(NLP_TEXT, &params(0, 3)).is_empty());
        assert!(ranker.extract(NLP_TEXT, &params(10, 0)).is_empty());
    }

    #[test]
    fn respects_num_keywords_cap() {
        let ranker = english_ranker();
        let ranked = ranker.extract(NLP_TEXT, &params(3, 3));
        assert!(ranked.len() <= 3);
        assert!(!ranked.is_empty());
    }

    #[test]
    fn no_short_or_stopword_terms_in_output() {
        let ranker = english_ranker();
        let stopwords = Stopwords::for_language(Language::English).unwrap();
        for record in ranker.extract(NLP_TEXT, &params(50, 4)) {
            assert!(record.term.chars().count() >= 4, "{}", record.term);
            assert!(!stopwords.contains(&record.term), "{}", record.term);
        }
    }

    #[test]
    fn output_is_sorted_by_non_increasing_score() {
        let ranker = english_ranker();
        let ranked = ranker.extract(NLP_TEXT, &params(50, 3));
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn combined_scores_stay_bounded() {
        let ranker = english_ranker();
        for record in ranker.extract(NLP_TEXT, &params(50, 3)) {
            assert!(record.score <= 1.0 + 1e-6, "{}: {}", record.term, record.score);
            assert!(record.score >= -0.2 - 1e-6, "{}: {}", record.term, record.score);
        }
    }

    #[test]
    fn embedding_signal_zero_without_table() {
        let ranker = english_ranker();
        for record in ranker.extract(NLP_TEXT, &params(50, 3)) {
            assert_eq!(record.scores.embedding, 0.0);
        }
    }

    #[test]
    fn domain_signal_zero_without_vocabulary() {
        let ranker = english_ranker();
        for record in ranker.extract(NLP_TEXT, &params(50, 3)) {
            assert_eq!(record.scores.domain, 0.0);
        }
    }

    #[test]
    fn repeated_phrase_ranks_first() {
        let ranker = english_ranker();
        let ranked = ranker.extract(NLP_TEXT, &params(1, 3));
        assert_eq!(ranked.len(), 1);
        let top = &ranked[0].term;
        assert!(
            ["natural language", "language processing", "natural language processing"]
                .contains(&top.as_str()),
            "unexpected top term: {top}"
        );
    }

    #[test]
    fn repeated_phrase_outranks_late_fragments() {
        let ranker = english_ranker();
        let ranked = ranker.extract(NLP_TEXT, &params(50, 3));
        let position = |term: &str| ranked.iter().position(|r| r.term == term);

        let phrase = position("language processing").expect("phrase is a candidate");
        for fragment in ["understand", "computers"] {
            if let Some(idx) = position(fragment) {
                assert!(phrase < idx, "'{fragment}' outranked the repeated phrase");
            }
        }
    }

    #[test]
    fn domain_vocabulary_boosts_matching_terms() {
        let vocab: HashSet<String> = ["language", "processing"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let with_vocab =
            KeywordRanker::new(Language::English, None, Some(vocab)).unwrap();
        let without = english_ranker();

        let find = |ranker: &KeywordRanker| {
            ranker
                .extract(NLP_TEXT, &params(50, 3))
                .into_iter()
                .find(|r| r.term == "language processing")
                .unwrap()
        };

        let boosted = find(&with_vocab);
        assert_eq!(boosted.scores.domain, 1.0);
        assert!(boosted.score > find(&without).score);
    }

    #[test]
    fn embedding_table_load_failure_degrades_quietly() {
        let ranker = KeywordRanker::new(
            Language::English,
            Some(Path::new("/nonexistent/embeddings.txt")),
            None,
        )
        .unwrap();

        assert!(!ranker.has_embeddings());
        for record in ranker.extract(NLP_TEXT, &params(10, 3)) {
            assert_eq!(record.scores.embedding, 0.0);
        }
    }

    #[test]
    fn embedding_table_contributes_when_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language 1.0 0.0").unwrap();
        writeln!(file, "processing 0.8 0.2").unwrap();
        writeln!(file, "computers 0.5 0.5").unwrap();

        let ranker =
            KeywordRanker::new(Language::English, Some(file.path()), None).unwrap();
        assert!(ranker.has_embeddings());

        let record = ranker
            .extract(NLP_TEXT, &params(50, 3))
            .into_iter()
            .find(|r| r.term == "language processing")
            .unwrap();
        assert!(record.scores.embedding > 0.0);
        assert!(record.scores.embedding <= 1.0 + 1e-6);
    }

    #[test]
    fn context_attached_for_literal_matches() {
        let ranker = english_ranker();
        let annotated = ranker.extract_with_context(NLP_TEXT, 20);
        assert!(!annotated.is_empty());

        let with_context = annotated
            .iter()
            .find(|k| k.context.is_some())
            .expect("at least one literal match");
        let context = with_context.context.as_ref().unwrap();

        // The snippet is a literal slice of the source text containing the
        // term (case-insensitively) at the recorded offset.
        assert!(NLP_TEXT.contains(&context.snippet));
        let at_offset = &NLP_TEXT[context.offset..];
        assert!(at_offset
            .to_lowercase()
            .starts_with(&with_context.keyword.term));
    }

    #[test]
    fn context_window_is_clamped_to_text() {
        let ranker = english_ranker();
        let text = "Photosynthesis converts light into chemical energy.";
        let annotated = ranker.extract_with_context(text, 500);
        for keyword in annotated.iter().filter(|k| k.context.is_some()) {
            assert_eq!(keyword.context.as_ref().unwrap().snippet, text);
        }
    }

    #[test]
    fn find_case_insensitive_reports_original_offsets() {
        let (start, end) = find_case_insensitive("Say NATURAL Language", "natural language")
            .unwrap();
        assert_eq!(start, 4);
        assert_eq!(end, 20);
        assert!(find_case_insensitive("nothing here", "absent").is_none());
    }

    #[test]
    fn context_window_respects_char_boundaries() {
        let text = "Äpfel über Bäume";
        let (start, end) = find_case_insensitive(text, "über").unwrap();
        // A window of one byte lands inside the multi-byte characters on both
        // sides; the slice must still be valid UTF-8.
        let snippet = context_window(text, start, end, 1);
        assert!(snippet.contains("über"));
    }

    #[test]
    fn ranker_is_shareable_across_threads() {
        let ranker = std::sync::Arc::new(english_ranker());
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let ranker = std::sync::Arc::clone(&ranker);
                std::thread::spawn(move || {
                    ranker.extract(NLP_TEXT, &ExtractParams::default()).len()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap() > 0);
        }
    }
}
