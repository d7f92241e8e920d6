//! Candidate term generation.
//!
//! Candidates are the set union of three routes over the token stream:
//! single tokens tagged noun or proper noun, noun-phrase chunks, and all
//! contiguous 2-/3-grams. Every candidate is lowercased, then filtered by
//! minimum character length and stop-word equality. Deduplication keeps
//! insertion order so that ranking ties stay deterministic.

use std::collections::HashSet;
use std::ops::Range;

use crate::{
    pos::{PosTag, noun_phrases},
    stopwords::Stopwords,
    tokenize::{Token, ngrams},
};

/// A normalized candidate term awaiting scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    /// Lowercased term, tokens joined with single spaces.
    pub term: String,
    /// The term's individual lowercased tokens.
    pub tokens: Vec<String>,
}

impl Candidate {
    /// Builds a candidate from lowercased tokens.
    fn from_tokens(tokens: Vec<String>) -> Self {
        Self {
            term: tokens.join(" "),
            tokens,
        }
    }
}

/// Generates the deduplicated candidate set for a document.
pub(crate) fn generate(
    tokens: &[Token],
    tags: &[PosTag],
    stopwords: &Stopwords,
    min_length: usize,
) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    let mut push = |candidate: Candidate| {
        if candidate.term.chars().count() < min_length {
            return;
        }
        if stopwords.contains(&candidate.term) {
            return;
        }
        if seen.insert(candidate.term.clone()) {
            candidates.push(candidate);
        }
    };

    // Route (a): single tokens tagged noun or proper noun.
    for (token, tag) in tokens.iter().zip(tags) {
        if tag.is_noun() {
            push(Candidate::from_tokens(vec![token.text.to_lowercase()]));
        }
    }

    // Route (b): noun-phrase chunks.
    for range in noun_phrases(tokens, tags) {
        push(phrase_candidate(tokens, range));
    }

    // Route (c): all contiguous 2- and 3-grams.
    for n in [2, 3] {
        for gram in ngrams(tokens, n) {
            let parts = gram.split(' ').map(str::to_string).collect();
            push(Candidate::from_tokens(parts));
        }
    }

    candidates
}

/// Builds a candidate from a chunk's token range.
fn phrase_candidate(tokens: &[Token], range: Range<usize>) -> Candidate {
    let parts = tokens[range]
        .iter()
        .map(|t| t.text.to_lowercase())
        .collect();
    Candidate::from_tokens(parts)
}
