//! Heuristic part-of-speech tagging and noun-phrase chunking.
//!
//! A lightweight rule-based tagger stands in for a statistical model: closed
//! word classes come from the stop-word list and a determiner table,
//! proper nouns from mid-sentence capitalization, adjectives and adverbs from
//! suffix patterns. Remaining content words default to noun, which is the
//! useful bias for keyword candidates.
//!
//! Chunks follow the pattern `(ADJ)* (NOUN|PROPN)+`.

use crate::{stopwords::Stopwords, tokenize::Token};

/// Part-of-speech classes the heuristic tagger distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PosTag {
    /// Common noun (the open-class default).
    Noun,
    /// Proper noun, detected from mid-sentence capitalization.
    ProperNoun,
    /// Adjective, detected from suffix patterns.
    Adjective,
    /// Determiner.
    Determiner,
    /// Anything else: stop words, adverbs, inflected verbs.
    Other,
}

impl PosTag {
    /// True for common and proper nouns.
    pub fn is_noun(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// English determiners, tagged separately so chunks never start with one.
const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "either", "neither",
];

/// Suffixes that mark adjectives.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "al", "ous", "ive", "able", "ible", "ful", "less", "ish", "ic",
];

/// Maximum tokens in a noun-phrase chunk; longer runs are left to the n-gram
/// candidate route.
const MAX_CHUNK_TOKENS: usize = 3;

/// Tags each token in the stream.
pub(crate) fn tag_tokens(tokens: &[Token], stopwords: &Stopwords) -> Vec<PosTag> {
    tokens.iter().map(|t| tag_token(t, stopwords)).collect()
}

/// Tags one token using the heuristic rules.
fn tag_token(token: &Token, stopwords: &Stopwords) -> PosTag {
    let lower = token.text.to_lowercase();

    if DETERMINERS.contains(&lower.as_str()) {
        return PosTag::Determiner;
    }
    if stopwords.contains(&lower) {
        return PosTag::Other;
    }

    let capitalized = token.text.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !token.sentence_start {
        return PosTag::ProperNoun;
    }

    // Suffix rules need enough stem to be meaningful.
    if lower.len() > 4 {
        if lower.ends_with("ly") {
            return PosTag::Other;
        }
        if lower.ends_with("ed") {
            return PosTag::Other;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Adjective;
        }
    }

    PosTag::Noun
}

/// Extracts noun-phrase chunks as index ranges into the token stream.
///
/// A chunk is a maximal `(ADJ)* (NOUN|PROPN)+` run that does not cross a
/// sentence boundary and has at least one noun. Only multi-token chunks of at
/// most [`MAX_CHUNK_TOKENS`] tokens are returned; single nouns enter the
/// candidate set by their own route.
pub(crate) fn noun_phrases(tokens: &[Token], tags: &[PosTag]) -> Vec<std::ops::Range<usize>> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let Some(end) = match_chunk(tokens, tags, i) else {
            i += 1;
            continue;
        };

        let len = end - i;
        if (2..=MAX_CHUNK_TOKENS).contains(&len) {
            chunks.push(i..end);
        }
        i = end;
    }

    chunks
}

/// Tries to match `(ADJ)* (NOUN|PROPN)+` starting at `start`; returns the
/// exclusive end index of the match.
fn match_chunk(tokens: &[Token], tags: &[PosTag], start: usize) -> Option<usize> {
    let mut end = start;

    while end < tokens.len()
        && tags[end] == PosTag::Adjective
        && (end == start || !tokens[end].sentence_start)
    {
        end += 1;
    }

    let noun_start = end;
    while end < tokens.len()
        && tags[end].is_noun()
        && (end == start || !tokens[end].sentence_start)
    {
        end += 1;
    }

    (end > noun_start).then_some(end)
}
