//! Signal scoring and combination.
//!
//! Each signal is an independent pure function over a candidate and the
//! per-call document context, implemented behind [`SignalScorer`] and evaluated
//! as a fixed ordered list. Every scorer declares a bounded range; the combined
//! score is the dot product with a weight vector whose default carries the
//! production constants.

use std::collections::HashSet;

use keyword_extraction::yake::{Yake, YakeParams};
use serde::Serialize;

use crate::{
    candidates::Candidate,
    embedding::{EmbeddingTable, cosine_similarity},
    pmi::BigramPmi,
};

/// Number of scoring signals.
pub(crate) const SIGNAL_COUNT: usize = 5;

/// The five per-signal scores of one candidate.
///
/// Ranges: `yake`, `statistical`, `domain`, and `positional` lie in `[0, 1]`;
/// `embedding` lies in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SignalScores {
    /// Inverted unsupervised-extractor score (higher is better).
    pub yake: f32,
    /// Normalized bigram PMI co-occurrence score.
    pub statistical: f32,
    /// Cosine similarity between term and document mean vectors.
    pub embedding: f32,
    /// Fraction of term tokens found in the domain vocabulary.
    pub domain: f32,
    /// Positional bias toward early first occurrence.
    pub positional: f32,
}

impl SignalScores {
    /// Builds scores from an array in scorer-list order.
    pub(crate) fn from_array(values: [f32; SIGNAL_COUNT]) -> Self {
        let [yake, statistical, embedding, domain, positional] = values;
        Self {
            yake,
            statistical,
            embedding,
            domain,
            positional,
        }
    }

    /// Returns the scores as an array in scorer-list order.
    fn as_array(&self) -> [f32; SIGNAL_COUNT] {
        [
            self.yake,
            self.statistical,
            self.embedding,
            self.domain,
            self.positional,
        ]
    }
}

/// Weight vector combining the five signals into one score.
///
/// The default carries the fixed production weights; weights are set at ranker
/// construction, never per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalWeights {
    /// Weight of the unsupervised-extractor signal.
    pub yake: f32,
    /// Weight of the statistical co-occurrence signal.
    pub statistical: f32,
    /// Weight of the embedding-similarity signal.
    pub embedding: f32,
    /// Weight of the domain-vocabulary signal.
    pub domain: f32,
    /// Weight of the positional signal.
    pub positional: f32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            yake: 0.3,
            statistical: 0.2,
            embedding: 0.2,
            domain: 0.2,
            positional: 0.1,
        }
    }
}

impl SignalWeights {
    /// Combines signal scores into one weighted score.
    pub fn combine(&self, scores: &SignalScores) -> f32 {
        let weights = [
            self.yake,
            self.statistical,
            self.embedding,
            self.domain,
            self.positional,
        ];
        weights
            .iter()
            .zip(scores.as_array())
            .map(|(w, s)| w * s)
            .sum()
    }
}

/// Read-only per-call context shared by all scorers.
pub(crate) struct ScoreContext<'a> {
    /// The whole document, lowercased.
    pub text_lower: &'a str,
    /// Document-wide bigram PMI table.
    pub pmi: &'a BigramPmi,
    /// Embedding table, if configured and loaded.
    pub embeddings: Option<&'a EmbeddingTable>,
    /// Mean vector over the document's tokens, if embeddings resolve any.
    pub doc_vector: Option<&'a [f32]>,
    /// Domain vocabulary of lowercased entries, if configured.
    pub domain_vocab: Option<&'a HashSet<String>>,
    /// Stop-word list in the form the unsupervised extractor takes.
    pub stopword_list: &'a [String],
}

/// A single scoring signal over (candidate, document context).
pub(crate) trait SignalScorer {
    /// Stable signal name, matching the corresponding `SignalScores` field.
    fn name(&self) -> &'static str;

    /// Scores one candidate. Pure; must stay within the signal's declared range.
    fn score(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> f32;
}

/// The scorer list, in `SignalScores` field order.
pub(crate) fn scorers() -> [&'static dyn SignalScorer; SIGNAL_COUNT] {
    [
        &YakeScorer,
        &StatisticalScorer,
        &EmbeddingScorer,
        &DomainScorer,
        &PositionalScorer,
    ]
}

/// Scores every signal for a candidate, in scorer-list order.
pub(crate) fn score_candidate(candidate: &Candidate, ctx: &ScoreContext<'_>) -> SignalScores {
    let mut values = [0.0f32; SIGNAL_COUNT];
    for (value, scorer) in values.iter_mut().zip(scorers()) {
        *value = scorer.score(candidate, ctx);
    }
    SignalScores::from_array(values)
}

/// Unsupervised-extractor signal.
///
/// Runs YAKE on the isolated term string, not the whole document: per-term
/// independence is traded for corpus-level context on purpose. YAKE's
/// convention is lower-is-better, so the first returned score is inverted and
/// clamped into `[0, 1]`. Terms the extractor returns nothing for score 0.
struct YakeScorer;

impl SignalScorer for YakeScorer {
    fn name(&self) -> &'static str {
        "yake"
    }

    fn score(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> f32 {
        let params = YakeParams::WithDefaults(&candidate.term, ctx.stopword_list);
        let yake = Yake::new(params);

        match yake.get_ranked_term_scores(1).first() {
            Some((_, score)) => (1.0 - score).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

/// Statistical co-occurrence signal: normalized bigram PMI.
struct StatisticalScorer;

impl SignalScorer for StatisticalScorer {
    fn name(&self) -> &'static str {
        "statistical"
    }

    fn score(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> f32 {
        ctx.pmi.normalized(&candidate.term)
    }
}

/// Embedding signal: cosine between mean term vector and mean document vector.
struct EmbeddingScorer;

impl SignalScorer for EmbeddingScorer {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn score(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> f32 {
        let (Some(table), Some(doc_vector)) = (ctx.embeddings, ctx.doc_vector) else {
            return 0.0;
        };

        let term_vector = table.mean_vector(candidate.tokens.iter().map(String::as_str));
        match term_vector {
            Some(term_vector) => cosine_similarity(&term_vector, doc_vector),
            None => 0.0,
        }
    }
}

/// Domain signal: fraction of term tokens present in the domain vocabulary.
struct DomainScorer;

impl SignalScorer for DomainScorer {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn score(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> f32 {
        let Some(vocab) = ctx.domain_vocab else {
            return 0.0;
        };
        if candidate.tokens.is_empty() {
            return 0.0;
        }

        let hits = candidate
            .tokens
            .iter()
            .filter(|token| vocab.contains(token.as_str()))
            .count();
        hits as f32 / candidate.tokens.len() as f32
    }
}

/// Positional signal: `1 − first_offset / document_length` over the lowercased
/// text; 0 when the term never occurs literally.
struct PositionalScorer;

impl SignalScorer for PositionalScorer {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn score(&self, candidate: &Candidate, ctx: &ScoreContext<'_>) -> f32 {
        if ctx.text_lower.is_empty() {
            return 0.0;
        }
        match ctx.text_lower.find(&candidate.term) {
            Some(offset) => 1.0 - offset as f32 / ctx.text_lower.len() as f32,
            None => 0.0,
        }
    }
}
