//! Bigram co-occurrence scoring via pointwise mutual information.
//!
//! The table is built once per extraction over the whole document:
//! `PMI(a, b) = ln(count(a,b) · N / (count(a) · count(b)))` with `N` the number
//! of bigram windows. Bigrams below the frequency floor are dropped. Scores are
//! served normalized by the table maximum so the statistical signal stays in
//! `[0, 1]`; terms that are not a qualifying bigram score 0. Unigrams and
//! trigrams therefore always score 0 on this signal, which is intended.

use std::collections::HashMap;

/// Bigrams must occur at least this often to enter the table.
pub(crate) const MIN_BIGRAM_COUNT: u32 = 2;

/// Document-wide PMI table over frequency-filtered bigrams.
#[derive(Debug, Default)]
pub(crate) struct BigramPmi {
    /// Raw PMI per bigram, keyed by the space-joined lowercased pair.
    scores: HashMap<String, f32>,
    /// Largest positive PMI in the table, for normalization.
    max: f32,
}

impl BigramPmi {
    /// Builds the table from the document's lowercased token stream.
    pub fn build(tokens: &[String], min_count: u32) -> Self {
        if tokens.len() < 2 {
            return Self::default();
        }

        let mut unigrams: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *unigrams.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut bigrams: HashMap<(&str, &str), u32> = HashMap::new();
        for pair in tokens.windows(2) {
            *bigrams
                .entry((pair[0].as_str(), pair[1].as_str()))
                .or_insert(0) += 1;
        }

        let windows = (tokens.len() - 1) as f32;
        let mut scores = HashMap::new();
        let mut max = 0.0f32;

        for ((a, b), pair_count) in bigrams {
            if pair_count < min_count {
                continue;
            }
            let freq_a = unigrams[a] as f32;
            let freq_b = unigrams[b] as f32;
            let pmi = (pair_count as f32 * windows / (freq_a * freq_b)).ln();
            if pmi > max {
                max = pmi;
            }
            scores.insert(format!("{a} {b}"), pmi);
        }

        Self { scores, max }
    }

    /// Returns the normalized PMI for a term, in `[0, 1]`.
    ///
    /// 0 for anything that is not a qualifying bigram, and negative raw PMI
    /// (pairs less frequent than chance) clamps to 0.
    pub fn normalized(&self, term: &str) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        match self.scores.get(term) {
            Some(&pmi) => (pmi / self.max).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// Number of qualifying bigrams in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }
}
