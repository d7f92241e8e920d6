//! Pretrained word-embedding lookup.
//!
//! Tables load from GloVe-style text files: one `word v1 v2 … vn` entry per
//! line, all entries with the same dimension. Loading is best-effort at ranker
//! construction; any failure disables the embedding signal instead of failing
//! the ranker.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::KeywordError;

/// An in-memory word → vector lookup table.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    /// Word vectors, keyed by lowercased token.
    vectors: HashMap<String, Vec<f32>>,
    /// Dimension shared by every vector.
    dim: usize,
}

impl EmbeddingTable {
    /// Loads a table from a GloVe-style text file.
    ///
    /// Fails on I/O errors, on lines that do not parse as a word followed by
    /// floats, and on dimension mismatches between lines. Blank lines are
    /// skipped.
    pub fn load(path: &Path) -> Result<Self, KeywordError> {
        let file = File::open(path).map_err(|source| KeywordError::EmbeddingRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut vectors: HashMap<String, Vec<f32>> = HashMap::new();
        let mut dim = 0usize;

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| KeywordError::EmbeddingRead {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let malformed = || KeywordError::EmbeddingParse {
                path: path.to_path_buf(),
                line: idx + 1,
            };

            let mut parts = line.split_whitespace();
            let word = parts.next().ok_or_else(malformed)?;
            let values: Vec<f32> = parts
                .map(|v| v.parse::<f32>().map_err(|_| malformed()))
                .collect::<Result<_, _>>()?;

            if values.is_empty() {
                return Err(malformed());
            }
            if dim == 0 {
                dim = values.len();
            } else if values.len() != dim {
                return Err(malformed());
            }

            vectors.insert(word.to_lowercase(), values);
        }

        Ok(Self { vectors, dim })
    }

    /// Returns the vector for a token, if present. Case-insensitive.
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(&token.to_lowercase()).map(Vec::as_slice)
    }

    /// Returns the mean vector over the tokens that resolve in the table.
    ///
    /// `None` when no token resolves (or the table is empty).
    pub fn mean_vector<'a, I>(&self, tokens: I) -> Option<Vec<f32>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sum = vec![0.0f32; self.dim];
        let mut count = 0usize;

        for token in tokens {
            if let Some(vector) = self.get(token) {
                for (acc, v) in sum.iter_mut().zip(vector) {
                    *acc += v;
                }
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }
        for v in &mut sum {
            *v /= count as f32;
        }
        Some(sum)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Cosine similarity between two vectors, 0.0 when either has zero norm.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
