// ============================================================
// Layer 4 — Bag-of-Words Vectorizer
// ============================================================
// Counts how many times each word appears in a token sequence.
//
// The result is a sparse vector: only words that occur are
// stored, and any missing word implicitly has count 0.
//
// Example:
//   ["sun", "gravity", "sun"] → { "sun": 2, "gravity": 1 }

use std::collections::HashMap;

/// Sparse word → occurrence-count vector.
/// Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector {
    counts: HashMap<String, u64>,
}

impl FrequencyVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of `word`, 0 when absent
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate (word, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Σ count² — the squared Euclidean length
    pub fn squared_norm(&self) -> u64 {
        self.counts.values().map(|c| c * c).sum()
    }

    fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vector = FrequencyVector::new();
        for word in iter {
            vector.add(word.as_ref());
        }
        vector
    }
}

/// Build a frequency vector from a token sequence.
pub fn vectorize<S: AsRef<str>>(tokens: &[S]) -> FrequencyVector {
    tokens.iter().collect()
}
