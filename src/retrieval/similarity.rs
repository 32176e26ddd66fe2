// ============================================================
// Layer 5 — Cosine Similarity
// ============================================================
// How alike are two bag-of-words vectors?
//
//   cos(v1, v2) = dot(v1, v2) / (|v1| * |v2|)
//
//   dot  = Σ v1[w] * v2[w]   over words present in both
//   |v|  = sqrt(Σ v[w]²)
//
// Counts are never negative, so the result lies in [0.0, 1.0]:
//   0.0 → no shared words
//   1.0 → same words in the same proportions
//
// An empty vector has magnitude 0; instead of dividing by zero
// the similarity is defined as 0.0.

use crate::data::vectorizer::FrequencyVector;

/// Cosine similarity of two frequency vectors, in [0.0, 1.0].
pub fn cosine_similarity(v1: &FrequencyVector, v2: &FrequencyVector) -> f64 {
    // Walk the smaller vector, look words up in the larger one
    let (small, large) = if v1.len() <= v2.len() { (v1, v2) } else { (v2, v1) };
    if small.is_empty() {
        return 0.0;
    }

    // Integer arithmetic keeps the sums exact and independent of
    // HashMap iteration order
    let dot: u64 = small
        .iter()
        .map(|(word, count)| count * large.get(word))
        .sum();

    let mag1 = (v1.squared_norm() as f64).sqrt();
    let mag2 = (v2.squared_norm() as f64).sqrt();

    tracing::trace!(dot, mag1, mag2, "cosine similarity");

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }
    // sqrt(n) * sqrt(n) can round just below n, pushing identical
    // vectors a hair above 1.0
    (dot as f64 / (mag1 * mag2)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vectorizer::vectorize;

    fn v(words: &[&str]) -> FrequencyVector {
        vectorize(words)
    }

    #[test]
    fn test_empty_vector_scores_zero() {
        assert_eq!(cosine_similarity(&v(&[]), &v(&["a"])), 0.0);
        assert_eq!(cosine_similarity(&v(&["a"]), &v(&[])), 0.0);
        assert_eq!(cosine_similarity(&v(&[]), &v(&[])), 0.0);
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let s = cosine_similarity(&v(&["a", "b"]), &v(&["a", "b"]));
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_vocabularies_score_zero() {
        assert_eq!(cosine_similarity(&v(&["a"]), &v(&["b"])), 0.0);
    }

    #[test]
    fn test_identical_vectors_never_exceed_one() {
        for words in [&["a", "b", "c"][..], &["sun", "moon", "star"][..], &["x", "y", "z", "x", "w"][..]] {
            let s = cosine_similarity(&v(words), &v(words));
            assert!(s <= 1.0, "{words:?} scored {s}");
            assert!((s - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_proportional_vectors_score_one() {
        let s = cosine_similarity(&v(&["a", "b"]), &v(&["a", "a", "b", "b"]));
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_overlap() {
        // dot = 1, |v1| = sqrt(2), |v2| = sqrt(2) → 0.5
        let s = cosine_similarity(&v(&["a", "b"]), &v(&["a", "c"]));
        assert!((s - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_is_symmetric_and_bounded() {
        let a = v(&["sun", "sun", "orbit", "planets"]);
        let b = v(&["the", "sun", "keeps", "planets", "in", "orbit", "orbit"]);
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        assert_eq!(ab, ba);
        assert!((0.0..=1.0).contains(&ab));
    }
}
