use std::collections::HashSet;

use crate::core::normalize::normalize;

/// Default n-gram length (bigrams)
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Set of contiguous `n`-character substrings of the lowercased input
///
/// Slides one character at a time. Inputs shorter than `n`, and `n == 0`,
/// yield an empty set.
pub fn ngrams(text: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = normalize(text).chars().collect();
    if n == 0 || chars.len() < n {
        return HashSet::new();
    }

    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity (0-1) of the character n-gram sets of two strings
///
/// `|A ∩ B| / |A ∪ B|`. When both sets are empty the union is empty and the
/// result is defined as 0.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    let grams_a = ngrams(a, n);
    let grams_b = ngrams(b, n);

    let intersection = grams_a.intersection(&grams_b).count();
    let union = grams_a.len() + grams_b.len() - intersection;
    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// N-gram Jaccard similarity as a percentage (0-100)
#[inline]
pub fn ngram_similarity_percent(a: &str, b: &str, n: usize) -> f64 {
    ngram_similarity(a, b, n) * 100.0
}
