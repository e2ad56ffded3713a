use std::collections::BTreeMap;

use crate::core::normalize::normalize;

/// Split text into lowercase whitespace-delimited tokens
///
/// Punctuation stays attached, so `"411,"` and `"411"` are different tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Cosine similarity (0-1) of the word-count vectors of two strings
///
/// Both strings are bags of words over their joint vocabulary, so word order
/// is ignored: "Apt 411 Washington" and "Washington Apt 411" score 1.0.
/// A string with no tokens has zero magnitude and the result is defined as 0.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    // Joint vocabulary with per-side counts; BTreeMap keeps iteration order stable
    let mut vocabulary: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for token in &tokens_a {
        vocabulary.entry(token.as_str()).or_default().0 += 1;
    }
    for token in &tokens_b {
        vocabulary.entry(token.as_str()).or_default().1 += 1;
    }

    let (dot, norm_a, norm_b) = vocabulary.values().fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), &(ca, cb)| {
            let (ca, cb) = (ca as f64, cb as f64);
            (dot + ca * cb, na + ca * ca, nb + cb * cb)
        },
    );

    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 {
        return 0.0;
    }

    (dot / magnitude).clamp(0.0, 1.0)
}

/// Cosine similarity as a percentage (0-100)
#[inline]
pub fn cosine_similarity_percent(a: &str, b: &str) -> f64 {
    cosine_similarity(a, b) * 100.0
}
