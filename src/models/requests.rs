use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upper bound on input length in characters; edit distance is O(len(a) * len(b)) time
pub const MAX_INPUT_CHARS: u64 = 10_000;

/// Request to compute the metric set for a pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarityRequest {
    #[validate(length(max = MAX_INPUT_CHARS))]
    pub a: String,
    #[validate(length(max = MAX_INPUT_CHARS))]
    pub b: String,
}

/// Request to classify a pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(max = MAX_INPUT_CHARS))]
    pub a: String,
    #[validate(length(max = MAX_INPUT_CHARS))]
    pub b: String,
    /// `four-metric` or `two-metric`; falls back to the configured default
    #[serde(default)]
    pub scheme: Option<String>,
}
