use serde::{Deserialize, Serialize};
use crate::models::domain::{Classification, MatchTier, MetricScores, SchemeKind};

/// Response for the similarity endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub scores: MetricScores,
}

impl From<MetricScores> for SimilarityResponse {
    fn from(scores: MetricScores) -> Self {
        Self {
            scores: scores.rounded(),
        }
    }
}

/// Response for the classify endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    #[serde(rename = "matchType")]
    pub match_type: MatchTier,
    #[serde(rename = "weightedScore")]
    pub weighted_score: f64,
    pub scheme: SchemeKind,
    pub scores: MetricScores,
}

impl From<Classification> for ClassifyResponse {
    fn from(result: Classification) -> Self {
        Self {
            match_type: result.tier,
            weighted_score: crate::models::domain::round2(result.weighted_score),
            scheme: result.scheme,
            scores: result.scores.rounded(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
