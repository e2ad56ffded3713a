// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Classification, MatchTier, MetricScores, SchemeKind};
pub use requests::{ClassifyRequest, SimilarityRequest};
pub use responses::{ClassifyResponse, ErrorResponse, HealthResponse, SimilarityResponse};
