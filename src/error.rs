use thiserror::Error;

use crate::models::SchemeKind;

/// Errors raised around the similarity engine
///
/// The metrics themselves never fail; these cover scheme selection and
/// configuration.
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("{scheme} scheme requires the {metric} metric")]
    MissingMetric {
        scheme: SchemeKind,
        metric: &'static str,
    },

    #[error("Unknown classifier scheme: {0}")]
    UnknownScheme(String),

    #[error("Invalid n-gram size: {0} (must be at least 1)")]
    InvalidNgramSize(usize),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
