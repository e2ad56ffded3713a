//! Lume Similarity - string similarity and match-tier classification
//!
//! This library computes four independent similarity metrics for a pair of
//! strings (edit distance, Jaro-Winkler, word-vector cosine and character
//! n-gram overlap), combines them with a fixed weighted formula and labels the
//! pair with a match tier.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{classify, similarity, ClassifierScheme, SimilarityEngine};
pub use crate::error::SimilarityError;
pub use crate::models::{Classification, MatchTier, MetricScores, SchemeKind};
