// Core algorithm exports
pub mod classifier;
pub mod cosine;
pub mod engine;
pub mod jaro_winkler;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;

pub use classifier::{classify_scores, ClassifierScheme, MetricWeights};
pub use cosine::{cosine_similarity, cosine_similarity_percent, tokenize};
pub use engine::{classify, similarity, SimilarityEngine};
pub use jaro_winkler::{common_prefix_length, jaro_distance, jaro_winkler, jaro_winkler_similarity};
pub use levenshtein::{levenshtein_distance, levenshtein_similarity, row_cells};
pub use ngram::{ngram_similarity, ngram_similarity_percent, ngrams, DEFAULT_NGRAM_SIZE};
pub use normalize::normalize;
