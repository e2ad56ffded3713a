use crate::core::{
    classifier::{classify_scores, ClassifierScheme},
    cosine::cosine_similarity_percent,
    jaro_winkler::jaro_winkler_similarity,
    levenshtein::levenshtein_similarity,
    ngram::{ngram_similarity_percent, DEFAULT_NGRAM_SIZE},
    normalize::normalize,
};
use crate::error::SimilarityError;
use crate::models::{Classification, MetricScores, SchemeKind};

/// Similarity engine - computes the metric set for a string pair and
/// classifies it
///
/// # Pipeline
/// 1. Case-normalize both inputs once
/// 2. Compute the metrics the scheme needs (in parallel when enabled)
/// 3. Join, then apply the scheme's weights and tier table
///
/// Holds only immutable settings, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    default_scheme: SchemeKind,
    ngram_size: usize,
    parallel: bool,
}

impl SimilarityEngine {
    pub fn new(default_scheme: SchemeKind, ngram_size: usize, parallel: bool) -> Result<Self, SimilarityError> {
        if ngram_size == 0 {
            return Err(SimilarityError::InvalidNgramSize(ngram_size));
        }

        Ok(Self {
            default_scheme,
            ngram_size,
            parallel,
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            default_scheme: SchemeKind::FourMetric,
            ngram_size: DEFAULT_NGRAM_SIZE,
            parallel: true,
        }
    }

    pub fn default_scheme(&self) -> SchemeKind {
        self.default_scheme
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// All four metric percentages for a pair, at full precision
    pub fn similarity(&self, a: &str, b: &str) -> MetricScores {
        self.similarity_for(a, b, SchemeKind::FourMetric)
    }

    /// Metric percentages needed by `scheme`
    ///
    /// Under the two-metric scheme cosine and n-gram are not computed and come
    /// back as `None`.
    pub fn similarity_for(&self, a: &str, b: &str, scheme: SchemeKind) -> MetricScores {
        let a = normalize(a);
        let b = normalize(b);
        let (a, b) = (a.as_ref(), b.as_ref());
        let all_metrics = ClassifierScheme::preset(scheme).needs_all_metrics();

        let scores = if self.parallel {
            self.compute_parallel(a, b, all_metrics)
        } else {
            self.compute_sequential(a, b, all_metrics)
        };

        tracing::debug!(
            scheme = %scheme,
            levenshtein = scores.levenshtein,
            jaro_winkler = scores.jaro_winkler,
            cosine = ?scores.cosine,
            n_gram = ?scores.n_gram,
            "Computed similarity metrics"
        );

        scores
    }

    fn compute_sequential(&self, a: &str, b: &str, all_metrics: bool) -> MetricScores {
        MetricScores {
            levenshtein: levenshtein_similarity(a, b),
            jaro_winkler: jaro_winkler_similarity(a, b),
            cosine: all_metrics.then(|| cosine_similarity_percent(a, b)),
            n_gram: all_metrics.then(|| ngram_similarity_percent(a, b, self.ngram_size)),
        }
    }

    fn compute_parallel(&self, a: &str, b: &str, all_metrics: bool) -> MetricScores {
        // rayon::join takes two closures, so nest it to fan out four metrics
        let ((levenshtein, jaro_winkler), (cosine, n_gram)) = rayon::join(
            || {
                rayon::join(
                    || levenshtein_similarity(a, b),
                    || jaro_winkler_similarity(a, b),
                )
            },
            || {
                if !all_metrics {
                    return (None, None);
                }
                rayon::join(
                    || Some(cosine_similarity_percent(a, b)),
                    || Some(ngram_similarity_percent(a, b, self.ngram_size)),
                )
            },
        );

        MetricScores {
            levenshtein,
            jaro_winkler,
            cosine,
            n_gram,
        }
    }

    /// Classify a pair with the engine's default scheme
    pub fn classify(&self, a: &str, b: &str) -> Classification {
        self.classify_with(a, b, self.default_scheme)
    }

    /// Classify a pair with an explicit scheme
    pub fn classify_with(&self, a: &str, b: &str, scheme: SchemeKind) -> Classification {
        // The computed metric set determines the preset
        classify_scores(self.similarity_for(a, b, scheme))
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// All four metric percentages using default engine settings
pub fn similarity(a: &str, b: &str) -> MetricScores {
    SimilarityEngine::with_defaults().similarity(a, b)
}

/// Four-metric classification using default engine settings
pub fn classify(a: &str, b: &str) -> Classification {
    SimilarityEngine::with_defaults().classify(a, b)
}
