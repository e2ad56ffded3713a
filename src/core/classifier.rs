use crate::error::SimilarityError;
use crate::models::{Classification, MatchTier, MetricScores, SchemeKind};

/// Per-metric weights of a classifier scheme
///
/// A zero weight means the metric takes no part in the scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricWeights {
    pub levenshtein: f64,
    pub jaro_winkler: f64,
    pub cosine: f64,
    pub n_gram: f64,
}

/// Weighted-sum classifier configuration
///
/// Thresholds are `(minimum weighted score, tier)` pairs ordered from the
/// strongest tier down; anything below the last entry is
/// [`MatchTier::NoSignificantMatch`]. The two presets are calibrated
/// independently and their tables must not be mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierScheme {
    pub kind: SchemeKind,
    pub weights: MetricWeights,
    pub thresholds: [(f64, MatchTier); 4],
}

impl ClassifierScheme {
    /// `0.20·levenshtein + 0.45·jaroWinkler + 0.15·cosine + 0.20·nGram`
    pub const fn four_metric() -> Self {
        Self {
            kind: SchemeKind::FourMetric,
            weights: MetricWeights {
                levenshtein: 0.20,
                jaro_winkler: 0.45,
                cosine: 0.15,
                n_gram: 0.20,
            },
            thresholds: [
                (95.0, MatchTier::FullMatch),
                (75.0, MatchTier::StrongPartialMatch),
                (60.0, MatchTier::PartialMatch),
                (50.0, MatchTier::WeakPartialMatch),
            ],
        }
    }

    /// `0.4·levenshtein + 0.6·jaroWinkler`
    pub const fn two_metric() -> Self {
        Self {
            kind: SchemeKind::TwoMetric,
            weights: MetricWeights {
                levenshtein: 0.4,
                jaro_winkler: 0.6,
                cosine: 0.0,
                n_gram: 0.0,
            },
            thresholds: [
                (95.0, MatchTier::FullMatch),
                (80.0, MatchTier::StrongPartialMatch),
                (60.0, MatchTier::PartialMatch),
                (40.0, MatchTier::WeakPartialMatch),
            ],
        }
    }

    pub const fn preset(kind: SchemeKind) -> Self {
        match kind {
            SchemeKind::FourMetric => Self::four_metric(),
            SchemeKind::TwoMetric => Self::two_metric(),
        }
    }

    /// Pick the preset matching the metrics that were actually computed
    pub fn for_scores(scores: &MetricScores) -> Self {
        if scores.has_all_metrics() {
            Self::four_metric()
        } else {
            Self::two_metric()
        }
    }

    /// Whether this scheme needs the cosine and n-gram metrics
    #[inline]
    pub fn needs_all_metrics(&self) -> bool {
        self.kind == SchemeKind::FourMetric
    }

    /// Weighted sum of the metric percentages
    ///
    /// Fails when the scheme weights a metric that was not computed.
    pub fn weighted_score(&self, scores: &MetricScores) -> Result<f64, SimilarityError> {
        let cosine = self.required(scores.cosine, self.weights.cosine, "cosine")?;
        let n_gram = self.required(scores.n_gram, self.weights.n_gram, "nGram")?;

        Ok(self.weighted_sum(scores.levenshtein, scores.jaro_winkler, cosine, n_gram))
    }

    fn required(&self, score: Option<f64>, weight: f64, metric: &'static str) -> Result<f64, SimilarityError> {
        match score {
            Some(value) => Ok(value),
            None if weight == 0.0 => Ok(0.0),
            None => Err(SimilarityError::MissingMetric {
                scheme: self.kind,
                metric,
            }),
        }
    }

    #[inline]
    fn weighted_sum(&self, levenshtein: f64, jaro_winkler: f64, cosine: f64, n_gram: f64) -> f64 {
        let w = &self.weights;
        levenshtein * w.levenshtein
            + jaro_winkler * w.jaro_winkler
            + cosine * w.cosine
            + n_gram * w.n_gram
    }

    /// Map a weighted score onto this scheme's tier table
    pub fn tier_for(&self, weighted_score: f64) -> MatchTier {
        self.thresholds
            .iter()
            .find(|(min, _)| weighted_score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(MatchTier::NoSignificantMatch)
    }

    /// Classify a complete set of metric scores
    pub fn classify(&self, scores: MetricScores) -> Result<Classification, SimilarityError> {
        let weighted_score = self.weighted_score(&scores)?;
        Ok(self.label(scores, weighted_score))
    }

    fn label(&self, scores: MetricScores, weighted_score: f64) -> Classification {
        let tier = self.tier_for(weighted_score);

        tracing::debug!(
            scheme = %self.kind,
            weighted_score,
            tier = %tier,
            "Classified metric scores"
        );

        Classification {
            tier,
            weighted_score,
            scheme: self.kind,
            scores,
        }
    }
}

impl Default for ClassifierScheme {
    fn default() -> Self {
        Self::four_metric()
    }
}

/// Classify scores with the preset implied by which metrics are present
pub fn classify_scores(scores: MetricScores) -> Classification {
    let scheme = ClassifierScheme::for_scores(&scores);
    // Absent metrics only reach here under two-metric, where they weigh zero
    let weighted_score = scheme.weighted_sum(
        scores.levenshtein,
        scores.jaro_winkler,
        scores.cosine.unwrap_or(0.0),
        scores.n_gram.unwrap_or(0.0),
    );

    scheme.label(scores, weighted_score)
}
