use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimilarityError;

/// Per-metric similarity scores, each a percentage in [0, 100]
///
/// `cosine` and `n_gram` are `None` when only the edit-distance and
/// Jaro-Winkler metrics were computed (two-metric scheme).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub levenshtein: f64,
    #[serde(rename = "jaroWinkler")]
    pub jaro_winkler: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosine: Option<f64>,
    #[serde(rename = "nGram", default, skip_serializing_if = "Option::is_none")]
    pub n_gram: Option<f64>,
}

impl MetricScores {
    /// Scores rounded to two decimal places for presentation
    pub fn rounded(&self) -> Self {
        Self {
            levenshtein: round2(self.levenshtein),
            jaro_winkler: round2(self.jaro_winkler),
            cosine: self.cosine.map(round2),
            n_gram: self.n_gram.map(round2),
        }
    }

    /// True when the vector-based and n-gram metrics are present
    pub fn has_all_metrics(&self) -> bool {
        self.cosine.is_some() && self.n_gram.is_some()
    }
}

#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ordinal match tier, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    #[serde(rename = "No Significant Match")]
    NoSignificantMatch,
    #[serde(rename = "Weak Partial Match")]
    WeakPartialMatch,
    #[serde(rename = "Partial Match")]
    PartialMatch,
    #[serde(rename = "Strong Partial Match")]
    StrongPartialMatch,
    #[serde(rename = "Full Match")]
    FullMatch,
}

impl MatchTier {
    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::NoSignificantMatch => "No Significant Match",
            MatchTier::WeakPartialMatch => "Weak Partial Match",
            MatchTier::PartialMatch => "Partial Match",
            MatchTier::StrongPartialMatch => "Strong Partial Match",
            MatchTier::FullMatch => "Full Match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named classifier presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    /// Levenshtein, Jaro-Winkler, cosine and n-gram
    FourMetric,
    /// Levenshtein and Jaro-Winkler only
    TwoMetric,
}

impl SchemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeKind::FourMetric => "four-metric",
            SchemeKind::TwoMetric => "two-metric",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeKind {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "four-metric" | "four_metric" | "four" => Ok(SchemeKind::FourMetric),
            "two-metric" | "two_metric" | "two" => Ok(SchemeKind::TwoMetric),
            _ => Err(SimilarityError::UnknownScheme(s.to_string())),
        }
    }
}

/// Result of classifying a string pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "matchType")]
    pub tier: MatchTier,
    #[serde(rename = "weightedScore")]
    pub weighted_score: f64,
    pub scheme: SchemeKind,
    pub scores: MetricScores,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores = self.scores.rounded();
        write!(
            f,
            "Match Type: {} ({:.2}, {})\nlevenshtein={:.2} jaroWinkler={:.2}",
            self.tier, self.weighted_score, self.scheme, scores.levenshtein, scores.jaro_winkler
        )?;
        if let Some(cosine) = scores.cosine {
            write!(f, " cosine={:.2}", cosine)?;
        }
        if let Some(n_gram) = scores.n_gram {
            write!(f, " nGram={:.2}", n_gram)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(MatchTier::NoSignificantMatch < MatchTier::WeakPartialMatch);
        assert!(MatchTier::StrongPartialMatch < MatchTier::FullMatch);
    }

    #[test]
    fn test_tier_serializes_as_label() {
        let json = serde_json::to_string(&MatchTier::StrongPartialMatch).unwrap();
        assert_eq!(json, "\"Strong Partial Match\"");
    }

    #[test]
    fn test_scheme_parse() {
        assert_eq!("four-metric".parse::<SchemeKind>().unwrap(), SchemeKind::FourMetric);
        assert_eq!("Two_Metric".parse::<SchemeKind>().unwrap(), SchemeKind::TwoMetric);
        assert!("three-metric".parse::<SchemeKind>().is_err());
    }

    #[test]
    fn test_rounded() {
        let scores = MetricScores {
            levenshtein: 61.363636,
            jaro_winkler: 71.071829,
            cosine: Some(44.721359),
            n_gram: None,
        };
        let rounded = scores.rounded();
        assert_eq!(rounded.levenshtein, 61.36);
        assert_eq!(rounded.jaro_winkler, 71.07);
        assert_eq!(rounded.cosine, Some(44.72));
        assert_eq!(rounded.n_gram, None);
    }

    #[test]
    fn test_two_metric_scores_omit_optional_fields() {
        let scores = MetricScores {
            levenshtein: 100.0,
            jaro_winkler: 100.0,
            cosine: None,
            n_gram: None,
        };
        let value = serde_json::to_value(scores).unwrap();
        assert!(value.get("cosine").is_none());
        assert!(value.get("nGram").is_none());
        assert_eq!(value["jaroWinkler"], 100.0);
    }
}
