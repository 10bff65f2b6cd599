use pulse_core::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Four-way polarity result: negative, neutral and positive proportions plus
/// a normalized compound score in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// Scores reported when normalization leaves nothing to score.
    pub const NEUTRAL: PolarityScores = PolarityScores {
        neg: 0.0,
        neu: 1.0,
        pos: 0.0,
        compound: 0.0,
    };
}

/// Outcome of analyzing one piece of feedback.
///
/// `label` is always `SentimentLabel::from_compound(compound)` and `compound`
/// always equals `scores.compound`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    pub original_text: String,
    /// Normalized text; empty when every token was filtered out.
    pub processed_text: String,
    pub label: SentimentLabel,
    pub compound: f64,
    pub scores: PolarityScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_scores_sum_to_one() {
        let n = PolarityScores::NEUTRAL;
        assert!((n.neg + n.neu + n.pos - 1.0).abs() < f64::EPSILON);
        assert_eq!(n.compound, 0.0);
    }

    #[test]
    fn polarity_scores_serialize_with_short_keys() {
        let json = serde_json::to_value(PolarityScores::NEUTRAL).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "neg": 0.0, "neu": 1.0, "pos": 0.0, "compound": 0.0 })
        );
    }
}
