//! Normalize, score, classify.

use std::fmt;
use std::sync::Arc;

use pulse_core::SentimentLabel;

use crate::normalize::Normalizer;
use crate::resources::LexiconResources;
use crate::scorer::{PolarityScorer, VaderScorer};
use crate::types::{PolarityScores, SentimentAnalysis};

/// Turns raw feedback text into a [`SentimentAnalysis`].
///
/// Holds only read-only state after construction, so one instance can be
/// shared across request handlers behind an `Arc`.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    normalizer: Normalizer,
    scorer: Arc<dyn PolarityScorer>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::from_resources(LexiconResources::builtin())
    }
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new(normalizer: Normalizer, scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { normalizer, scorer }
    }

    /// Analyzer backed by the VADER scorer over `resources`.
    #[must_use]
    pub fn from_resources(resources: LexiconResources) -> Self {
        let LexiconResources { stopwords, lexicon } = resources;
        Self::new(
            Normalizer::new(stopwords),
            Arc::new(VaderScorer::new(lexicon)),
        )
    }

    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Analyze one piece of feedback.
    ///
    /// Text that normalizes to nothing is reported neutral without consulting
    /// the scorer.
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let processed_text = self.normalizer.normalize(text);

        let scores = if processed_text.is_empty() {
            PolarityScores::NEUTRAL
        } else {
            self.scorer.polarity_scores(&processed_text)
        };

        let label = SentimentLabel::from_compound(scores.compound);
        tracing::debug!(
            label = %label,
            compound = scores.compound,
            tokens = processed_text.split_whitespace().count(),
            "feedback classified"
        );

        SentimentAnalysis {
            original_text: text.to_string(),
            processed_text,
            label,
            compound: scores.compound,
            scores,
        }
    }
}
