//! Feedback sentiment analysis.
//!
//! Raw text is normalized (lowercased, stripped, stopword-filtered and
//! lemmatized), scored by a lexicon-based polarity scorer and classified as
//! positive, negative or neutral against fixed compound thresholds.

pub mod classifier;
pub mod error;
pub mod lemmatizer;
pub mod normalize;
pub mod resources;
pub mod scorer;
pub mod types;

mod lexicon;
mod stopwords;

pub use classifier::SentimentAnalyzer;
pub use error::SentimentError;
pub use normalize::Normalizer;
pub use resources::LexiconResources;
pub use scorer::{PolarityScorer, VaderScorer};
pub use types::{PolarityScores, SentimentAnalysis};
