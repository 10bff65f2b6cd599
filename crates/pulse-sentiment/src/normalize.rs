//! Text normalization ahead of polarity scoring.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::lemmatizer::Lemmatizer;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Lowercases, strips punctuation and digits, tokenizes, drops stopwords and
/// single-character tokens, then lemmatizes what survives.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    #[must_use]
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self {
            stopwords,
            lemmatizer: Lemmatizer::new(),
        }
    }

    #[must_use]
    pub fn lemma_exception_count(&self) -> usize {
        self.lemmatizer.exception_count()
    }

    /// Normalize `raw` into a space-joined token string.
    ///
    /// Returns an empty string when no token survives. Output is a fixed
    /// point: normalizing it again yields the same string.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let stripped = PUNCTUATION.replace_all(&lowered, "");
        let stripped = DIGITS.replace_all(&stripped, "");

        let is_stopword = |token: &str| self.stopwords.contains(token);

        WORD.find_iter(&stripped)
            .map(|m| m.as_str())
            .filter(|&token| !is_stopword(token) && token.chars().count() > 1)
            .map(|token| self.lemmatizer.lemmatize(token, is_stopword))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(crate::stopwords::builtin())
    }
}
