//! Lexicon-based polarity scoring with VADER heuristics.

use std::collections::{HashMap, HashSet};

use crate::lexicon::{BOOSTER_DECREMENTS, BOOSTER_INCREMENTS, BOOSTER_STEP, NEGATIONS};
use crate::types::PolarityScores;

/// Normalization constant for the compound score, approximating the max expected sum.
const ALPHA: f64 = 15.0;
/// Multiplier applied to a sentiment word inside a negation window.
const NEGATION_SCALAR: f64 = -0.74;
/// Extra valence for a shouted word when the text mixes cases.
const CAPS_INCREMENT: f64 = 0.733;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

/// Maps normalized text to polarity scores.
///
/// Implementations must be pure: the same text always yields the same scores.
/// Callers never pass an empty string.
pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// Rule-based scorer over a word-valence lexicon.
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: HashMap<String, f64>,
    increments: HashSet<&'static str>,
    decrements: HashSet<&'static str>,
    negations: HashSet<&'static str>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new(crate::lexicon::builtin())
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        self.score(text)
    }
}

impl VaderScorer {
    #[must_use]
    pub fn new(lexicon: HashMap<String, f64>) -> Self {
        Self {
            lexicon,
            increments: BOOSTER_INCREMENTS.iter().copied().collect(),
            decrements: BOOSTER_DECREMENTS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Score `text`.
    ///
    /// Text with no scorable tokens yields all zeros, matching the reference
    /// analyzer; callers short-circuit empty input before getting here.
    #[must_use]
    pub fn score(&self, text: &str) -> PolarityScores {
        let words = tokenize(text);
        if words.is_empty() {
            return PolarityScores {
                neg: 0.0,
                neu: 0.0,
                pos: 0.0,
                compound: 0.0,
            };
        }

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_differential = has_cap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for (i, word) in lowered.iter().enumerate() {
            if self.is_booster(word) {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(i, &words, &lowered, cap_differential));
        }

        apply_but_rule(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn is_booster(&self, word: &str) -> bool {
        self.increments.contains(word) || self.decrements.contains(word)
    }

    fn valence_at(&self, i: usize, words: &[&str], lowered: &[String], cap_diff: bool) -> f64 {
        let Some(&base) = self.lexicon.get(&lowered[i]) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_diff && is_shouted(words[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prior = &lowered[i - distance];
            if !self.lexicon.contains_key(prior) {
                let mut scalar = self.booster_scalar(prior, words[i - distance], valence, cap_diff);
                if distance == 2 {
                    scalar *= 0.95;
                } else if distance == 3 {
                    scalar *= 0.9;
                }
                valence += scalar;
            }
            if self.is_negation(prior) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    fn booster_scalar(&self, lowered: &str, original: &str, valence: f64, cap_diff: bool) -> f64 {
        let mut scalar = if self.increments.contains(lowered) {
            BOOSTER_STEP
        } else if self.decrements.contains(lowered) {
            -BOOSTER_STEP
        } else {
            return 0.0;
        };

        if valence < 0.0 {
            scalar = -scalar;
        }
        if cap_diff && is_shouted(original) {
            scalar += CAPS_INCREMENT.copysign(valence);
        }
        scalar
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }
}

/// Whitespace tokens with surrounding punctuation trimmed. A token whose
/// trimmed form is two characters or shorter is kept verbatim (emoticons),
/// and single-character tokens are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn is_shouted(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, words are in all caps.
fn has_cap_differential(words: &[&str]) -> bool {
    let shouted = words.iter().filter(|w| is_shouted(w)).count();
    shouted > 0 && shouted < words.len()
}

/// Contrastive conjunction: sentiment before "but" is halved, after it is
/// amplified by half.
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    #[allow(clippy::cast_precision_loss)]
    let exclamation = exclamations as f64 * EXCLAMATION_STEP;
    #[allow(clippy::cast_precision_loss)]
    let question = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_STEP,
        _ => QUESTION_CAP,
    };
    exclamation + question
}

fn normalize_compound(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_compound(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > f64::abs(neg_sum) {
        pos_sum += emphasis;
    } else if pos_sum < f64::abs(neg_sum) {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return PolarityScores {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: round_to(compound, 4),
        };
    }

    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> PolarityScores {
        VaderScorer::default().score(text)
    }

    #[test]
    fn unknown_words_are_neutral() {
        let s = score("product arrived tuesday");
        assert_eq!(s.compound, 0.0);
        assert!((s.neu - 1.0).abs() < 1e-9);
        assert_eq!(s.pos, 0.0);
        assert_eq!(s.neg, 0.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        let s = score("");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neu, 0.0);
    }

    #[test]
    fn positive_words_score_positive() {
        let s = score("wonderfully fantastic product love");
        assert!(s.compound > 0.05, "expected positive compound, got {s:?}");
        assert!(s.pos > s.neg);
    }

    #[test]
    fn negative_words_score_negative() {
        let s = score("terrible hate much");
        assert!(s.compound < -0.05, "expected negative compound, got {s:?}");
        assert!(s.neg > s.pos);
    }

    #[test]
    fn compound_matches_normalization_formula() {
        // "good" alone: 1.9 / sqrt(1.9^2 + 15)
        let expected = round_to(1.9 / (1.9_f64 * 1.9 + 15.0).sqrt(), 4);
        assert!((score("good").compound - expected).abs() < 1e-9);
    }

    #[test]
    fn proportions_sum_to_one() {
        let s = score("great support but slow delivery");
        let sum = s.neg + s.neu + s.pos;
        assert!((sum - 1.0).abs() < 0.01, "proportions sum to {sum}");
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(score("good").compound > 0.0);
        assert!(score("not good").compound < 0.0);
        assert!(score("isn't good").compound < 0.0);
    }

    #[test]
    fn booster_intensifies() {
        assert!(score("extremely good").compound > score("good").compound);
        assert!(score("slightly good").compound < score("good").compound);
        assert!(score("extremely bad").compound < score("bad").compound);
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let s = score("bad but great");
        assert!(s.compound > 0.0, "second clause should dominate, got {s:?}");
    }

    #[test]
    fn exclamation_adds_emphasis() {
        assert!(score("good!!!").compound > score("good").compound);
    }

    #[test]
    fn shouting_adds_emphasis_when_case_is_mixed() {
        assert!(score("GREAT service").compound > score("great service").compound);
    }

    #[test]
    fn compound_stays_in_range() {
        let s = score("best best best best best best best best best best!!!!");
        assert!((-1.0..=1.0).contains(&s.compound));
        let s = score("worst worst worst worst worst worst worst worst worst");
        assert!((-1.0..=1.0).contains(&s.compound));
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = VaderScorer::default();
        let text = "really great but honestly the delivery was slow";
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}
