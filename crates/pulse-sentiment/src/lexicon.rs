//! Polarity lexicon: word valences, intensity modifiers and negations.

use std::collections::HashMap;

use crate::error::SentimentError;

/// Built-in valences on the VADER scale (roughly `[-4.0, 4.0]`).
///
/// This is a compact general-purpose subset. Deployments that need full
/// coverage point `PULSE_VADER_LEXICON_PATH` at the complete lexicon file.
pub(crate) const BUILTIN_LEXICON: &[(&str, f64)] = &[
    // Positive
    ("accomplish", 1.8),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("amazing", 2.8),
    ("amazingly", 2.5),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("attractive", 1.9),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("benefit", 2.0),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("comfortable", 2.3),
    ("comfort", 1.5),
    ("confident", 2.2),
    ("convenient", 1.8),
    ("cool", 1.3),
    ("courteous", 2.3),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("delightful", 2.9),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fast", 1.0),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("happy", 2.7),
    ("happiness", 2.6),
    ("helpful", 1.8),
    ("honest", 2.3),
    ("hope", 1.9),
    ("ideal", 2.4),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("incredible", 1.7),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("magnificent", 2.9),
    ("marvelous", 2.9),
    ("nice", 1.8),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("polite", 2.3),
    ("popular", 1.8),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("professional", 1.3),
    ("quick", 1.1),
    ("recommend", 1.5),
    ("recommended", 0.8),
    ("reliable", 1.9),
    ("relief", 2.1),
    ("responsive", 1.5),
    ("rich", 2.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("satisfying", 2.0),
    ("smart", 1.7),
    ("smile", 1.5),
    ("smooth", 0.5),
    ("solid", 0.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("super", 2.9),
    ("superb", 3.1),
    ("support", 1.7),
    ("supportive", 1.2),
    ("sweet", 2.0),
    ("terrific", 3.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 1.9),
    ("top", 0.8),
    ("trust", 2.3),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("value", 1.4),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wonderfully", 2.9),
    ("worth", 0.9),
    ("wow", 2.8),
    // Negative
    ("abuse", -3.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("awful", -2.0),
    ("bad", -2.5),
    ("badly", -2.1),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("careless", -1.5),
    ("cheap", -0.4),
    ("cheated", -2.6),
    ("complain", -1.5),
    ("complaint", -1.5),
    ("confused", -1.3),
    ("confusing", -1.3),
    ("crap", -1.6),
    ("crash", -1.7),
    ("cruel", -2.8),
    ("damage", -2.2),
    ("damaged", -1.9),
    ("dead", -3.3),
    ("defective", -1.9),
    ("delay", -1.3),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dissatisfied", -1.6),
    ("dreadful", -2.7),
    ("dumb", -2.3),
    ("error", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fault", -1.7),
    ("fear", -2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("frustration", -2.1),
    ("garbage", -1.4),
    ("hard", -0.4),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hell", -3.6),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ignored", -1.3),
    ("impossible", -1.5),
    ("inadequate", -1.7),
    ("inferior", -1.7),
    ("insult", -2.3),
    ("issue", -0.6),
    ("junk", -1.4),
    ("lame", -1.8),
    ("lazy", -1.5),
    ("lose", -1.7),
    ("lost", -1.3),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("missing", -1.2),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("nightmare", -1.9),
    ("noisy", -0.7),
    ("painful", -1.9),
    ("pathetic", -2.2),
    ("poor", -2.1),
    ("poorly", -2.2),
    ("problem", -1.7),
    ("regret", -1.8),
    ("ridiculous", -1.5),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.4),
    ("scary", -2.2),
    ("shame", -2.1),
    ("sick", -2.3),
    ("slow", -0.8),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("terribly", -2.1),
    ("trash", -1.5),
    ("ugly", -2.3),
    ("unacceptable", -2.0),
    ("unfortunately", -1.4),
    ("unhappy", -1.8),
    ("unreliable", -1.6),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
];

/// Largest magnitude on the VADER rating scale.
const MAX_VALENCE: f64 = 4.0;

/// Additive step applied by intensity modifiers.
pub(crate) const BOOSTER_STEP: f64 = 0.293;

/// Intensifiers that push the next sentiment word away from zero.
pub(crate) const BOOSTER_INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously", "fully",
    "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "uber", "unbelievably", "unusually", "utterly",
    "very",
];

/// Dampeners that pull the next sentiment word toward zero.
pub(crate) const BOOSTER_DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

/// Words that flip the polarity of a following sentiment word.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

pub(crate) fn builtin() -> HashMap<String, f64> {
    BUILTIN_LEXICON
        .iter()
        .map(|&(word, valence)| (word.to_string(), valence))
        .collect()
}

/// Parse a VADER-format lexicon: `token<TAB>mean<TAB>stddev<TAB>raw-ratings`.
///
/// Only the first two columns are used. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`SentimentError::MalformedLexicon`] for a line without a
/// tab-separated numeric mean, or with a mean that is not finite or lies
/// outside `[-4.0, 4.0]`.
pub(crate) fn parse(text: &str) -> Result<HashMap<String, f64>, SentimentError> {
    let mut lexicon = HashMap::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let token = fields.next().unwrap_or_default().trim();
        let mean = fields.next().ok_or_else(|| SentimentError::MalformedLexicon {
            line: idx + 1,
            reason: "missing valence column".to_string(),
        })?;

        if token.is_empty() {
            return Err(SentimentError::MalformedLexicon {
                line: idx + 1,
                reason: "empty token".to_string(),
            });
        }

        let valence = mean
            .trim()
            .parse::<f64>()
            .map_err(|e| SentimentError::MalformedLexicon {
                line: idx + 1,
                reason: format!("invalid valence '{}': {e}", mean.trim()),
            })?;

        if !valence.is_finite() || !(-MAX_VALENCE..=MAX_VALENCE).contains(&valence) {
            return Err(SentimentError::MalformedLexicon {
                line: idx + 1,
                reason: format!("valence {valence} outside [-{MAX_VALENCE}, {MAX_VALENCE}]"),
            });
        }

        lexicon.insert(token.to_lowercase(), valence);
    }

    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_no_duplicate_words() {
        assert_eq!(builtin().len(), BUILTIN_LEXICON.len());
    }

    #[test]
    fn builtin_valences_stay_on_scale() {
        for &(word, valence) in BUILTIN_LEXICON {
            assert!(
                (-MAX_VALENCE..=MAX_VALENCE).contains(&valence) && valence != 0.0,
                "{word} has out-of-range valence {valence}"
            );
        }
    }

    #[test]
    fn parse_reads_vader_columns() {
        let text = "good\t1.9\t0.9434\t[2, 1, 2]\n\nbad\t-2.5\t0.67082\t[-3, -2]\n";
        let lexicon = parse(text).expect("parse");
        assert_eq!(lexicon.len(), 2);
        assert!((lexicon["good"] - 1.9).abs() < f64::EPSILON);
        assert!((lexicon["bad"] + 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_rejects_missing_valence() {
        let err = parse("good\t1.9\nbroken-line\n").unwrap_err();
        assert!(matches!(err, SentimentError::MalformedLexicon { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_non_numeric_valence() {
        let err = parse("good\tvery\n").unwrap_err();
        assert!(matches!(err, SentimentError::MalformedLexicon { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_non_finite_and_off_scale_valence() {
        for (text, line) in [
            ("good\tNaN\t0\t[]\n", 1),
            ("good\t1.9\ngreat\tinf\t0\t[]\n", 2),
            ("awful\t-inf\n", 1),
            ("good\t1.9\nbad\t-2.5\nhuge\t1e300\n", 3),
            ("meh\t4.5\n", 1),
        ] {
            let err = parse(text).unwrap_err();
            assert!(
                matches!(err, SentimentError::MalformedLexicon { line: l, .. } if l == line),
                "expected rejection at line {line} for {text:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_accepts_scale_endpoints() {
        let lexicon = parse("best\t4.0\nworst\t-4.0\n").expect("parse");
        assert_eq!(lexicon.len(), 2);
    }
}
