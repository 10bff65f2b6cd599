//! Part-of-speech-agnostic lemmatizer.
//!
//! Tokens are treated as nouns: irregular plurals come from an exception
//! table, regular plurals go through suffix detachment rules. A candidate
//! lemma is only accepted when the rules leave it unchanged, so
//! `lemmatize(lemmatize(w)) == lemmatize(w)` for every input.

use std::collections::{HashMap, HashSet};

/// Irregular noun plurals and plurals whose singular the suffix rules get wrong.
pub(crate) const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("aches", "ache"),
    ("aliases", "alias"),
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("bacteria", "bacterium"),
    ("biases", "bias"),
    ("brownies", "brownie"),
    ("buses", "bus"),
    ("caches", "cache"),
    ("cacti", "cactus"),
    ("calories", "calorie"),
    ("calves", "calf"),
    ("children", "child"),
    ("cliches", "cliche"),
    ("cookies", "cookie"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("data", "datum"),
    ("diagnoses", "diagnosis"),
    ("dominoes", "domino"),
    ("echoes", "echo"),
    ("elves", "elf"),
    ("embargoes", "embargo"),
    ("feet", "foot"),
    ("fungi", "fungus"),
    ("gases", "gas"),
    ("geese", "goose"),
    ("halves", "half"),
    ("headaches", "headache"),
    ("heroes", "hero"),
    ("hooves", "hoof"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lenses", "lens"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("media", "medium"),
    ("men", "man"),
    ("mice", "mouse"),
    ("mosquitoes", "mosquito"),
    ("movies", "movie"),
    ("niches", "niche"),
    ("nuclei", "nucleus"),
    ("oxen", "ox"),
    ("pence", "penny"),
    ("phenomena", "phenomenon"),
    ("potatoes", "potato"),
    ("rookies", "rookie"),
    ("selfies", "selfie"),
    ("shelves", "shelf"),
    ("stimuli", "stimulus"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("tomatoes", "tomato"),
    ("torpedoes", "torpedo"),
    ("vetoes", "veto"),
    ("volcanoes", "volcano"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
    ("zombies", "zombie"),
];

/// Words ending in `s` that are already base forms.
const INVARIANT: &[&str] = &[
    "afterwards", "always", "atlas", "besides", "canvas", "chaos", "christmas", "economics",
    "ethics", "goes", "lens", "mathematics", "news", "overseas", "pancreas", "perhaps",
    "physics", "politics", "series", "sometimes", "species", "texas", "thanks", "towards",
    "whereas", "yes",
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
    invariant: HashSet<String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            exceptions: NOUN_EXCEPTIONS
                .iter()
                .map(|&(inflected, lemma)| (inflected.to_string(), lemma.to_string()))
                .collect(),
            invariant: INVARIANT.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Number of irregular forms known to the exception table.
    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Reduce `word` to its base form.
    ///
    /// `reject` is consulted on the candidate lemma; a rejected candidate
    /// (e.g. one that collapses onto a stopword) leaves the word unchanged.
    pub fn lemmatize<F>(&self, word: &str, reject: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let candidate = self.base_form(word);

        if self.base_form(&candidate) != candidate
            || candidate.chars().count() <= 1
            || reject(&candidate)
        {
            word.to_string()
        } else {
            candidate
        }
    }

    fn base_form(&self, word: &str) -> String {
        self.exceptions
            .get(word)
            .cloned()
            .unwrap_or_else(|| self.detach_suffix(word))
    }

    fn detach_suffix(&self, word: &str) -> String {
        if self.invariant.contains(word) || word.chars().count() < 4 {
            return word.to_string();
        }

        if ["ss", "us", "is", "ias"].iter().any(|end| word.ends_with(end)) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("smen") {
            return format!("{stem}sman");
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.chars().count() > 1 {
                return format!("{stem}y");
            }
        }

        for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }

        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }

        word.to_string()
    }
}
