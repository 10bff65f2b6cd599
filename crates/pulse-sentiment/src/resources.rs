//! Read-only language resources shared by the normalizer and scorer.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::SentimentError;
use crate::{lexicon, stopwords};

/// Stopwords and polarity lexicon, loaded once at startup.
#[derive(Debug, Clone)]
pub struct LexiconResources {
    pub stopwords: HashSet<String>,
    pub lexicon: HashMap<String, f64>,
}

impl Default for LexiconResources {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconResources {
    /// Resources compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            stopwords: stopwords::builtin(),
            lexicon: lexicon::builtin(),
        }
    }

    /// Load resources, replacing the built-in stopwords and/or lexicon with
    /// the given files.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if a file cannot be read,
    /// [`SentimentError::MalformedLexicon`] for a bad lexicon line, and
    /// [`SentimentError::EmptyResource`] if a file yields no entries.
    pub fn load(
        stopwords_path: Option<&Path>,
        lexicon_path: Option<&Path>,
    ) -> Result<Self, SentimentError> {
        let stopwords = match stopwords_path {
            Some(path) => {
                let set = stopwords::parse(&read("stopwords", path)?);
                if set.is_empty() {
                    return Err(SentimentError::EmptyResource("stopwords"));
                }
                set
            }
            None => stopwords::builtin(),
        };

        let lexicon = match lexicon_path {
            Some(path) => {
                let map = lexicon::parse(&read("lexicon", path)?)?;
                if map.is_empty() {
                    return Err(SentimentError::EmptyResource("lexicon"));
                }
                map
            }
            None => lexicon::builtin(),
        };

        tracing::info!(
            stopwords = stopwords.len(),
            lexicon = lexicon.len(),
            custom_stopwords = stopwords_path.is_some(),
            custom_lexicon = lexicon_path.is_some(),
            "language resources loaded"
        );

        Ok(Self { stopwords, lexicon })
    }
}

fn read(resource: &'static str, path: &Path) -> Result<String, SentimentError> {
    std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
        resource,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn load_without_paths_uses_builtin() {
        let resources = LexiconResources::load(None, None).expect("builtin load");
        assert_eq!(resources.stopwords, stopwords::builtin());
        assert_eq!(resources.lexicon.len(), lexicon::BUILTIN_LEXICON.len());
    }

    #[test]
    fn load_reads_custom_lexicon() {
        let file = temp_file("splendid\t2.8\t0.4\t[3, 3]\n");
        let resources = LexiconResources::load(None, Some(file.path())).expect("custom lexicon");
        assert_eq!(resources.lexicon.len(), 1);
        assert!(resources.lexicon.contains_key("splendid"));
    }

    #[test]
    fn load_reads_custom_stopwords() {
        let file = temp_file("# shop jargon\nsku\nOrder\n");
        let resources = LexiconResources::load(Some(file.path()), None).expect("custom stopwords");
        assert_eq!(resources.stopwords.len(), 2);
        assert!(resources.stopwords.contains("order"));
    }

    #[test]
    fn load_fails_on_missing_file() {
        let missing = Path::new("/nonexistent/pulse/vader_lexicon.txt");
        let err = LexiconResources::load(None, Some(missing)).unwrap_err();
        assert!(matches!(err, SentimentError::Io { resource: "lexicon", .. }));
    }

    #[test]
    fn load_fails_on_empty_stopwords() {
        let file = temp_file("# nothing here\n\n");
        let err = LexiconResources::load(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, SentimentError::EmptyResource("stopwords")));
    }

    #[test]
    fn load_fails_on_non_finite_valence() {
        let file = temp_file("good\t1.9\t0.9\t[2]\nbroken\tNaN\t0\t[]\n");
        let err = LexiconResources::load(None, Some(file.path())).unwrap_err();
        assert!(matches!(err, SentimentError::MalformedLexicon { line: 2, .. }));
    }
}
