use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read {resource} from {}: {source}", path.display())]
    Io {
        resource: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon entry at line {line}: {reason}")]
    MalformedLexicon { line: usize, reason: String },

    #[error("{0} resource is empty")]
    EmptyResource(&'static str),
}
