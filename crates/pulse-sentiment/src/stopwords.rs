//! Built-in English stopword list.

use std::collections::HashSet;

/// The standard English stopword list shipped with common NLP toolkits.
///
/// Entries with apostrophes never match a normalized token (punctuation is
/// stripped first) but are kept so the list matches the upstream resource.
pub(crate) const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

pub(crate) fn builtin() -> HashSet<String> {
    ENGLISH_STOPWORDS.iter().map(|w| (*w).to_string()).collect()
}

/// Parse a newline-separated stopword list. Blank lines and `#` comments are skipped.
pub(crate) fn parse(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_has_no_duplicates() {
        assert_eq!(builtin().len(), ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn builtin_list_covers_articles() {
        let set = builtin();
        for w in ["the", "a", "an"] {
            assert!(set.contains(w), "missing {w}");
        }
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let set = parse("# custom list\nThe\n\n  foo  \n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("foo"));
    }
}
