//! Offline commands: no database required.

use std::path::Path;

use pulse_sentiment::{LexiconResources, SentimentAnalyzer};

/// Analyze `text` with the configured resources and print the analysis as
/// pretty JSON.
///
/// # Errors
///
/// Returns an error if a resource file cannot be loaded.
pub(crate) fn run_analyze(
    text: &str,
    stopwords: Option<&Path>,
    lexicon: Option<&Path>,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("text must not be empty");
    }

    let resources = LexiconResources::load(stopwords, lexicon)?;
    let analysis = SentimentAnalyzer::from_resources(resources).analyze(text);

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

/// Load resources the same way the server does at startup and report sizes.
///
/// # Errors
///
/// Returns an error if a resource file is missing, malformed or empty.
pub(crate) fn run_resources_check(
    stopwords: Option<&Path>,
    lexicon: Option<&Path>,
) -> anyhow::Result<()> {
    let resources = LexiconResources::load(stopwords, lexicon)?;

    println!(
        "stopwords: {} ({})",
        resources.stopwords.len(),
        source_label(stopwords)
    );
    println!(
        "lexicon:   {} ({})",
        resources.lexicon.len(),
        source_label(lexicon)
    );

    let analyzer = SentimentAnalyzer::from_resources(resources);
    println!(
        "lemma exceptions: {}",
        analyzer.normalizer().lemma_exception_count()
    );
    println!("resources ok");
    Ok(())
}

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
}
