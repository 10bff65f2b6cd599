//! Read-only queries over stored analyses.

use chrono::Utc;

/// Print total and per-label counts.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_summary(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let counts = pulse_db::sentiment_summary(pool).await?;

    println!("total analyzed: {}", counts.total);
    println!("  positive:     {}", counts.positive);
    println!("  negative:     {}", counts.negative);
    println!("  neutral:      {}", counts.neutral);
    println!("generated at {}", Utc::now().to_rfc3339());
    Ok(())
}

/// Print the newest `limit` records, one per line.
///
/// # Errors
///
/// Returns an error if `limit` is not positive or the database query fails.
pub(crate) async fn run_recent(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    if limit < 1 {
        anyhow::bail!("--limit must be at least 1");
    }

    let rows = pulse_db::list_recent_sentiment_records(pool, limit).await?;
    if rows.is_empty() {
        println!("no analyses stored yet");
        return Ok(());
    }

    for row in rows {
        println!(
            "{:>6}  {}  {:<8}  {:>7.4}  {}",
            row.id,
            row.timestamp.format("%Y-%m-%d %H:%M:%S"),
            row.sentiment_label,
            row.compound_score,
            preview(&row.original_text, 60)
        );
    }
    Ok(())
}

/// First `max` characters of `text` on one line, with an ellipsis if cut.
pub(crate) fn preview(text: &str, max: usize) -> String {
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
