//! Live integration tests for pulse-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/pulse-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use pulse_core::SentimentLabel;
use pulse_db::{
    count_sentiment_records, health_check, insert_sentiment_record,
    list_recent_sentiment_records, sentiment_summary, DbError, NewSentimentRecord,
    SentimentCounts,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn record(text: &str, label: SentimentLabel, compound: f64) -> NewSentimentRecord<'_> {
    NewSentimentRecord {
        original_text: text,
        processed_text: text,
        label,
        compound_score: compound,
        positive_score: Some(0.3),
        neutral_score: Some(0.5),
        negative_score: Some(0.2),
    }
}

// ---------------------------------------------------------------------------
// Section 1: Insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn insert_returns_stored_row(pool: sqlx::PgPool) {
    let row = insert_sentiment_record(&pool, &record("great service", SentimentLabel::Positive, 0.6249))
        .await
        .expect("insert_sentiment_record failed");

    assert!(row.id > 0);
    assert_eq!(row.original_text, "great service");
    assert_eq!(row.sentiment_label, "positive");
    assert!((row.compound_score - 0.6249).abs() < 1e-9);
    assert_eq!(row.positive_score, Some(0.3));
    assert_eq!(row.label().expect("known label"), SentimentLabel::Positive);
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_accepts_empty_processed_text(pool: sqlx::PgPool) {
    let new = NewSentimentRecord {
        original_text: "the a an",
        processed_text: "",
        label: SentimentLabel::Neutral,
        compound_score: 0.0,
        positive_score: Some(0.0),
        neutral_score: Some(1.0),
        negative_score: Some(0.0),
    };

    let row = insert_sentiment_record(&pool, &new)
        .await
        .expect("insert_sentiment_record failed");
    assert_eq!(row.processed_text, "");
    assert_eq!(row.sentiment_label, "neutral");
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_rejects_whitespace_only_text(pool: sqlx::PgPool) {
    let err = insert_sentiment_record(&pool, &record("   \t", SentimentLabel::Neutral, 0.0))
        .await
        .expect_err("blank text should violate a constraint");

    assert!(matches!(err, DbError::Sqlx(_)));
    assert_eq!(count_sentiment_records(&pool, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_rejects_label_inconsistent_with_compound(pool: sqlx::PgPool) {
    let err = insert_sentiment_record(&pool, &record("fine", SentimentLabel::Positive, 0.01))
        .await
        .expect_err("mislabeled record should violate a constraint");

    assert!(matches!(err, DbError::Sqlx(_)));
    assert_eq!(count_sentiment_records(&pool, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_rejects_out_of_range_compound(pool: sqlx::PgPool) {
    let err = insert_sentiment_record(&pool, &record("amazing", SentimentLabel::Positive, 1.5))
        .await
        .expect_err("compound above 1.0 should violate a constraint");

    assert!(matches!(err, DbError::Sqlx(_)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn threshold_values_are_accepted_with_matching_labels(pool: sqlx::PgPool) {
    for (label, compound) in [
        (SentimentLabel::Positive, 0.05),
        (SentimentLabel::Negative, -0.05),
        (SentimentLabel::Neutral, 0.049_9),
    ] {
        insert_sentiment_record(&pool, &record("boundary", label, compound))
            .await
            .unwrap_or_else(|e| panic!("{label} at {compound} rejected: {e}"));
    }
}

// ---------------------------------------------------------------------------
// Section 2: Counts and summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn summary_of_empty_table_is_zero(pool: sqlx::PgPool) {
    let counts = sentiment_summary(&pool).await.expect("summary failed");
    assert_eq!(counts, SentimentCounts::default());
}

#[sqlx::test(migrations = "../../migrations")]
async fn summary_matches_inserted_labels(pool: sqlx::PgPool) {
    insert_sentiment_record(&pool, &record("love it", SentimentLabel::Positive, 0.63))
        .await
        .unwrap();
    insert_sentiment_record(&pool, &record("hate it", SentimentLabel::Negative, -0.57))
        .await
        .unwrap();
    insert_sentiment_record(&pool, &record("fantastic", SentimentLabel::Positive, 0.55))
        .await
        .unwrap();

    let counts = sentiment_summary(&pool).await.expect("summary failed");
    assert_eq!(
        counts,
        SentimentCounts {
            total: 3,
            positive: 2,
            negative: 1,
            neutral: 0,
        }
    );
    assert_eq!(counts.positive + counts.negative + counts.neutral, counts.total);

    assert_eq!(count_sentiment_records(&pool, None).await.unwrap(), 3);
    assert_eq!(
        count_sentiment_records(&pool, Some(SentimentLabel::Positive))
            .await
            .unwrap(),
        2
    );
    assert_eq!(
        count_sentiment_records(&pool, Some(SentimentLabel::Neutral))
            .await
            .unwrap(),
        0
    );
}

// ---------------------------------------------------------------------------
// Section 3: Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_recent_returns_newest_first_and_respects_limit(pool: sqlx::PgPool) {
    for text in ["first", "second", "third"] {
        insert_sentiment_record(&pool, &record(text, SentimentLabel::Neutral, 0.0))
            .await
            .unwrap();
    }

    let rows = list_recent_sentiment_records(&pool, 2)
        .await
        .expect("list_recent_sentiment_records failed");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].original_text, "third");
    assert_eq!(rows[1].original_text, "second");
}

// ---------------------------------------------------------------------------
// Section 4: Health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn health_check_succeeds_on_live_pool(pool: sqlx::PgPool) {
    health_check(&pool).await.expect("health_check failed");
}
