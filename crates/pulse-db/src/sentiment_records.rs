//! Database operations for the `sentiment_records` table.
//!
//! Records are append-only: there is no update or delete here.

use chrono::{DateTime, Utc};
use pulse_core::SentimentLabel;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `sentiment_records` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SentimentRecordRow {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub original_text: String,
    pub processed_text: String,
    pub sentiment_label: String,
    pub compound_score: f64,
    pub positive_score: Option<f64>,
    pub neutral_score: Option<f64>,
    pub negative_score: Option<f64>,
}

impl SentimentRecordRow {
    /// Parse the stored label.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Core`] if the stored label is not a known value.
    pub fn label(&self) -> Result<SentimentLabel, DbError> {
        Ok(self.sentiment_label.parse()?)
    }
}

/// Values for a record about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSentimentRecord<'a> {
    pub original_text: &'a str,
    pub processed_text: &'a str,
    pub label: SentimentLabel,
    pub compound_score: f64,
    pub positive_score: Option<f64>,
    pub neutral_score: Option<f64>,
    pub negative_score: Option<f64>,
}

/// Per-label record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct SentimentCounts {
    pub total: i64,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

const RECORD_COLUMNS: &str = "id, \"timestamp\", original_text, processed_text, sentiment_label, \
     compound_score, positive_score, neutral_score, negative_score";

/// Insert one record inside a transaction and return the stored row.
///
/// The transaction rolls back on drop if the insert fails, so either the
/// whole record is stored or nothing is. Blank text, out-of-range scores and
/// a label that disagrees with the compound score are rejected by table
/// constraints.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the transaction cannot be opened, the insert
/// violates a constraint, or the commit fails.
pub async fn insert_sentiment_record(
    pool: &PgPool,
    record: &NewSentimentRecord<'_>,
) -> Result<SentimentRecordRow, DbError> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, SentimentRecordRow>(&format!(
        "INSERT INTO sentiment_records \
             (original_text, processed_text, sentiment_label, compound_score, \
              positive_score, neutral_score, negative_score) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {RECORD_COLUMNS}"
    ))
    .bind(record.original_text)
    .bind(record.processed_text)
    .bind(record.label.as_str())
    .bind(record.compound_score)
    .bind(record.positive_score)
    .bind(record.neutral_score)
    .bind(record.negative_score)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(id = row.id, label = %record.label, "sentiment record stored");
    Ok(row)
}

/// Count records, optionally restricted to one label.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_sentiment_records(
    pool: &PgPool,
    label: Option<SentimentLabel>,
) -> Result<i64, DbError> {
    let count = match label {
        Some(label) => {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM sentiment_records WHERE sentiment_label = $1",
            )
            .bind(label.as_str())
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sentiment_records")
                .fetch_one(pool)
                .await?
        }
    };

    Ok(count)
}

/// Total and per-label counts from a single scan.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn sentiment_summary(pool: &PgPool) -> Result<SentimentCounts, DbError> {
    let counts = sqlx::query_as::<_, SentimentCounts>(
        "SELECT \
             COUNT(*) AS total, \
             COUNT(*) FILTER (WHERE sentiment_label = 'positive') AS positive, \
             COUNT(*) FILTER (WHERE sentiment_label = 'negative') AS negative, \
             COUNT(*) FILTER (WHERE sentiment_label = 'neutral') AS neutral \
         FROM sentiment_records",
    )
    .fetch_one(pool)
    .await?;

    Ok(counts)
}

/// List the newest records first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent_sentiment_records(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<SentimentRecordRow>, DbError> {
    let rows = sqlx::query_as::<_, SentimentRecordRow>(&format!(
        "SELECT {RECORD_COLUMNS} \
         FROM sentiment_records \
         ORDER BY \"timestamp\" DESC, id DESC \
         LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
