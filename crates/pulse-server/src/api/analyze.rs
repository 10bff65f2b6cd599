use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use pulse_core::SentimentLabel;
use pulse_db::{DbError, NewSentimentRecord};
use pulse_sentiment::{PolarityScores, SentimentAnalysis};
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeResponse {
    pub original_text: String,
    pub processed_text: String,
    pub sentiment: SentimentLabel,
    pub compound_score: f64,
    pub detailed_scores: PolarityScores,
    pub timestamp: DateTime<Utc>,
}

impl From<SentimentAnalysis> for AnalyzeResponse {
    fn from(analysis: SentimentAnalysis) -> Self {
        Self {
            original_text: analysis.original_text,
            processed_text: analysis.processed_text,
            sentiment: analysis.label,
            compound_score: analysis.compound,
            detailed_scores: analysis.scores,
            timestamp: Utc::now(),
        }
    }
}

/// Result of the best-effort write that follows every analysis.
#[derive(Debug)]
pub(super) enum PersistOutcome {
    Stored(i64),
    Dropped(DbError),
}

pub(super) async fn persist_analysis(pool: &PgPool, analysis: &SentimentAnalysis) -> PersistOutcome {
    let record = NewSentimentRecord {
        original_text: &analysis.original_text,
        processed_text: &analysis.processed_text,
        label: analysis.label,
        compound_score: analysis.compound,
        positive_score: Some(analysis.scores.pos),
        neutral_score: Some(analysis.scores.neu),
        negative_score: Some(analysis.scores.neg),
    };

    match pulse_db::insert_sentiment_record(pool, &record).await {
        Ok(row) => PersistOutcome::Stored(row.id),
        Err(e) => PersistOutcome::Dropped(e),
    }
}

/// Pull the feedback text out of a request body.
///
/// Numbers and booleans are accepted as their JSON text; `null` counts as
/// missing. Blank text is rejected.
fn extract_text(body: &Value) -> Result<String, &'static str> {
    let Value::Object(fields) = body else {
        return Err("request body must be a JSON object");
    };

    let text = match fields.get("text") {
        None | Some(Value::Null) => return Err("missing required field 'text'"),
        Some(Value::String(s)) => s.clone(),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
        Some(Value::Array(_) | Value::Object(_)) => return Err("'text' must be a string"),
    };

    if text.trim().is_empty() {
        return Err("'text' must not be empty");
    }
    Ok(text)
}

pub(super) async fn analyze_feedback(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected analyze body");
        ApiError::validation(req_id.0.clone(), "request body must be valid JSON")
    })?;

    let text = extract_text(&body).map_err(|message| ApiError::validation(req_id.0.clone(), message))?;

    let analysis = state.analyzer.analyze(&text);

    match persist_analysis(&state.pool, &analysis).await {
        PersistOutcome::Stored(id) => {
            tracing::debug!(request_id = %req_id.0, record_id = id, "analysis persisted");
        }
        PersistOutcome::Dropped(e) => {
            tracing::error!(
                request_id = %req_id.0,
                error = %e,
                "failed to persist analysis; returning result without storing it"
            );
        }
    }

    Ok(Json(AnalyzeResponse::from(analysis)))
}
