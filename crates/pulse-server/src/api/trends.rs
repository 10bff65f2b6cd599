use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use pulse_db::SentimentCounts;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct TrendsSummary {
    pub total_analyzed: i64,
    pub positive_feedbacks: i64,
    pub negative_feedbacks: i64,
    pub neutral_feedbacks: i64,
    pub last_updated: DateTime<Utc>,
}

impl From<SentimentCounts> for TrendsSummary {
    fn from(counts: SentimentCounts) -> Self {
        Self {
            total_analyzed: counts.total,
            positive_feedbacks: counts.positive,
            negative_feedbacks: counts.negative,
            neutral_feedbacks: counts.neutral,
            last_updated: Utc::now(),
        }
    }
}

/// Aggregate counts over every stored analysis, computed fresh per call.
pub(super) async fn trends_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<TrendsSummary>, ApiError> {
    let counts = pulse_db::sentiment_summary(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(counts.into()))
}
