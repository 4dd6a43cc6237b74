//! Reporting HTTP handlers: thread counts, total and per date range.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{thread_count, thread_count_between};
use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadCountResponse {
    pub total_count: i64,
}

/// GET /threads — total number of thread documents.
pub async fn get_thread_count(
    State(state): State<AppState>,
    AuthUser(_subject): AuthUser,
) -> Result<Json<ThreadCountResponse>, AppError> {
    let total_count = thread_count(state.db()).await?;
    Ok(Json(ThreadCountResponse { total_count }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// GET /threads/date-range?startDate=..&endDate=.. — thread count created
/// within the inclusive range (RFC 3339 instants).
pub async fn get_thread_count_by_date_range(
    State(state): State<AppState>,
    AuthUser(_subject): AuthUser,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<ThreadCountResponse>, AppError> {
    if range.end_date < range.start_date {
        return Err(AppError::Validation(
            "endDate must not precede startDate".to_string(),
        ));
    }
    let total_count = thread_count_between(state.db(), range.start_date, range.end_date).await?;
    Ok(Json(ThreadCountResponse { total_count }))
}
