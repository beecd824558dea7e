//! Reporting API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::models::{DailySales, DailySalesQuery};

use crate::core::ServerState;
use crate::db::repository::report;
use crate::utils::time::{day_end_millis, day_start_millis, parse_date, today};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/reports/daily-sales?date=YYYY-MM-DD
///
/// Defaults to today in the business time zone.
pub async fn daily_sales(
    State(state): State<ServerState>,
    query: Result<Query<DailySalesQuery>, QueryRejection>,
) -> AppResult<Json<DailySales>> {
    let Query(query) =
        query.map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, e.body_text()))?;
    let tz = state.config.business_timezone;
    let date = match query.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => today(tz),
    };

    let start = day_start_millis(date, tz);
    let end = day_end_millis(date, tz);
    let total_sales = report::total_sales(&state.pool, start, end).await?;
    let popular_items = report::popular_items(&state.pool, start, end).await?;

    Ok(Json(DailySales {
        date: date.format("%Y-%m-%d").to_string(),
        total_sales,
        popular_items,
    }))
}
