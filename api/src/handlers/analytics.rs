//! Analytics handler

use axum::{extract::State, Json};

use super::views::AnalyticsView;
use crate::error::AppError;
use crate::AppState;

/// GET /analytics
///
/// Row counts for the five normalized tables.
pub async fn get_analytics(State(state): State<AppState>) -> Result<Json<AnalyticsView>, AppError> {
    let counts = state.analytics_service.entity_counts().await?;

    Ok(Json(counts.into()))
}
