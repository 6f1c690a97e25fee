//! Loan application handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::params::LoanApplicationParams;
use super::views::{LoanApplicationDetailedView, LoanApplicationView};
use crate::domain::entities::ApplicationId;
use crate::error::AppError;
use crate::AppState;

/// GET /demandes/:id
///
/// Application with its branch, applicant and contribution.
pub async fn get_application(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<LoanApplicationDetailedView>, AppError> {
    let Path(id) = path?;

    let details = state
        .query_service
        .get_application(ApplicationId(id))
        .await?;

    Ok(Json(details.into()))
}

/// GET /demandes
///
/// Filtered, paginated list ordered by application id.
pub async fn list_applications(
    State(state): State<AppState>,
    query: Result<Query<LoanApplicationParams>, QueryRejection>,
) -> Result<Json<Vec<LoanApplicationView>>, AppError> {
    let Query(params) = query?;
    let (filter, page) = params.into_query()?;

    let applications = state.query_service.list_applications(&filter, page).await?;

    Ok(Json(applications.into_iter().map(Into::into).collect()))
}
