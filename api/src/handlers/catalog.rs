//! Catalog handlers
//!
//! Get-by-key and paginated listing for the entity families without
//! filters. One generic pair serves every route; the route picks the
//! domain type `T` and its view `V`.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;

use super::params::PageParams;
use crate::domain::entities::Record;
use crate::domain::ports::{Repositories, RepositoryFor};
use crate::error::AppError;
use crate::AppState;

/// GET /{family}/:id
pub async fn get_entity<T, V>(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<V>, AppError>
where
    T: Record,
    V: From<T> + Serialize + Send + 'static,
    Repositories: RepositoryFor<T>,
{
    let Path(id) = path?;

    let entity: T = state.query_service.get(T::Id::from(id)).await?;

    Ok(Json(entity.into()))
}

/// GET /{family}
pub async fn list_entities<T, V>(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<V>>, AppError>
where
    T: Record,
    V: From<T> + Serialize + Send + 'static,
    Repositories: RepositoryFor<T>,
{
    let Query(params) = query?;

    let entities: Vec<T> = state.query_service.list(params.page()?).await?;

    Ok(Json(entities.into_iter().map(Into::into).collect()))
}
