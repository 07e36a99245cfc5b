use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CrmRecord, RecordId};
use super::repository::{RecordRepository, RepositoryError, SalesNotifier};
use super::service::{IntakeError, IntakeService};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecentQuery {
    pub(crate) limit: Option<usize>,
}

/// Router exposing create, list, fetch, and patch endpoints for one record kind.
pub fn record_router<T, R, N>(service: Arc<IntakeService<T, R, N>>) -> Router
where
    T: CrmRecord,
    R: RecordRepository<T> + 'static,
    N: SalesNotifier + 'static,
{
    let collection = T::KIND.collection_path();
    let member = format!("{collection}/:record_id");

    Router::new()
        .route(
            collection,
            get(list_handler::<T, R, N>).post(submit_handler::<T, R, N>),
        )
        .route(
            &member,
            get(fetch_handler::<T, R, N>).patch(update_handler::<T, R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<T, R, N>(
    State(service): State<Arc<IntakeService<T, R, N>>>,
    payload: Result<axum::Json<T::Submission>, JsonRejection>,
) -> Response
where
    T: CrmRecord,
    R: RecordRepository<T> + 'static,
    N: SalesNotifier + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(body) => body,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<T, R, N>(
    State(service): State<Arc<IntakeService<T, R, N>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    T: CrmRecord,
    R: RecordRepository<T> + 'static,
    N: SalesNotifier + 'static,
{
    match service.recent(query.limit) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn fetch_handler<T, R, N>(
    State(service): State<Arc<IntakeService<T, R, N>>>,
    Path(record_id): Path<String>,
) -> Response
where
    T: CrmRecord,
    R: RecordRepository<T> + 'static,
    N: SalesNotifier + 'static,
{
    match service.get(&RecordId(record_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<T, R, N>(
    State(service): State<Arc<IntakeService<T, R, N>>>,
    Path(record_id): Path<String>,
    payload: Result<axum::Json<T::Patch>, JsonRejection>,
) -> Response
where
    T: CrmRecord,
    R: RecordRepository<T> + 'static,
    N: SalesNotifier + 'static,
{
    let axum::Json(patch) = match payload {
        Ok(body) => body,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };
    match service.update(&RecordId(record_id), patch) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: IntakeError) -> Response {
    let status = match &err {
        IntakeError::Violation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IntakeError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        IntakeError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        IntakeError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
