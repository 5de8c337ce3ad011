//! REST façade over the todo-item service.
//!
//! Handlers only extract arguments, take the lock and map `TodoItemError` onto
//! a status code: 404 for a missing item, 507 once ids run out. Ids that do not
//! parse as `u32` are rejected by the `Path` extractor with 400 before the
//! service is touched.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use todo_core::{CreateTodoItem, TodoItem, TodoItemError, UpdateTodoItem};

use crate::bootstrap::SharedService;

pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/todo-item", get(find_all).post(create))
        .route(
            "/todo-item/{id}",
            get(find_by_id).put(update).delete(remove),
        )
        .with_state(service)
}

/// Body returned for failed lookups.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: &'static str,
}

#[derive(Debug)]
pub struct ApiError(TodoItemError);

impl From<TodoItemError> for ApiError {
    fn from(err: TodoItemError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TodoItemError::NotFound { .. } => StatusCode::NOT_FOUND,
            TodoItemError::IdsExhausted => StatusCode::INSUFFICIENT_STORAGE,
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.0.to_string(),
            error: status.canonical_reason().unwrap_or("Error"),
        };
        (status, Json(body)).into_response()
    }
}

async fn find_all(State(service): State<SharedService>) -> Json<Vec<TodoItem>> {
    let service = service.read().await;
    Json(service.find_all().to_vec())
}

async fn find_by_id(
    State(service): State<SharedService>,
    Path(id): Path<u32>,
) -> Result<Json<TodoItem>, ApiError> {
    let service = service.read().await;
    let item = service
        .find_by_id(id)
        .cloned()
        .ok_or(TodoItemError::NotFound { id })?;
    Ok(Json(item))
}

async fn create(
    State(service): State<SharedService>,
    Json(input): Json<CreateTodoItem>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let item = service.write().await.create(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update(
    State(service): State<SharedService>,
    Path(id): Path<u32>,
    Json(patch): Json<UpdateTodoItem>,
) -> Result<Json<TodoItem>, ApiError> {
    let item = service.write().await.update(id, patch)?;
    Ok(Json(item))
}

async fn remove(
    State(service): State<SharedService>,
    Path(id): Path<u32>,
) -> Result<Json<TodoItem>, ApiError> {
    let item = service.write().await.delete(id)?;
    Ok(Json(item))
}
