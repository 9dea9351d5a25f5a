use super::error::{ApiError, ApiResult};
use super::json::JsonBody;
use super::AppState;
use crate::api::TodoApi;
use crate::commands::{ListInput, TodoInput, TodoPatch};
use crate::error::{Result, TodozError};
use crate::model::{Deleted, ListSummary, Todo, TodoList};
use crate::store::DocumentStore;
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

/// Run one facade call on the blocking pool. File I/O happens inside, so
/// two requests may interleave between their load and their flush.
async fn run_blocking<S, T, F>(state: &AppState<S>, op: F) -> ApiResult<T>
where
    S: DocumentStore + 'static,
    T: Send + 'static,
    F: FnOnce(&TodoApi<S>) -> Result<T> + Send + 'static,
{
    let api = Arc::clone(&state.api);
    tokio::task::spawn_blocking(move || op(&api))
        .await
        .map_err(|e| ApiError::from(TodozError::Internal(format!("handler task failed: {}", e))))?
        .map_err(ApiError::from)
}

pub async fn list_lists<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<ListSummary>>> {
    run_blocking(&state, |api| api.list_lists()).await.map(Json)
}

pub async fn create_list<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    JsonBody(input): JsonBody<ListInput>,
) -> ApiResult<Json<TodoList>> {
    run_blocking(&state, move |api| api.create_list(input))
        .await
        .map(Json)
}

pub async fn get_list<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoList>> {
    run_blocking(&state, move |api| api.get_list(&id))
        .await
        .map(Json)
}

pub async fn rename_list<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ListInput>,
) -> ApiResult<Json<TodoList>> {
    run_blocking(&state, move |api| api.rename_list(&id, input))
        .await
        .map(Json)
}

pub async fn delete_list<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Deleted>> {
    run_blocking(&state, move |api| api.delete_list(&id))
        .await
        .map(Json)
}

pub async fn add_todo<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(list_id): Path<String>,
    JsonBody(input): JsonBody<TodoInput>,
) -> ApiResult<Json<Todo>> {
    run_blocking(&state, move |api| api.add_todo(&list_id, input))
        .await
        .map(Json)
}

pub async fn update_todo<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path((list_id, todo_id)): Path<(String, String)>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> ApiResult<Json<Todo>> {
    run_blocking(&state, move |api| api.update_todo(&list_id, &todo_id, patch))
        .await
        .map(Json)
}

pub async fn delete_todo<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> ApiResult<Json<Deleted>> {
    run_blocking(&state, move |api| api.delete_todo(&list_id, &todo_id))
        .await
        .map(Json)
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
