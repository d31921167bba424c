use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::{Task, TaskFC};
use crate::auth::{Claims, TaskScope};
use crate::{AResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create))
        .route("/:task_id", get(find))
        .route("/:task_id", put(update))
        .route("/:task_id", delete(delete_task))
}

async fn create(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<TaskFC>,
) -> AResult<(StatusCode, Json<Value>)> {
    let task_id = Task::ddb_create(&state, payload, &claims.sub).await?;
    return Ok((
        StatusCode::OK,
        Json(json!({ "message": "Task created successfully", "task_id": task_id })),
    ));
}

async fn find(
    State(state): State<AppState>,
    claims: Claims,
    Path(task_id): Path<String>,
) -> AResult<(StatusCode, Json<Value>)> {
    let scope = TaskScope::for_caller(&claims);
    let task = Task::ddb_find(&state, &task_id, &scope).await?;
    return Ok((StatusCode::OK, Json(json!(task))));
}

async fn update(
    State(state): State<AppState>,
    claims: Claims,
    Path(task_id): Path<String>,
    Json(payload): Json<TaskFC>,
) -> AResult<(StatusCode, Json<Value>)> {
    let scope = TaskScope::for_caller(&claims);
    Task::ddb_update(&state, &task_id, payload, &scope).await?;
    return Ok((
        StatusCode::OK,
        Json(json!({ "message": "Task updated successfully" })),
    ));
}

async fn delete_task(
    State(state): State<AppState>,
    claims: Claims,
    Path(task_id): Path<String>,
) -> AResult<(StatusCode, Json<Value>)> {
    let scope = TaskScope::for_caller(&claims);
    Task::ddb_delete(&state, &task_id, &scope).await?;
    return Ok((
        StatusCode::OK,
        Json(json!({ "message": "Task deleted successfully" })),
    ));
}
