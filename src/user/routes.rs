use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::{LoginFC, User, UserFC};
use crate::{AResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserFC>,
) -> AResult<(StatusCode, Json<Value>)> {
    User::ddb_register(&state, payload).await?;
    return Ok((
        StatusCode::OK,
        Json(json!({ "message": "User successfully registered" })),
    ));
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginFC>,
) -> AResult<(StatusCode, Json<Value>)> {
    let user = User::verify_credentials(&state, payload).await?;
    let access_token = state.auth.issue_token(&user.sk, user.role)?;
    return Ok((StatusCode::OK, Json(json!({ "access_token": access_token }))));
}
