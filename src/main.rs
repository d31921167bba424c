use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use axum::http::StatusCode;
use axum::{routing::get, Router};
use lambda_http::{run, tracing, Error};
use std::env::set_var;

pub mod auth;
pub mod error;
pub mod task;
pub mod user;

pub use error::{AError, AResult};

pub const DEFAULT_TABLE_NAME: &str = "task_management";

#[derive(Clone)]
pub struct AppState {
    pub dynamodb_client: Client,
    pub table_name: String,
    pub auth: auth::AuthConfig,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Error> {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let db_client = Client::new(&config);

    // If you use API Gateway stages, the Rust Runtime will include the stage name
    // as part of the path that your application receives.
    // Setting the following environment variable, you can remove the stage from the path.
    // This variable only applies to API Gateway stages,
    // you can remove it if you don't use them.
    // i.e with: `GET /test-stage/todo/id/123` without: `GET /todo/id/123`
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let state = AppState {
        dynamodb_client: db_client,
        table_name: std::env::var("TABLE_NAME")
            .unwrap_or_else(|_| String::from(DEFAULT_TABLE_NAME)),
        auth: auth::AuthConfig::from_env()?,
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(user::router())
        .nest("/tasks", task::router())
        .with_state(state);

    run(app).await
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}
