use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub type AResult<T> = core::result::Result<T, AError>;

#[derive(Debug)]
pub enum AError {
    DuplicateUser,
    InvalidCredentials,
    TokenInvalid,
    TokenExpired,
    NotFound,
    Internal(anyhow::Error),
}

impl AError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AError::DuplicateUser => (
                StatusCode::CONFLICT,
                String::from("User already exists"),
            ),
            AError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                String::from("Invalid credentials"),
            ),
            AError::TokenInvalid => (
                StatusCode::UNAUTHORIZED,
                String::from("Invalid authentication token"),
            ),
            AError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                String::from("Authentication token expired"),
            ),
            AError::NotFound => (StatusCode::NOT_FOUND, String::from("Task not found")),
            AError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {:?}", err),
            ),
        }
    }
}

impl IntoResponse for AError {
    fn into_response(self) -> axum::response::Response {
        println!("  ->> ERROR {:?}", self);
        let (status_code, message) = self.status_and_message();
        (
            status_code,
            Json(json!({
                "statusCode": status_code.as_u16(),
                "message": message
            })),
        )
            .into_response()
    }
}

impl<E> From<E> for AError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AError::DuplicateUser.status_and_message().0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AError::InvalidCredentials.status_and_message().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AError::TokenInvalid.status_and_message().0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AError::TokenExpired.status_and_message().0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AError::NotFound.status_and_message().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AError::Internal(anyhow::Error::msg("boom"))
                .status_and_message()
                .0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_denied_access_is_reported_as_not_found() {
        // Same status and message as a genuinely missing record.
        let (status_code, message) = AError::NotFound.status_and_message();
        assert_eq!(status_code, StatusCode::NOT_FOUND);
        assert_eq!(message, "Task not found");
    }
}
