use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use herbauth_common::error::HerbauthError;

pub struct ApiError(pub HerbauthError);

impl From<HerbauthError> for ApiError {
    fn from(err: HerbauthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HerbauthError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            HerbauthError::Unauthorized => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            HerbauthError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
