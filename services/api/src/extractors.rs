use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// `Json` with the rejection remapped: every malformed body (bad syntax,
/// wrong content type, missing fields) answers 400 with an `{error}` body
/// instead of axum's default 415/422 split.
pub struct ApiJson<T>(pub T);

#[derive(Debug)]
pub struct ApiJsonRejection(String);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0 });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| ApiJsonRejection(err.body_text()))?;
        Ok(ApiJson(value))
    }
}
