use axum::extract::State;
use axum::Json;
use herbauth_common::error::HerbauthError;
use herbauth_store::users::repositories::CredentialVerifier;

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::AppState;

use super::requests::LoginRequest;
use super::responses::LoginResponse;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError(HerbauthError::Validation(
            "email and password are required".to_string(),
        )));
    }

    let account = state
        .credentials
        .verify(&email, &password)
        .await?
        .ok_or(HerbauthError::Unauthorized)?;

    tracing::info!(user = %account.email, role = account.role.as_str(), "login succeeded");

    Ok(Json(LoginResponse { user: account }))
}
