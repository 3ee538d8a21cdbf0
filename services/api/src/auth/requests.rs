use serde::Deserialize;

/// Fields are optional so a missing one reports the credential error
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
