use thiserror::Error;

#[derive(Debug, Error)]
pub enum HerbauthError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type HerbauthResult<T> = Result<T, HerbauthError>;
