pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/classify", post(handlers::classify_sample))
        .route("/upload", post(handlers::upload_batch))
        .route("/history", get(handlers::list_history))
}
