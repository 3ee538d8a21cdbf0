mod auth;
mod error;
mod extractors;
mod samples;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use herbauth_classifier::{AdulterationPolicy, ClassifierConfig};
use herbauth_common::types::ServiceInfo;
use herbauth_config::{init_tracing, AppConfig};
use herbauth_store::samples::mem_repository::MemorySampleRepository;
use herbauth_store::users::seed_repository::SeedCredentials;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub samples: MemorySampleRepository,
    pub credentials: SeedCredentials,
    pub classifier: ClassifierConfig,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("herbauth-api"))
}

async fn metrics() -> impl IntoResponse {
    let body = "\
# HELP herbauth_up Service up indicator\n\
# TYPE herbauth_up gauge\n\
herbauth_up 1\n\
# HELP herbauth_info Service info\n\
# TYPE herbauth_info gauge\n\
herbauth_info{service=\"herbauth-api\",version=\"0.1.0\"} 1\n";

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl-c");
    tracing::info!("shutting down");
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(samples::router())
        .merge(auth::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    let policy: AdulterationPolicy = config
        .adulteration_policy
        .parse()
        .expect("invalid ADULTERATION_POLICY");
    tracing::info!(service = "herbauth-api", policy = policy.as_str(), "starting");

    let state = AppState {
        samples: MemorySampleRepository::new(),
        credentials: SeedCredentials::new(),
        classifier: ClassifierConfig::with_policy(policy),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}
