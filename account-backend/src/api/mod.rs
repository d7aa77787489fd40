// src/api/mod.rs

pub mod dto;
pub mod handlers;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::AppConfig;
use crate::logging;
use handlers::deletion_handler::{deletion_router, AppState};
use handlers::health_handler::health_router;

/// アプリケーション全体のルーターを作成
pub fn create_app_router(app_state: AppState, config: &AppConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(deletion_router(app_state))
        .merge(health_router())
        .layer(axum::middleware::from_fn(logging::logging_middleware))
        .layer(axum::middleware::from_fn(logging::inject_request_context))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}
