// tests/common/app_helper.rs

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use std::sync::Arc;

use account_backend::api::create_app_router;
use account_backend::api::handlers::deletion_handler::AppState;
use account_backend::config::AppConfig;
use account_backend::service::deletion_service::UserDeletionService;

use crate::common;
use crate::common::mock_providers::{MockIdentityProvider, MockProfileStore};

/// モックプロバイダー付きアプリのセットアップ
pub fn setup_deletion_app(
    identity_provider: MockIdentityProvider,
    profile_store: MockProfileStore,
) -> Router {
    common::init_test_env();

    let app_config = AppConfig::for_testing();

    let deletion_service = Arc::new(UserDeletionService::new(
        Arc::new(identity_provider),
        Arc::new(profile_store),
    ));

    create_app_router(AppState { deletion_service }, &app_config)
}

/// 削除リクエストを作成
pub fn delete_user_request(body: String) -> Request<Body> {
    Request::builder()
        .uri("/deleteUserByEmail")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
