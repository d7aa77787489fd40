// src/api/handlers/deletion_handler.rs

use crate::api::dto::deletion_dto::{DeleteUserRequest, DeleteUserResponse};
use crate::error::AppResult;
use crate::extractors::json::ValidatedJson;
use crate::service::deletion_service::UserDeletionService;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

/// 削除ハンドラーで使用するアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub deletion_service: Arc<UserDeletionService>,
}

/// メールアドレス指定のユーザー削除
///
/// ボディの検証はValidatedJsonが済ませているため、ここに到達した
/// リクエストはそのままサービスに委譲できる。
pub async fn delete_user_by_email_handler(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DeleteUserRequest>,
) -> AppResult<Json<DeleteUserResponse>> {
    info!(email = %request.email, "User deletion requested");

    let response = app_state
        .deletion_service
        .delete_user_by_email(&request.email)
        .await?;

    Ok(Json(response))
}

/// ユーザー削除ルーターを作成
pub fn deletion_router(app_state: AppState) -> Router {
    Router::new()
        .route("/deleteUserByEmail", post(delete_user_by_email_handler))
        .with_state(app_state)
}
