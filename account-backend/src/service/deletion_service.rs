// src/service/deletion_service.rs

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::dto::deletion_dto::DeleteUserResponse;
use crate::error::{AppError, AppResult};
use crate::infrastructure::identity::IdentityProvider;
use crate::infrastructure::profile_store::ProfileStore;

/// ユーザー削除サービス
///
/// IDプロバイダーのアカウント削除とドキュメントストアのプロファイル
/// 削除を1リクエスト分の直列処理として実行する。2つのストアをまたぐ
/// トランザクションは存在しないため、アカウント削除後にドキュメント
/// 削除が失敗した場合はアカウントだけが消えた状態が残る(同じemailで
/// 再実行するとnot-foundになる)。リトライは行わない。
pub struct UserDeletionService {
    identity_provider: Arc<dyn IdentityProvider>,
    profile_store: Arc<dyn ProfileStore>,
}

impl UserDeletionService {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        profile_store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            identity_provider,
            profile_store,
        }
    }

    /// メールアドレスで指定されたユーザーを削除する
    pub async fn delete_user_by_email(&self, email: &str) -> AppResult<DeleteUserResponse> {
        // アカウント取得
        let account = self
            .identity_provider
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "User deletion requested for unknown email");
                AppError::NotFound(format!("User with email {} not found.", email))
            })?;

        // アカウント削除(これ以降はロールバック不可)
        self.identity_provider.delete_account(&account.uid).await?;

        // emailが一致するプロファイルドキュメントを単一バッチで削除
        let refs = self.profile_store.find_refs_by_email(email).await?;
        self.profile_store.delete_batch(&refs).await?;

        info!(
            email = %email,
            uid = %account.uid,
            profile_documents_deleted = refs.len(),
            "User deleted successfully"
        );

        Ok(DeleteUserResponse {
            success: true,
            message: format!("User {} deleted successfully.", email),
        })
    }
}
