// src/domain/identity_account.rs

use serde::{Deserialize, Serialize};

/// 外部IDプロバイダーが管理するアカウントレコード
///
/// このサービスからは検索と削除のみを行い、作成・更新は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAccount {
    /// プロバイダーが割り当てた一意な識別子
    pub uid: String,
    pub email: String,
}

impl IdentityAccount {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }
}
