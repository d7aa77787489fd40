// src/domain/profile_document.rs

use serde::{Deserialize, Serialize};

/// ドキュメントストア上のプロファイルドキュメントへの参照
///
/// 同じemailを持つドキュメントは複数存在しうる(一意性はストア側でも
/// このサービス側でも強制されない)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocumentRef {
    /// プロバイダーが割り当てたドキュメントのリソースパス
    pub path: String,
}

impl ProfileDocumentRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
