// src/api/dto/deletion_dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// deleteUserByEmail のリクエスト
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteUserRequest {
    #[validate(length(min = 1, message = "A valid email must be provided."))]
    pub email: String,
}

/// deleteUserByEmail のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
}
