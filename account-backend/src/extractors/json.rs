// src/extractors/json.rs

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

use crate::error::AppError;

/// 検証付きJSON Extractor
///
/// ボディの欠落・JSON構文エラー・フィールドの型不一致はaxumの
/// rejectionとして、空文字などの値の検証失敗はvalidatorの結果として、
/// どちらもinvalid-argumentに変換する。ハンドラーに渡った時点で
/// ペイロードは検証済み。
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            warn!(error = %rejection, "Malformed JSON payload");
            AppError::InvalidArgument("A valid email must be provided.".to_string())
        })?;

        value.validate().map_err(|validation_errors| {
            warn!("Payload validation failed: {}", validation_errors);
            AppError::InvalidArgument(first_validation_message(&validation_errors))
        })?;

        Ok(ValidatedJson(value))
    }
}

// フィールド単位のエラーメッセージを1件取り出す
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| "A valid email must be provided.".to_string())
}
