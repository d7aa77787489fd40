// src/infrastructure/mod.rs
pub mod identity;
pub mod profile_store;

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Turn a non-success provider response into an internal error,
/// keeping the provider's own message when the body carries one.
pub(crate) async fn provider_error(context: &str, response: reqwest::Response) -> AppError {
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .map_or_else(
            || format!("{} request failed with status {}", context, status),
            |error| error.message,
        );
    AppError::Internal(message)
}
