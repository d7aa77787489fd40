// src/logging/mod.rs

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{error, info, warn};
use uuid::Uuid;

/// 1リクエスト分のロギングコンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub path: String,
    pub method: String,
}

/// リクエストIDを採番してRequestContextをextensionsに格納する
///
/// ロギングミドルウェアより外側に配置すること。
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext {
        request_id: Uuid::new_v4().to_string(),
        path: req.uri().path().to_string(),
        method: req.method().to_string(),
    };

    req.extensions_mut().insert(context);
    next.run(req).await
}

/// 開始・完了イベントを記録するロギングミドルウェア
///
/// 完了イベントのレベルはステータスに応じて4xxでWARN、5xxでERRORに
/// 昇格する。
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let Some(context) = req.extensions().get::<RequestContext>().cloned() else {
        return next.run(req).await;
    };

    info!(
        request_id = %context.request_id,
        method = %context.method,
        path = %context.path,
        "Request started"
    );

    let start = Instant::now();
    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status >= 500 {
        error!(
            request_id = %context.request_id,
            method = %context.method,
            path = %context.path,
            status,
            duration_ms,
            "Request completed"
        );
    } else if status >= 400 {
        warn!(
            request_id = %context.request_id,
            method = %context.method,
            path = %context.path,
            status,
            duration_ms,
            "Request completed"
        );
    } else {
        info!(
            request_id = %context.request_id,
            method = %context.method,
            path = %context.path,
            status,
            duration_ms,
            "Request completed"
        );
    }

    response
}
