use crate::error::AppError;
use crate::models::InvoiceSubmission;
use crate::service::{ExtractionService, SubmissionService};
use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 提交成功响应体
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub invoice_id: i64,
}

/// 失败响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

fn error_response(err: AppError) -> Response {
    tracing::error!("✗ 请求失败: {}", err);
    let response = ErrorResponse {
        status: "error",
        message: err.to_string(),
    };
    (err.status_code(), Json(response)).into_response()
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 上传发票图片，返回模型原始输出 (纯文本)
pub async fn upload(
    State(service): State<Arc<ExtractionService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    match service.extract(&body, content_type).await {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => error_response(e.into()),
    }
}

/// 提交审核后的发票数据
pub async fn submit(State(service): State<Arc<SubmissionService>>, body: Bytes) -> Response {
    let submission = match InvoiceSubmission::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => return error_response(e.into()),
    };

    let mut scope = service.open_scope();
    let result = service.submit(&mut scope, &submission).await;
    if let Err(e) = scope.close().await {
        tracing::warn!("关闭数据库连接失败: {}", e);
    }

    match result {
        Ok(invoice_id) => {
            let response = SubmitResponse {
                status: "success",
                invoice_id,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e.into()),
    }
}
