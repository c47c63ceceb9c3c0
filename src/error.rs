use crate::llm::ModelError;
use axum::http::StatusCode;

/// 接口层错误
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("malformed submission: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// 所有错误统一为通用服务端错误
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Model(_) | AppError::MalformedInput(_) | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
