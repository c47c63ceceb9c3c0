pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::ExtractionPrompt;

use async_trait::async_trait;

/// 调用外部模型时的错误
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("model returned no text")]
    EmptyResponse,
}

/// 发票识别模型: 输入图片与提示词，返回模型原始文本
#[async_trait]
pub trait InvoiceModel: Send + Sync {
    async fn generate(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ModelError>;
}
