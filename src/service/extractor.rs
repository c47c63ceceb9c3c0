use crate::llm::{ExtractionPrompt, InvoiceModel, ModelError};
use std::sync::Arc;

/// 未声明图片类型时使用的 MIME
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// 识别服务: 图片原样转发给模型，返回模型原始文本
pub struct ExtractionService {
    model: Arc<dyn InvoiceModel>,
    prompt: ExtractionPrompt,
}

impl ExtractionService {
    pub fn new(model: Arc<dyn InvoiceModel>, prompt: ExtractionPrompt) -> Self {
        Self { model, prompt }
    }

    /// 不解析、不校验模型输出
    pub async fn extract(
        &self,
        image: &[u8],
        content_type: Option<&str>,
    ) -> Result<String, ModelError> {
        let mime_type = image_mime(content_type);
        let start = std::time::Instant::now();

        let text = self
            .model
            .generate(image, mime_type, self.prompt.as_str())
            .await?;

        tracing::info!(
            "模型识别完成, 图片 {} 字节, 耗时: {:?}",
            image.len(),
            start.elapsed()
        );
        tracing::info!("{}", text);
        Ok(text)
    }
}

/// 请求头是 image/* 时沿用，否则按 PNG 处理
fn image_mime(content_type: Option<&str>) -> &str {
    match content_type.map(|ct| ct.split(';').next().unwrap_or(ct).trim()) {
        Some(ct) if ct.starts_with("image/") => ct,
        _ => DEFAULT_IMAGE_MIME,
    }
}
