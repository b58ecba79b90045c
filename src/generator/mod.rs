//! 创意生成 - 组装提示词、调用模型并把结果交给解析器

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::llm::CompletionBackend;
use crate::parser::parse_ideas_with;
use crate::types::IdeaRecord;

pub mod prompt;

pub use prompt::{GenerationRequest, build_prompt};

/// 生成过程中的错误
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Please enter a topic or niche!")]
    EmptyNiche,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// 生成接口的响应信封
///
/// 成功时携带模型返回的原始文本，失败时携带错误信息。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn ok(ideas: String) -> Self {
        Self {
            success: true,
            ideas: Some(ideas),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            ideas: None,
            error: Some(error.into()),
        }
    }
}

/// 创意生成器
#[derive(Clone)]
pub struct IdeaGenerator {
    backend: Arc<dyn CompletionBackend>,
}

impl IdeaGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// 调用模型，返回未经解析的创意文本
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        request.validate()?;
        let request = request.normalized();

        let user_prompt = build_prompt(&request);
        tracing::info!(
            niche = %request.niche,
            platform = %request.platform,
            "generating content ideas"
        );

        let text = self
            .backend
            .complete(prompt::SYSTEM_PROMPT, &user_prompt)
            .await?;
        Ok(text)
    }

    /// 生成并包装为响应信封，任何错误都折叠为失败响应
    pub async fn respond(&self, request: &GenerationRequest) -> GenerationResponse {
        match self.generate(request).await {
            Ok(text) => GenerationResponse::ok(text),
            Err(e) => {
                tracing::warn!(error = %e, "idea generation failed");
                GenerationResponse::failed(e.to_string())
            }
        }
    }

    /// 生成并解析为创意记录
    pub async fn generate_ideas<R: Rng>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<Vec<IdeaRecord>, GenerateError> {
        let text = self.generate(request).await?;
        Ok(parse_ideas_with(&text, rng))
    }
}
