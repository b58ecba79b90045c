use serde::{Deserialize, Serialize};

use crate::generator::GenerateError;

/// 生成请求的默认取值
pub const DEFAULT_CONTENT_TYPE: &str = "Blog Post";
pub const DEFAULT_PLATFORM: &str = "Blog";
pub const DEFAULT_TONE: &str = "Professional";

/// 每次请求希望模型给出的创意数量
pub const IDEAS_PER_REQUEST: usize = 5;

/// 系统提示词
pub const SYSTEM_PROMPT: &str = "You are a creative content strategist who writes concise, actionable content ideas.";

/// 表单提交的生成请求
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GenerationRequest {
    /// 主题或细分领域
    #[serde(default)]
    pub niche: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub tone: String,
}

impl GenerationRequest {
    pub fn new(niche: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            ..Default::default()
        }
    }

    /// 主题不能为空
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.niche.trim().is_empty() {
            return Err(GenerateError::EmptyNiche);
        }
        Ok(())
    }

    /// 空字段替换为默认值，其余字段去除首尾空白
    pub fn normalized(&self) -> Self {
        fn or_default(value: &str, default: &str) -> String {
            let value = value.trim();
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        }

        Self {
            niche: self.niche.trim().to_string(),
            content_type: or_default(&self.content_type, DEFAULT_CONTENT_TYPE),
            platform: or_default(&self.platform, DEFAULT_PLATFORM),
            tone: or_default(&self.tone, DEFAULT_TONE),
        }
    }
}

/// 构建发送给模型的用户提示词
///
/// 要求模型以 `1. 标题` + 描述行的编号列表格式返回，和解析器的输入约定一致。
pub fn build_prompt(request: &GenerationRequest) -> String {
    let request = request.normalized();
    format!(
        r#"Generate {count} creative and unique content ideas for {platform} about {niche}.

Content Type: {content_type}
Tone: {tone}

For each idea, provide:
1. A catchy, specific title
2. A brief description of what the content would cover

Format each idea as:
1. [Title]
[Description]

2. [Title]
[Description]

...and so on.

Make the ideas actionable, engaging, and tailored to the platform and tone."#,
        count = IDEAS_PER_REQUEST,
        platform = request.platform,
        niche = request.niche,
        content_type = request.content_type,
        tone = request.tone,
    )
}
