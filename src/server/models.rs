//! HTTP API数据模型

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::generator::GenerateError;
use crate::types::IdeaRecord;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// 解析后的创意列表
#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub success: bool,
    pub count: usize,
    pub ideas: Vec<IdeaRecord>,
}

impl IdeasResponse {
    pub fn new(ideas: Vec<IdeaRecord>) -> Self {
        Self {
            success: true,
            count: ideas.len(),
            ideas,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// HTTP错误
#[derive(Debug, thiserror::Error)]
pub enum HttpServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generation service error: {0}")]
    Upstream(String),
}

impl From<GenerateError> for HttpServerError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::EmptyNiche => {
                Self::InvalidRequest(GenerateError::EmptyNiche.to_string())
            }
            GenerateError::Backend(e) => Self::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
        };

        let body = serde_json::json!({
            "success": false,
            "error": message,
            "error_code": error_code,
        });

        (status, Json(body)).into_response()
    }
}
