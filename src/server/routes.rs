//! HTTP路由handlers

use std::path::Path;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::generator::{GenerationRequest, GenerationResponse};
use crate::parser::parse_ideas;
use crate::server::AppState;
use crate::server::models::{HealthResponse, HttpServerError, IdeasResponse, ParseRequest};

/// 创建所有路由
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/generate", post(generate_handler))
        .route("/api/ideas", post(ideas_handler))
        .route("/api/parse", post(parse_handler))
        .route("/health", get(health_handler));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.with_state(state)
}

/// POST /generate - 返回模型原始文本，失败同样以200返回信封
async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerationRequest>,
) -> Json<GenerationResponse> {
    Json(state.generator.respond(&req).await)
}

/// POST /api/ideas - 生成并解析为创意卡片数据
async fn ideas_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerationRequest>,
) -> Result<Json<IdeasResponse>, HttpServerError> {
    let text = state.generator.generate(&req).await?;
    Ok(Json(IdeasResponse::new(parse_ideas(&text))))
}

/// POST /api/parse - 仅解析调用方提供的文本
async fn parse_handler(Json(req): Json<ParseRequest>) -> Json<IdeasResponse> {
    Json(IdeasResponse::new(parse_ideas(&req.text)))
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
