//! HTTP服务 - 为页面提供生成接口

use std::net::SocketAddr;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{body::Body, http::Request, middleware, middleware::Next, response::Response};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::generator::IdeaGenerator;

pub mod models;
mod routes;

pub use routes::create_router;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub generator: IdeaGenerator,
}

impl AppState {
    pub fn new(generator: IdeaGenerator) -> Self {
        Self { generator }
    }
}

/// 启动HTTP服务器，收到 Ctrl+C 后优雅退出
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = create_router(state, config.static_dir.as_deref())
        .layer(middleware::from_fn(request_logger))
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context(format!("Invalid listen address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    println!("🚀 服务已启动: http://{}", addr);
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl+C: {}", e);
            }
            info!("Starting graceful shutdown...");
        })
        .await
        .context("HTTP server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// 请求日志中间件
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;
    if status.is_success() {
        info!(%method, %uri, status = status.as_u16(), duration_ms, "Request completed");
    } else {
        warn!(%method, %uri, status = status.as_u16(), duration_ms, "Request failed");
    }

    response
}
