//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::{Router, middleware};
use http::{HeaderValue, Request};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::{Config, Result, ServerState};

/// 请求 ID 生成器 (UUID v4)
#[derive(Clone, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP 请求日志中间件
async fn log_request(
    request: Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// 注册所有路由 (无全局中间件，未绑定状态)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::<ServerState>::new()
        // 表单页面
        .merge(crate::pages::router())
        // REST API
        .merge(crate::api::employees::router(state))
        .merge(crate::api::docs::router())
        .merge(crate::api::health::router())
}

/// 构建完整应用: 路由 + 静态资源 + 状态 + Tower HTTP 中间件
///
/// HTTP 服务器和集成测试共用
pub fn build_app(state: ServerState) -> Router {
    let static_dir = state.config.static_dir.clone();

    build_router(&state)
        .nest_service("/public", ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        // 请求 ID: 先生成 (外层)，再回写到响应 (内层)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Employee server listening on http://{}", addr);

        let app = build_app(state.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        // 服务停止后释放存储句柄
        state.shutdown().await;
        tracing::info!("Employee server stopped");

        Ok(())
    }
}

/// Ctrl-C / SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}
