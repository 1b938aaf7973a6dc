//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活 + 存储连通性 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "service": "employee-server",
//!   "version": "0.1.0",
//!   "store": { "backend": "surrealdb", "status": "ok" }
//! }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    service: &'static str,
    version: &'static str,
    store: StoreCheck,
}

/// 存储检查结果
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    backend: &'static str,
    /// 状态 (ok | error)
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// 存储不可达时返回 503
async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.store();
    let check = match store.ping().await {
        Ok(()) => StoreCheck {
            backend: store.backend(),
            status: "ok",
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            StoreCheck {
                backend: store.backend(),
                status: "error",
                error: Some(e.to_string()),
            }
        }
    };

    let (code, status) = if check.error.is_none() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            store: check,
        }),
    )
}
