//! Employee lookup
//!
//! [`load_employee`] runs as a route layer in front of every `/{id}` handler;
//! handlers receive the record through the [`FoundEmployee`] extractor.

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use shared::models::{Employee, EmployeeId};

use crate::core::ServerState;
use crate::utils::AppError;

/// Employee resolved by [`load_employee`] for the current request
#[derive(Debug, Clone)]
pub struct FoundEmployee(pub Employee);

/// 按路径 ID 查询员工并注入请求扩展
///
/// | 情况 | 响应 |
/// |------|------|
/// | 记录不存在 | 404 Employee not found |
/// | ID 格式错误 / 存储读取失败 | 500 |
/// | 找到记录 | 注入 [`FoundEmployee`]，继续执行 handler |
pub async fn load_employee(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id: EmployeeId = raw_id.parse().map_err(|e| {
        AppError::lookup_failed(format!("Invalid employee id '{}': {}", raw_id, e))
            .with_detail("id", raw_id.clone())
    })?;

    let employee = state
        .store()
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::lookup_failed(e.to_string()).with_detail("id", raw_id.clone()))?
        .ok_or_else(AppError::employee_not_found)?;

    req.extensions_mut().insert(FoundEmployee(employee));
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for FoundEmployee
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<FoundEmployee>()
            .ok_or_else(|| AppError::internal("Employee lookup did not run for this route"))
    }
}
