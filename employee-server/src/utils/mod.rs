//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::error)
//! - [`JsonBody`] - 统一错误格式的 JSON 提取器
//! - 日志初始化

pub mod extract;
pub mod logger;

pub use extract::JsonBody;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
