//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工 REST 接口
//! - [`docs`] - OpenAPI 文档

pub mod docs;
pub mod employees;
pub mod health;
