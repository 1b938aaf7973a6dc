use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::{Config, Result};
use crate::db::{self, EmployeeStore};

/// 服务器状态 - 持有配置和存储句柄
///
/// 使用 Arc 实现浅拷贝，每个请求通过 axum `State` 拿到同一个存储句柄。
/// 存储在启动时创建一次，关闭时通过 [`ServerState::shutdown`] 释放。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn EmployeeStore> | 员工存储 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工存储 (SurrealDB 或内存)
    pub store: Arc<dyn EmployeeStore>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 测试中直接注入存储，通常使用 [`initialize()`](Self::initialize) 代替
    pub fn new(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        Self { config, store }
    }

    /// 初始化服务器状态: 按配置打开存储并检查连通性
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store = db::connect(config).await?;
        Ok(Self::new(config.clone(), store))
    }

    /// 获取存储句柄
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// 当前本地日期，入职日期校验的基准
    pub fn today(&self) -> NaiveDate {
        shared::util::today()
    }

    /// 释放存储资源
    pub async fn shutdown(&self) {
        match self.store.close().await {
            Ok(()) => tracing::info!(backend = self.store.backend(), "Employee store released"),
            Err(e) => tracing::error!(error = %e, "Failed to close employee store"),
        }
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("store", &self.store.backend())
            .finish()
    }
}
