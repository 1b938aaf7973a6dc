//! Employee Server - 员工档案管理服务
//!
//! # 架构概述
//!
//! 同一个员工实体对外提供两套接口：
//!
//! - **表单页面** (`pages`): 服务端渲染的新建 / 列表 / 编辑页面
//! - **REST API** (`api`): `/api/empleados` 下的 JSON 接口
//! - **存储** (`db`): 嵌入式 SurrealDB 或内存存储
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # REST 路由和处理器
//! ├── pages/         # 表单页面
//! ├── db/            # 存储层
//! └── utils/         # 日志、提取器
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pages;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState, build_app};
pub use db::{EmployeeStore, MemoryStore, StoreError, SurrealStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env、读取配置、初始化日志
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ____                 __
  / __/_ _  ___  / /__  __ _____ ___
 / _//  ' \/ _ \/ / _ \/ // / -_) -_)
/___/_/_/_/ .__/_/\___/\_, /\__/\__/
         /_/          /___/
    "#
    );
}
