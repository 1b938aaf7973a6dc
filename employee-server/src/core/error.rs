use thiserror::Error;

use crate::db::StoreError;

/// 启动 / 运行阶段的服务器错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("存储初始化失败: {0}")]
    Store(#[from] StoreError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 服务器启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
