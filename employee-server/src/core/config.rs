use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::ServerError;

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// 嵌入式 SurrealDB (RocksDB 持久化)
    RocksDb,
    /// 进程内存储 (测试 / 演示)
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rocksdb" | "surreal" | "surrealdb" => Ok(Self::RocksDb),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(ServerError::Config(format!(
                "unknown STORE_BACKEND '{}', expected 'rocksdb' or 'memory'",
                other
            ))),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | STORE_BACKEND | rocksdb | 存储后端 (rocksdb / memory) |
/// | DB_PATH | ./data/employees.db | 数据库目录 |
/// | DB_NAMESPACE | staff | SurrealDB namespace |
/// | DB_NAME | employees | SurrealDB database |
/// | STATIC_DIR | ./public | 静态资源目录 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// STORE_BACKEND=memory HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: IpAddr,
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub store_backend: StoreBackend,
    pub db_path: PathBuf,
    pub db_namespace: String,
    pub db_name: String,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的项使用默认值；无法解析的值返回 [`ServerError::Config`]
    pub fn from_env() -> Result<Self, ServerError> {
        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => StoreBackend::RocksDb,
        };

        Ok(Self {
            http_host: parse_var("HTTP_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            http_port: parse_var("HTTP_PORT", 3000)?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            store_backend,
            db_path: std::env::var("DB_PATH")
                .unwrap_or_else(|_| "./data/employees.db".into())
                .into(),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "staff".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "employees".into()),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./public".into())
                .into(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: parse_var("LOG_JSON", false)?,
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        })
    }

    /// 内存存储配置，常用于测试场景
    pub fn in_memory() -> Self {
        Self {
            http_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: 0,
            environment: "development".into(),
            store_backend: StoreBackend::Memory,
            db_path: PathBuf::from("./data/employees.db"),
            db_namespace: "staff".into(),
            db_name: "employees".into(),
            static_dir: PathBuf::from("./public"),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }

    /// 监听地址
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ServerError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("invalid value for {}: '{}'", key, raw))),
        _ => Ok(default),
    }
}
