use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 启动时预留的连接数
    /// 可通过环境变量 `DB_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,

    /// 连接池上限，生产环境配置30~40即可
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,

    /// Web服务监听地址，环境变量 `BIND_ADDR`
    pub bind_addr: String,

    /// 日志级别，环境变量 `LOG_LEVEL`
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        let _ = dotenvy::dotenv();

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let config = AppConfig {
            database: DatabaseConfig {
                postgresql_conn_str: db_url,
                min_connections: env_or("DB_MIN_CONNECTIONS", 2),
                max_connections: env_or("DB_MAX_CONNECTIONS", 40),
            },
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            log_level: env_or("LOG_LEVEL", Level::DEBUG),
        };
        Ok(Arc::new(config))
    }
}

/// 读取环境变量并解析，不存在或解析失败时使用默认值
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(s) => s.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
