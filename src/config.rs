use std::{
    env,
    fmt::Display,
    num::{NonZeroU32, NonZeroUsize},
    str::FromStr,
};

use tracing::{info, warn};

use crate::error::ServerError;

/// 程序配置, 从环境变量 (以及 .env) 读取
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听端口
    pub port: u16,
    /// SQLite 数据库地址
    pub database_url: String,
    /// 连接池大小
    pub max_connections: NonZeroU32,
    /// 每页题目数
    pub questions_per_page: NonZeroUsize,
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        Ok(Self {
            port: try_load("TRIVIA_PORT", "8080")?,
            database_url: try_load("DATABASE_URL", "sqlite://trivia.db")?,
            max_connections: try_load("DATABASE_MAX_CONNECTIONS", "5")?,
            questions_per_page: try_load("QUESTIONS_PER_PAGE", "10")?,
        })
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ServerError>
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &value)
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ServerError>
where
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ServerError::Config {
            key,
            reason: e.to_string(),
        }
    })
}
