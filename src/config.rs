// 服务配置
//
// 所有配置都来自环境变量（main 中先通过 dotenv 加载 .env）

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "it-IT";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("invalid listen address: {0}")]
    InvalidAddress(String),
}

/// TMDB 客户端配置
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub timeout: Duration,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub tmdb: TmdbConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意查找函数读取配置，便于测试
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TmdbConfig::default();

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT", 3000u16)?;
        let timeout_secs = parse_var(&lookup, "TMDB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let api_key = lookup("TMDB_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("TMDB_API_KEY is not set, upstream requests will be rejected");
        }

        Ok(Self {
            host,
            port,
            tmdb: TmdbConfig {
                api_key,
                base_url: lookup("TMDB_BASE_URL").unwrap_or(defaults.base_url),
                language: lookup("TMDB_LANGUAGE").unwrap_or(defaults.language),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
