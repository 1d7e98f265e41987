use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 账单后端接口
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Authorization 头的前缀, 例如 `Bearer <token>`
    pub auth_scheme: String,
}

/// 客户端会话存储 (保存 `user` 令牌的文件)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 30,
            auth_scheme: "Bearer".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("session.json"),
        }
    }
}

impl BackendConfig {
    /// 拼接接口地址，兼容 base_url 末尾带或不带 `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl AppConfig {
    /// 按顺序叠加: 默认值 -> 可选配置文件 -> `CONSOLE__` 前缀环境变量
    pub fn load_with(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("console").required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix("CONSOLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 从环境变量加载配置，失败时退回默认值
    pub fn from_env() -> Self {
        match Self::load_with(None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
