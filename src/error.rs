use thiserror::Error;

/// 控制台错误
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// 加载或状态迁移请求失败 (超时、4xx/5xx、连接失败)，均可重试
    #[error("backend request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// 未登录: 会话存储中没有 `user` 令牌
    #[error("not logged in: no session token stored")]
    LoggedOut,

    /// 批量操作中有请求失败
    #[error("{} of {attempted} status transitions failed: {source}", .failed.len())]
    TransitionFailed {
        failed: Vec<i64>,
        attempted: usize,
        #[source]
        source: Box<ConsoleError>,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("session store error: {0}")]
    Session(#[from] std::io::Error),

    #[error("malformed session store: {0}")]
    SessionFormat(#[from] serde_json::Error),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ConsoleError {
    /// 用户可以重新点击重试的错误
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ConsoleError::Network(_) | ConsoleError::TransitionFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
