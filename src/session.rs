use crate::error::Result;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 会话令牌所在的键
pub const SESSION_KEY: &str = "user";

/// 客户端持久化键值存储 (JSON 文件)
///
/// 令牌缺失或为空即视为未登录。令牌的获取 (登录) 不在这里完成。
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 当前会话令牌
    pub fn token(&self) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(SESSION_KEY)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(SESSION_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    /// 退出登录: 删除令牌，保留其它键
    pub fn clear(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(SESSION_KEY).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
