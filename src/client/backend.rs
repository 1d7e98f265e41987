use crate::config::BackendConfig;
use crate::error::{ConsoleError, Result};
use crate::models::{AuditStatus, Bill};
use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::time::Duration;

/// 账单后端接口
#[async_trait]
pub trait BillBackend: Send + Sync {
    /// 拉取当前全部账单，保持后端返回的顺序
    async fn fetch_bills(&self) -> Result<Vec<Bill>>;

    /// 将单张账单迁移到目标审核状态
    async fn transition(&self, bill_id: i64, status: AuditStatus) -> Result<()>;
}

/// 基于 reqwest 的后端实现
///
/// - `GET  {base}/bills`
/// - `PATCH {base}/bills?id={id}&status={status}` (无请求体)
///
/// 每次请求都从会话存储读取令牌，退出登录后立即生效。
pub struct HttpBillBackend {
    http: Client,
    config: BackendConfig,
    session: SessionStore,
}

impl HttpBillBackend {
    pub fn new(config: BackendConfig, session: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    fn authorization(&self) -> Result<String> {
        let token = self.session.token()?.ok_or(ConsoleError::LoggedOut)?;
        Ok(format!("{} {}", self.config.auth_scheme, token))
    }
}

#[async_trait]
impl BillBackend for HttpBillBackend {
    async fn fetch_bills(&self) -> Result<Vec<Bill>> {
        let bills = self
            .http
            .get(self.config.endpoint("bills"))
            .header(AUTHORIZATION, self.authorization()?)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Bill>>()
            .await?;
        Ok(bills)
    }

    async fn transition(&self, bill_id: i64, status: AuditStatus) -> Result<()> {
        self.http
            .patch(self.config.endpoint("bills"))
            .query(&[("id", bill_id.to_string()), ("status", status.to_string())])
            .header(AUTHORIZATION, self.authorization()?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
