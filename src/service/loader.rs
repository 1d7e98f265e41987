use crate::client::BillBackend;
use crate::error::Result;
use crate::models::Bill;
use std::sync::Arc;

/// 账单列表加载器 (不持有选择状态)
#[derive(Clone)]
pub struct BillListLoader {
    backend: Arc<dyn BillBackend>,
}

impl BillListLoader {
    pub fn new(backend: Arc<dyn BillBackend>) -> Self {
        Self { backend }
    }

    /// 拉取账单列表；失败时不重试
    pub async fn load(&self) -> Result<Vec<Bill>> {
        tracing::debug!("Loading bill list");
        match self.backend.fetch_bills().await {
            Ok(bills) => {
                tracing::info!("Loaded {} bills", bills.len());
                Ok(bills)
            }
            Err(e) => {
                tracing::error!("Failed to load bills: {}", e);
                Err(e)
            }
        }
    }
}
