use crate::client::BillBackend;
use crate::error::{ConsoleError, Result};
use crate::models::{ActionOutcome, BulkAction};
use futures::future::join_all;
use std::sync::Arc;

/// 批量操作分发器
///
/// 对选择集快照中的每个账单发出一次状态迁移请求，全部完成后才返回。
/// 是否刷新列表由调用方根据返回值决定。
#[derive(Clone)]
pub struct BulkActionDispatcher {
    backend: Arc<dyn BillBackend>,
}

impl BulkActionDispatcher {
    pub fn new(backend: Arc<dyn BillBackend>) -> Self {
        Self { backend }
    }

    pub async fn dispatch(&self, action: BulkAction, bill_ids: &[i64]) -> Result<ActionOutcome> {
        if bill_ids.is_empty() {
            tracing::debug!("{} skipped: nothing selected", action.label());
            return Ok(ActionOutcome::Skipped);
        }

        let status = action.target_status();
        tracing::info!(
            "{} {} bills -> {}",
            action.label(),
            bill_ids.len(),
            status
        );

        let results = join_all(
            bill_ids
                .iter()
                .map(|&id| async move { (id, self.backend.transition(id, status).await) }),
        )
        .await;

        let mut failed = Vec::new();
        let mut first_error = None;
        for (id, result) in results {
            if let Err(e) = result {
                tracing::warn!("Bill {} transition to {} failed: {}", id, status, e);
                failed.push(id);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            None => Ok(ActionOutcome::Applied {
                action,
                bill_ids: bill_ids.to_vec(),
            }),
            Some(source) => Err(ConsoleError::TransitionFailed {
                failed,
                attempted: bill_ids.len(),
                source: Box::new(source),
            }),
        }
    }
}
