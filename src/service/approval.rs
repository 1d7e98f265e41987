use super::dispatcher::BulkActionDispatcher;
use super::loader::BillListLoader;
use super::selection::{MasterState, Selection};
use crate::client::BillBackend;
use crate::error::Result;
use crate::models::{ActionOutcome, Bill, BulkAction};
use crate::view::BillTable;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 审批页状态: 账单列表 + 选择集 + 最近一次错误
///
/// 列表只会被整体替换，替换时同时重置选择集。
#[derive(Debug, Default)]
pub struct ApprovalState {
    bills: Vec<Bill>,
    selection: Selection,
    last_error: Option<String>,
}

impl ApprovalState {
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn table(&self) -> BillTable {
        BillTable::project(&self.bills, &self.selection)
    }

    fn replace_bills(&mut self, bills: Vec<Bill>) {
        self.selection.reset(bills.iter().map(|b| b.id));
        self.bills = bills;
        self.last_error = None;
    }
}

/// 审批页快照 (JSON 接口)
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalSnapshot {
    pub table: BillTable,
    pub selected: Vec<i64>,
    pub error: Option<String>,
}

/// 审批页控制器
///
/// 网络请求期间不持有锁；状态变更都在一次加锁内完成，
/// 所以用户的勾选操作不会和刷新导致的重置交错。
pub struct ApprovalController {
    state: Mutex<ApprovalState>,
    loader: BillListLoader,
    dispatcher: BulkActionDispatcher,
}

impl ApprovalController {
    pub fn new(backend: Arc<dyn BillBackend>) -> Self {
        Self {
            state: Mutex::new(ApprovalState::default()),
            loader: BillListLoader::new(backend.clone()),
            dispatcher: BulkActionDispatcher::new(backend),
        }
    }

    /// 加载 (或刷新) 账单列表，返回加载到的数量
    ///
    /// 失败时保留原列表和选择集，只记录错误信息。
    pub async fn load(&self) -> Result<usize> {
        match self.loader.load().await {
            Ok(bills) => {
                let count = bills.len();
                self.state.lock().await.replace_bills(bills);
                Ok(count)
            }
            Err(e) => {
                self.state.lock().await.last_error = Some(format!("Failed to load bills: {}", e));
                Err(e)
            }
        }
    }

    pub async fn toggle_row(&self, bill_id: i64) -> bool {
        let toggled = self.state.lock().await.selection.toggle_row(bill_id);
        if !toggled {
            tracing::debug!("Ignoring toggle for unknown bill {}", bill_id);
        }
        toggled
    }

    pub async fn toggle_all(&self) -> MasterState {
        self.state.lock().await.selection.toggle_all()
    }

    pub async fn is_selected(&self, bill_id: i64) -> bool {
        self.state.lock().await.selection.is_selected(bill_id)
    }

    pub async fn master_state(&self) -> MasterState {
        self.state.lock().await.selection.master_state()
    }

    /// 对当前选择集执行批量操作
    ///
    /// 选择集在调用时取快照。全部成功后清空选择并刷新列表；
    /// 任一失败则不刷新、不清空，错误留给用户重试。
    pub async fn apply(&self, action: BulkAction) -> Result<ActionOutcome> {
        let bill_ids = self.state.lock().await.selection.snapshot();

        match self.dispatcher.dispatch(action, &bill_ids).await {
            Ok(ActionOutcome::Skipped) => Ok(ActionOutcome::Skipped),
            Ok(outcome) => {
                self.state.lock().await.selection.clear();
                // 刷新失败时错误已记录在状态里，批量操作本身仍算成功
                if let Err(e) = self.load().await {
                    tracing::warn!("Refresh after {} failed: {}", action.label(), e);
                }
                Ok(outcome)
            }
            Err(e) => {
                self.state.lock().await.last_error =
                    Some(format!("{} failed, please retry: {}", action.label(), e));
                Err(e)
            }
        }
    }

    pub async fn approve(&self) -> Result<ActionOutcome> {
        self.apply(BulkAction::Approve).await
    }

    pub async fn reject(&self) -> Result<ActionOutcome> {
        self.apply(BulkAction::Reject).await
    }

    pub async fn snapshot(&self) -> ApprovalSnapshot {
        let state = self.state.lock().await;
        ApprovalSnapshot {
            table: state.table(),
            selected: state.selection.snapshot(),
            error: state.last_error.clone(),
        }
    }

    /// 在锁内读取状态
    pub async fn with_state<R>(&self, f: impl FnOnce(&ApprovalState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }
}
