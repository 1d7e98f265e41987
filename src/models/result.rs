use super::AuditStatus;
use serde::{Deserialize, Serialize};

/// 批量操作 (审批页的两个按钮)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    Approve,
    Reject,
}

impl BulkAction {
    /// 操作对应的目标审核状态: 通过 -> PROCESSING, 驳回 -> UNUSABLE
    pub fn target_status(&self) -> AuditStatus {
        match self {
            BulkAction::Approve => AuditStatus::Processing,
            BulkAction::Reject => AuditStatus::Unusable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Approve => "Approve",
            BulkAction::Reject => "Reject",
        }
    }
}

/// 批量操作结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// 选择集为空，未发出任何请求
    Skipped,
    /// 所有选中账单的状态迁移均已成功
    Applied {
        action: BulkAction,
        bill_ids: Vec<i64>,
    },
}
