use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 审核状态 (服务端所有，仅能通过状态迁移接口修改)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    /// 待处理 / 正常处理中 (新生成账单的默认状态)
    Processing,
    /// 已处理完成 (本控制台的操作无法到达)
    Processed,
    /// 已驳回 / 不可用
    Unusable,
}

impl AuditStatus {
    /// 接口查询参数中使用的取值
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Processing => "PROCESSING",
            AuditStatus::Processed => "PROCESSED",
            AuditStatus::Unusable => "UNUSABLE",
        }
    }

    /// 表格中展示的名称
    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Processing => "Pending",
            AuditStatus::Processed => "Processed",
            AuditStatus::Unusable => "Rejected",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 账单 (后端返回，客户端只读)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub report_dtm: DateTime<Utc>,
    pub bill_start: DateTime<Utc>,
    pub bill_end: DateTime<Utc>,
    pub audit_status: AuditStatus,
    pub bill_transit: BigDecimal,
    pub cost_mult: BigDecimal,
    pub sid: i64,
    pub stations: String,
    pub year: i32,
}
