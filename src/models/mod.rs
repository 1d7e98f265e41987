pub mod bill;
pub mod result;

pub use bill::{AuditStatus, Bill};
pub use result::{ActionOutcome, BulkAction};
