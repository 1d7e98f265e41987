pub mod approval;
pub mod dispatcher;
pub mod loader;
pub mod selection;

pub use approval::{ApprovalController, ApprovalSnapshot, ApprovalState};
pub use dispatcher::BulkActionDispatcher;
pub use loader::BillListLoader;
pub use selection::{MasterState, Selection};
