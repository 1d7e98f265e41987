pub mod export;
pub mod page;
pub mod table;

pub use export::bills_to_csv;
pub use page::render_approval_page;
pub use table::{BillRow, BillTable, TableRow};
