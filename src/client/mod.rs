pub mod backend;

pub use backend::{BillBackend, HttpBillBackend};
