pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod session;
pub mod view;

pub use client::{BillBackend, HttpBillBackend};
pub use config::AppConfig;
pub use error::{ConsoleError, Result};
pub use service::ApprovalController;
pub use session::SessionStore;
