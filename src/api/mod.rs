pub mod handlers;

pub use handlers::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

/// 控制台路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/approval", get(approval_page))
        .route("/api/approval", get(approval_snapshot))
        .route("/approval/toggle/:id", post(toggle_row))
        .route("/approval/toggle-all", post(toggle_all))
        .route("/approval/approve", post(approve))
        .route("/approval/reject", post(reject))
        .route("/approval/refresh", post(refresh))
        .route("/approval/export.csv", get(export_csv))
        .route("/logout", post(logout))
        .layer(ServiceBuilder::new())
        .with_state(state)
}
