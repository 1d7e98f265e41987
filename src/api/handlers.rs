use crate::models::BulkAction;
use crate::service::{ApprovalController, ApprovalSnapshot};
use crate::session::SessionStore;
use crate::view::{bills_to_csv, render_approval_page};
use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub approval: Arc<ApprovalController>,
    pub session: SessionStore,
}

/// 命令执行后返回审批页
const APPROVAL_PAGE: &str = "/approval";

/// 响应体
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub message: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 审批页
pub async fn approval_page(State(state): State<AppState>) -> Html<String> {
    let html = state
        .approval
        .with_state(|s| render_approval_page(&s.table(), s.last_error()))
        .await;
    Html(html)
}

/// 审批页快照 (JSON)
pub async fn approval_snapshot(State(state): State<AppState>) -> Json<ApprovalSnapshot> {
    Json(state.approval.snapshot().await)
}

pub async fn toggle_row(State(state): State<AppState>, Path(bill_id): Path<i64>) -> Redirect {
    state.approval.toggle_row(bill_id).await;
    Redirect::to(APPROVAL_PAGE)
}

pub async fn toggle_all(State(state): State<AppState>) -> Redirect {
    state.approval.toggle_all().await;
    Redirect::to(APPROVAL_PAGE)
}

pub async fn approve(State(state): State<AppState>) -> Redirect {
    run_action(&state, BulkAction::Approve).await
}

pub async fn reject(State(state): State<AppState>) -> Redirect {
    run_action(&state, BulkAction::Reject).await
}

async fn run_action(state: &AppState, action: BulkAction) -> Redirect {
    // 失败信息已写入审批页状态，页面上显示
    if let Err(e) = state.approval.apply(action).await {
        tracing::warn!("{} request failed: {}", action.label(), e);
    }
    Redirect::to(APPROVAL_PAGE)
}

pub async fn refresh(State(state): State<AppState>) -> Redirect {
    if let Err(e) = state.approval.load().await {
        tracing::warn!("Manual refresh failed: {}", e);
    }
    Redirect::to(APPROVAL_PAGE)
}

/// 导出当前账单为 CSV
pub async fn export_csv(State(state): State<AppState>) -> Response {
    let exported = state.approval.with_state(|s| bills_to_csv(s.bills())).await;
    match exported {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"bills.csv\""),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            let response = CommandResponse {
                success: false,
                message: format!("Error: {}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}

/// 退出登录: 清除会话令牌
pub async fn logout(State(state): State<AppState>) -> Response {
    match state.session.clear() {
        Ok(()) => {
            tracing::info!("Session cleared");
            let response = CommandResponse {
                success: true,
                message: "Logged out".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let response = CommandResponse {
                success: false,
                message: format!("Error: {}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
