use bill_approval_console::{api, AppConfig, ApprovalController, HttpBillBackend, SessionStore};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting console with config: {:?}", config);

    let session = SessionStore::new(config.session.path.clone());
    if session.token()?.is_none() {
        warn!(
            "No session token in {}, backend requests will fail until logged in",
            session.path().display()
        );
    }

    let backend = Arc::new(HttpBillBackend::new(config.backend.clone(), session.clone())?);
    let approval = Arc::new(ApprovalController::new(backend));

    // 首次加载；失败时页面显示错误，可手动刷新
    if let Err(e) = approval.load().await {
        warn!("Initial bill load failed: {}", e);
    }

    let app = api::router(api::AppState { approval, session });

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Console listening on {}", addr);
    info!("Endpoints:");
    info!("  GET  /approval             - approval table");
    info!("  POST /approval/approve     - mark selected bills PROCESSING");
    info!("  POST /approval/reject      - mark selected bills UNUSABLE");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
