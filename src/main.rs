use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🚀 启动 portfolio-backend...");

    let pool = database::initialize_database(config.clone()).await?;

    // 系统关闭信号，Ctrl+C 时通知所有服务
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("🛑 收到关闭信号"),
            Err(e) => error!("❌ 监听关闭信号失败: {e}"),
        }
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(pool.clone(), config, shutdown_rx).await?;

    pool.close().await;
    info!("👋 portfolio-backend 已退出");

    Ok(())
}
