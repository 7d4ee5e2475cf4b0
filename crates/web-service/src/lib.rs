//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{
    PortfolioProjectRepository, PortfolioProjectRepositoryTrait, VideoProjectRepository, VideoProjectRepositoryTrait,
};
use shared_lib::AppConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;

/// 应用共享状态
///
/// 仓库以 trait object 的形式保存，测试时可以替换为内存实现
#[derive(Clone)]
pub struct AppState {
    pub portfolio_projects: Arc<dyn PortfolioProjectRepositoryTrait>,
    pub video_projects: Arc<dyn VideoProjectRepositoryTrait>,
}

impl AppState {
    /// 使用 PostgreSQL 仓库创建共享状态
    pub fn from_pool(pool: Pool<Postgres>) -> Self {
        Self {
            portfolio_projects: Arc::new(PortfolioProjectRepository::new(pool.clone())),
            video_projects: Arc::new(VideoProjectRepository::new(pool)),
        }
    }
}

/// 启动 Web 服务
pub async fn start_web_service(
    pool: Pool<Postgres>,
    config: Arc<AppConfig>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let router = routes::create_app_router(AppState::from_pool(pool));

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
