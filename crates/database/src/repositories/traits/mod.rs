//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 约束 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：仓库实例会在多个请求（线程）之间共享
//! - `'static`：仓库作为应用服务长期存活，不依赖短期引用
//!
//! Web 层通过 `Arc<dyn XxxRepositoryTrait>` 持有仓库，测试时可以换成内存实现：
//!
//! ```rust,ignore
//! let state = AppState {
//!     portfolio_projects: Arc::new(PortfolioProjectRepository::new(pool.clone())),
//!     video_projects: Arc::new(VideoProjectRepository::new(pool)),
//! };
//! ```
//!
//! 所有方法统一返回 [`DatabaseResult`](crate::DatabaseResult)，查询不到记录时返回
//! [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)。

pub mod portfolio_project;
pub mod video_project;

// 重新导出
pub use portfolio_project::PortfolioProjectRepositoryTrait;
pub use video_project::VideoProjectRepositoryTrait;
