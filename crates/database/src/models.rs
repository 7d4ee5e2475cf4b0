//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod portfolio_project;
pub mod video_project;

// 重新导出具体的模型
pub use portfolio_project::{
    PortfolioProjectCreate, PortfolioProjectInfo, PortfolioProjectSearchResult, PortfolioProjectUpdate,
};
pub use video_project::{VideoProjectCreate, VideoProjectInfo, VideoProjectSearchResult, VideoProjectUpdate};
