//! 视频项目数据库模型
//!
//! 对应 `main.video_projects` 表，`created_at` 由数据库在插入时赋值，之后不再修改

use chrono::{DateTime, Utc};
use std::fmt;

/// 视频项目信息结构体
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct VideoProjectInfo {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// 视频的存储路径，位于 `videos/` 下
    pub video: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for VideoProjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// 视频项目搜索结果
#[derive(Debug, Clone)]
pub struct VideoProjectSearchResult {
    pub projects: Vec<VideoProjectInfo>,
    pub total: u32,
}

/// 视频项目创建参数，不包含 `created_at`
#[derive(Debug, Clone)]
pub struct VideoProjectCreate {
    pub title: String,
    pub description: String,
    pub video: String,
}

/// 视频项目更新参数，不包含 `created_at`
#[derive(Debug, Clone, Default)]
pub struct VideoProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video: Option<String>,
}
