//! 视频项目仓库 trait 定义

use crate::models::video_project::{VideoProjectCreate, VideoProjectInfo, VideoProjectSearchResult, VideoProjectUpdate};
use crate::DatabaseResult;

/// 视频项目仓库trait定义
#[async_trait::async_trait]
pub trait VideoProjectRepositoryTrait: Send + Sync + 'static {
    /// 根据标题搜索视频项目，按创建时间倒序
    ///
    /// # 参数
    /// - `title`: 项目标题（不区分大小写的模糊搜索），为空时返回全部
    /// - `page_size`: 页面大小
    /// - `offset`: 偏移量
    async fn find_projects(
        &self,
        title: Option<String>,
        page_size: i64,
        offset: i64,
    ) -> DatabaseResult<VideoProjectSearchResult>;

    /// 创建视频项目，`created_at` 由数据库赋值
    async fn create_project(&self, project: VideoProjectCreate) -> DatabaseResult<VideoProjectInfo>;

    /// 根据 ID 获取视频项目
    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<VideoProjectInfo>;

    /// 更新视频项目，不会修改 `created_at`
    async fn update_project(&self, id: i64, update: VideoProjectUpdate) -> DatabaseResult<VideoProjectInfo>;

    /// 删除视频项目
    async fn delete_project(&self, id: i64) -> DatabaseResult<VideoProjectInfo>;
}
