//! 作品集项目仓库 trait 定义

use crate::models::portfolio_project::{
    PortfolioProjectCreate, PortfolioProjectInfo, PortfolioProjectSearchResult, PortfolioProjectUpdate,
};
use crate::DatabaseResult;

/// 作品集项目仓库trait定义
///
/// 定义了作品集项目相关的数据库操作接口，支持：
/// - 项目搜索（分页）
/// - 项目创建
/// - 项目查询
/// - 项目更新
/// - 项目删除
#[async_trait::async_trait]
pub trait PortfolioProjectRepositoryTrait: Send + Sync + 'static {
    /// 根据标题搜索项目
    ///
    /// # 参数
    /// - `title`: 项目标题（不区分大小写的模糊搜索），为空时返回全部
    /// - `page_size`: 页面大小
    /// - `offset`: 偏移量
    ///
    /// # 返回值
    /// 返回包含项目列表和总数的结果 [`PortfolioProjectSearchResult`]，按 `id` 升序
    async fn find_projects(
        &self,
        title: Option<String>,
        page_size: i64,
        offset: i64,
    ) -> DatabaseResult<PortfolioProjectSearchResult>;

    /// 创建新项目
    async fn create_project(&self, project: PortfolioProjectCreate) -> DatabaseResult<PortfolioProjectInfo>;

    /// 根据 ID 获取项目信息，不存在时返回 `NotFound`
    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<PortfolioProjectInfo>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `update`: 更新信息，`None` 字段保留原值，链接为空字符串时清空
    ///
    /// # 返回值
    /// 返回更新后的项目信息
    async fn update_project(&self, id: i64, update: PortfolioProjectUpdate) -> DatabaseResult<PortfolioProjectInfo>;

    /// 删除项目，返回被删除的项目信息
    async fn delete_project(&self, id: i64) -> DatabaseResult<PortfolioProjectInfo>;
}
