//! 作品集项目仓库
//!
//! 负责 `main.portfolio_projects` 表的数据库操作

use crate::models::portfolio_project::{
    PortfolioProjectCreate, PortfolioProjectInfo, PortfolioProjectSearchResult, PortfolioProjectUpdate,
};
use crate::repositories::contains_pattern;
use crate::repositories::traits::PortfolioProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use shared_lib::{is_image_file_name, UploadTo};
use sqlx::PgPool;
use tracing::debug;

/// 作品集项目仓库结构体
#[derive(Debug, Clone)]
pub struct PortfolioProjectRepository {
    pool: PgPool,
}

impl PortfolioProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 图片路径必须直接位于 `projects/` 下，且带有图片扩展名
fn check_image_path(image: &str) -> DatabaseResult<()> {
    if !UploadTo::ProjectImages.contains(image) {
        return Err(DatabaseError::validation(format!(
            "图片路径 {image:?} 不在 {} 命名空间下",
            UploadTo::ProjectImages
        )));
    }
    if !is_image_file_name(image) {
        return Err(DatabaseError::validation(format!("图片路径 {image:?} 不是图片文件")));
    }
    Ok(())
}

#[async_trait::async_trait]
impl PortfolioProjectRepositoryTrait for PortfolioProjectRepository {
    /// 根据标题搜索项目
    ///
    /// # SQL 查询说明
    ///
    /// 1. 先用 `COUNT(*)` 统计过滤后的总记录数（不受分页影响）
    /// 2. 再按 `id` 排序取出当前页
    /// 3. 标题为空字符串时不过滤，否则使用 `ILIKE` 做不区分大小写的子串匹配
    async fn find_projects(
        &self,
        title: Option<String>,
        page_size: i64,
        offset: i64,
    ) -> DatabaseResult<PortfolioProjectSearchResult> {
        debug!(
            "🔍 搜索作品集项目 - 标题: {:?}, 页面大小: {}, 偏移量: {}",
            title, page_size, offset
        );

        let keyword = title.unwrap_or_default();
        let like_param = contains_pattern(&keyword);

        // 总数单独统计，保证偏移量超出范围时依然返回正确的总数
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM main.portfolio_projects
            WHERE ($1 = '' OR title ILIKE $2);
            "#,
        )
        .bind(&keyword)
        .bind(&like_param)
        .fetch_one(&self.pool)
        .await?;
        let total = u32::try_from(total).unwrap_or(u32::MAX);

        let projects = sqlx::query_as::<_, PortfolioProjectInfo>(
            r#"
            SELECT id, title, description, image, github_link, demo_link
            FROM main.portfolio_projects
            WHERE ($1 = '' OR title ILIKE $2)
            ORDER BY id
            LIMIT $3 OFFSET $4;
            "#,
        )
        .bind(&keyword)
        .bind(&like_param)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 搜索完成 - 找到 {} 个项目，总计 {} 个", projects.len(), total);

        Ok(PortfolioProjectSearchResult { projects, total })
    }

    /// 创建新项目
    async fn create_project(&self, project: PortfolioProjectCreate) -> DatabaseResult<PortfolioProjectInfo> {
        debug!("📝 创建作品集项目: {:#?}", project);

        check_image_path(&project.image)?;

        let project_info = sqlx::query_as::<_, PortfolioProjectInfo>(
            r#"
            INSERT INTO main.portfolio_projects (title, description, image, github_link, demo_link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, image, github_link, demo_link;
            "#,
        )
        .bind(project.title)
        .bind(project.description)
        .bind(project.image)
        .bind(project.github_link)
        .bind(project.demo_link)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_write)?;

        debug!("✅ 项目创建成功: {}", project_info);
        Ok(project_info)
    }

    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<PortfolioProjectInfo> {
        debug!("🔍 根据 ID 获取作品集项目: {}", id);

        let project = sqlx::query_as::<_, PortfolioProjectInfo>(
            r#"
            SELECT id, title, description, image, github_link, demo_link
            FROM main.portfolio_projects
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("作品集项目 {id}")))?;

        Ok(project)
    }

    /// 更新项目信息
    ///
    /// ## SQL
    ///
    /// 普通字段使用 `coalesce`，传入 `None` 时保留原值。
    /// 链接字段需要区分“保留”和“清空”：`NULL` 表示保留，空字符串经 `NULLIF` 转换为 `NULL` 后写入。
    async fn update_project(&self, id: i64, update: PortfolioProjectUpdate) -> DatabaseResult<PortfolioProjectInfo> {
        debug!("🔄 更新作品集项目 {} 信息: {:#?}", id, update);

        if let Some(image) = &update.image {
            check_image_path(image)?;
        }

        let project = sqlx::query_as::<_, PortfolioProjectInfo>(
            r#"
            UPDATE main.portfolio_projects
            SET title       = coalesce($2, title),
                description = coalesce($3, description),
                image       = coalesce($4, image),
                github_link = CASE WHEN $5::VARCHAR IS NULL THEN github_link ELSE NULLIF($5, '') END,
                demo_link   = CASE WHEN $6::VARCHAR IS NULL THEN demo_link ELSE NULLIF($6, '') END
            WHERE id = $1
            RETURNING id, title, description, image, github_link, demo_link;
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.image)
        .bind(update.github_link)
        .bind(update.demo_link)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_write)?
        .ok_or_else(|| DatabaseError::not_found(format!("作品集项目 {id}")))?;

        debug!("✅ 项目更新成功: {}", project);
        Ok(project)
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<PortfolioProjectInfo> {
        debug!("🗑️ 删除作品集项目: {}", id);

        let project = sqlx::query_as::<_, PortfolioProjectInfo>(
            r#"
            DELETE FROM main.portfolio_projects
            WHERE id = $1
            RETURNING id, title, description, image, github_link, demo_link;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("作品集项目 {id}")))?;

        debug!("✅ 项目删除成功: {}", project);
        Ok(project)
    }
}
