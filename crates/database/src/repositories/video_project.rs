//! 视频项目仓库
//!
//! 负责 `main.video_projects` 表的数据库操作

use crate::models::video_project::{VideoProjectCreate, VideoProjectInfo, VideoProjectSearchResult, VideoProjectUpdate};
use crate::repositories::contains_pattern;
use crate::repositories::traits::VideoProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use shared_lib::UploadTo;
use sqlx::PgPool;
use tracing::debug;

/// 视频项目仓库结构体
#[derive(Debug, Clone)]
pub struct VideoProjectRepository {
    pool: PgPool,
}

impl VideoProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn check_video_path(video: &str) -> DatabaseResult<()> {
    if !UploadTo::Videos.contains(video) {
        return Err(DatabaseError::validation(format!(
            "视频路径 {video:?} 不在 {} 命名空间下",
            UploadTo::Videos
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl VideoProjectRepositoryTrait for VideoProjectRepository {
    /// 根据标题搜索视频项目
    ///
    /// 与作品集项目的搜索相同，区别在于结果按 `created_at` 倒序（最新的在前）
    async fn find_projects(
        &self,
        title: Option<String>,
        page_size: i64,
        offset: i64,
    ) -> DatabaseResult<VideoProjectSearchResult> {
        debug!(
            "🔍 搜索视频项目 - 标题: {:?}, 页面大小: {}, 偏移量: {}",
            title, page_size, offset
        );

        let keyword = title.unwrap_or_default();
        let like_param = contains_pattern(&keyword);

        // 总数单独统计，保证偏移量超出范围时依然返回正确的总数
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM main.video_projects
            WHERE ($1 = '' OR title ILIKE $2);
            "#,
        )
        .bind(&keyword)
        .bind(&like_param)
        .fetch_one(&self.pool)
        .await?;
        let total = u32::try_from(total).unwrap_or(u32::MAX);

        let projects = sqlx::query_as::<_, VideoProjectInfo>(
            r#"
            SELECT id, title, description, video, created_at
            FROM main.video_projects
            WHERE ($1 = '' OR title ILIKE $2)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4;
            "#,
        )
        .bind(&keyword)
        .bind(&like_param)
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 搜索完成 - 找到 {} 个视频项目，总计 {} 个", projects.len(), total);

        Ok(VideoProjectSearchResult { projects, total })
    }

    async fn create_project(&self, project: VideoProjectCreate) -> DatabaseResult<VideoProjectInfo> {
        debug!("📝 创建视频项目: {:#?}", project);

        check_video_path(&project.video)?;

        // created_at 使用列默认值 now()
        let project_info = sqlx::query_as::<_, VideoProjectInfo>(
            r#"
            INSERT INTO main.video_projects (title, description, video)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, video, created_at;
            "#,
        )
        .bind(project.title)
        .bind(project.description)
        .bind(project.video)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_write)?;

        debug!("✅ 视频项目创建成功: {} ({})", project_info, project_info.created_at);
        Ok(project_info)
    }

    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<VideoProjectInfo> {
        debug!("🔍 根据 ID 获取视频项目: {}", id);

        let project = sqlx::query_as::<_, VideoProjectInfo>(
            r#"
            SELECT id, title, description, video, created_at
            FROM main.video_projects
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("视频项目 {id}")))?;

        Ok(project)
    }

    /// 更新视频项目
    ///
    /// `created_at` 不在 `SET` 子句中，创建后不会被修改
    async fn update_project(&self, id: i64, update: VideoProjectUpdate) -> DatabaseResult<VideoProjectInfo> {
        debug!("🔄 更新视频项目 {} 信息: {:#?}", id, update);

        if let Some(video) = &update.video {
            check_video_path(video)?;
        }

        let project = sqlx::query_as::<_, VideoProjectInfo>(
            r#"
            UPDATE main.video_projects
            SET title       = coalesce($2, title),
                description = coalesce($3, description),
                video       = coalesce($4, video)
            WHERE id = $1
            RETURNING id, title, description, video, created_at;
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.video)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_write)?
        .ok_or_else(|| DatabaseError::not_found(format!("视频项目 {id}")))?;

        debug!("✅ 视频项目更新成功: {}", project);
        Ok(project)
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<VideoProjectInfo> {
        debug!("🗑️ 删除视频项目: {}", id);

        let project = sqlx::query_as::<_, VideoProjectInfo>(
            r#"
            DELETE FROM main.video_projects
            WHERE id = $1
            RETURNING id, title, description, video, created_at;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("视频项目 {id}")))?;

        debug!("✅ 视频项目删除成功: {}", project);
        Ok(project)
    }
}
