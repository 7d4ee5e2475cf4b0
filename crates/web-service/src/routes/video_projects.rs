//! 视频项目相关接口

use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::models::video_projects::{
    VideoProjectCreate, VideoProjectInfo, VideoProjectSearch, VideoProjectUpdate,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, info};
use validator::Validate;

/// 分页搜索视频项目，最新创建的排在前面
#[utoipa::path(post,
    path = "/search-video-projects",
    tag = "video-projects",
    request_body = VideoProjectSearch,
    responses(
        (status = 200, description = "Search results", body = ReplyList<VideoProjectInfo>),
        (status = 400, description = "Invalid search parameters")
    ),
)]
pub async fn find_video_projects(
    State(state): State<AppState>,
    Json(search): Json<VideoProjectSearch>,
) -> Result<Json<ReplyList<VideoProjectInfo>>, AppError> {
    debug!("🔍 搜索视频项目 {:#?}", search);

    // 验证输入参数，确保有效性
    search.validate()?;

    let result = state
        .video_projects
        .find_projects(
            search.title.clone(),
            i64::from(search.page_query.page_size),
            search.page_query.offset(),
        )
        .await?;

    Ok(Json(ReplyList {
        total: result.total,
        data: result.projects.into_iter().map(Into::into).collect(),
        page_size: search.page_query.page_size,
        page_index: search.page_query.page_index,
    }))
}

/// 创建视频项目
///
/// `video` 为上传视频的原始文件名，保存为 `videos/` 下的相对路径；`created_at` 由数据库写入
#[utoipa::path(post,
    path = "/video-projects",
    tag = "video-projects",
    request_body = VideoProjectCreate,
    responses(
        (status = 200, description = "Create project result", body = Reply<VideoProjectInfo>),
        (status = 400, description = "Invalid project fields")
    )
)]
pub async fn create_video_project(
    State(state): State<AppState>,
    Json(project): Json<VideoProjectCreate>,
) -> Result<Json<Reply<VideoProjectInfo>>, AppError> {
    debug!("Creating video project {:#?}", project);

    project.validate()?;

    let project = state.video_projects.create_project(project.try_into()?).await?;
    info!("🎬 视频项目已创建: {} (id={}, created_at={})", project, project.id, project.created_at);

    Ok(Json(Reply { data: project.into() }))
}

/// 查询指定视频项目
#[utoipa::path(get,
    path = "/video-projects/{id}",
    tag = "video-projects",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, body = VideoProjectInfo),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_video_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<VideoProjectInfo>, AppError> {
    debug!("Getting video project id {:#?}", project_id);

    let project = state.video_projects.get_project_by_id(project_id).await?;

    Ok(Json(project.into()))
}

/// 更新视频项目，`created_at` 保持不变
#[utoipa::path(patch,
    path = "/video-projects/{id}",
    tag = "video-projects",
    params(("id" = i64, Path, description = "项目ID")),
    request_body = VideoProjectUpdate,
    responses(
        (status = 200, body = VideoProjectInfo),
        (status = 400, description = "Invalid project fields"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_video_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(info): Json<VideoProjectUpdate>,
) -> Result<Json<VideoProjectInfo>, AppError> {
    debug!("Updating video project {} with {:#?}", project_id, info);

    info.validate()?;

    let project = state
        .video_projects
        .update_project(project_id, info.try_into()?)
        .await?;

    Ok(Json(project.into()))
}

/// 删除指定的视频项目
#[utoipa::path(delete,
    path = "/video-projects/{id}",
    tag = "video-projects",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, body = VideoProjectInfo),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_video_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<VideoProjectInfo>, AppError> {
    debug!("delete video project {:#?}", project_id);

    let project = state.video_projects.delete_project(project_id).await?;
    info!("🗑️ 视频项目已删除: {}", project);

    Ok(Json(project.into()))
}
