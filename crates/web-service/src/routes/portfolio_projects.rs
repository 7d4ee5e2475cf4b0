//! 作品集项目相关接口
//!

use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::models::portfolio_projects::{
    PortfolioProjectCreate, PortfolioProjectInfo, PortfolioProjectSearch, PortfolioProjectUpdate,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, info};
use validator::Validate;

/// 根据查询参数搜索作品集项目
///
/// 根据查询参数搜索符合要求的项目列表，支持分页.
///
/// 查询参数由 [`PortfolioProjectSearch`] 参数决定，`title` 为可选参数。
///
/// ## Json化
///
/// 通过`Json(search): Json<PortfolioProjectSearch>`这种语法，框架能自动将body数据反序列化，如果
/// 反序列化失败会直接返回4xx错误。
#[utoipa::path(post,
    path = "/search-portfolio-projects",
    tag = "portfolio-projects",
    request_body = PortfolioProjectSearch,
    responses(
        (status = 200, description = "Search results", body = ReplyList<PortfolioProjectInfo>),
        (status = 400, description = "Invalid search parameters")
    ),
)]
pub async fn find_portfolio_projects(
    State(state): State<AppState>,
    Json(search): Json<PortfolioProjectSearch>,
) -> Result<Json<ReplyList<PortfolioProjectInfo>>, AppError> {
    debug!("🔍 搜索作品集项目 {:#?}", search);

    // 验证输入参数，确保有效性
    search.validate()?;

    let result = state
        .portfolio_projects
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

/// 创建作品集项目
///
/// `image` 为上传图片的原始文件名，保存为 `projects/` 下的相对路径
#[utoipa::path(post,
    path = "/portfolio-projects",
    tag = "portfolio-projects",
    request_body = PortfolioProjectCreate,
    responses(
        (status = 200, description = "Create project result", body = Reply<PortfolioProjectInfo>),
        (status = 400, description = "Invalid project fields")
    )
)]
pub async fn create_portfolio_project(
    State(state): State<AppState>,
    Json(project): Json<PortfolioProjectCreate>,
) -> Result<Json<Reply<PortfolioProjectInfo>>, AppError> {
    debug!("Creating portfolio project {:#?}", project);

    project.validate()?;

    let project = state.portfolio_projects.create_project(project.try_into()?).await?;
    info!("📝 作品集项目已创建: {} (id={})", project, project.id);

    Ok(Json(Reply { data: project.into() }))
}

/// 查询指定作品集项目
#[utoipa::path(get,
    path = "/portfolio-projects/{id}",
    tag = "portfolio-projects",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, body = PortfolioProjectInfo),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_portfolio_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<PortfolioProjectInfo>, AppError> {
    debug!("Getting portfolio project id {:#?}", project_id);

    let project = state.portfolio_projects.get_project_by_id(project_id).await?;

    Ok(Json(project.into()))
}

/// 更新作品集项目
///
/// 根据用户指定的 `id` 和 修改信息 [`PortfolioProjectUpdate`] 来更新项目信息。
#[utoipa::path(patch,
    path = "/portfolio-projects/{id}",
    tag = "portfolio-projects",
    params(("id" = i64, Path, description = "项目ID")),
    request_body = PortfolioProjectUpdate,
    responses(
        (status = 200, body = PortfolioProjectInfo),
        (status = 400, description = "Invalid project fields"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_portfolio_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(info): Json<PortfolioProjectUpdate>,
) -> Result<Json<PortfolioProjectInfo>, AppError> {
    debug!("Updating portfolio project {} with {:#?}", project_id, info);

    info.validate()?;

    let project = state
        .portfolio_projects
        .update_project(project_id, info.try_into()?)
        .await?;

    Ok(Json(project.into()))
}

/// 删除指定的作品集项目
#[utoipa::path(delete,
    path = "/portfolio-projects/{id}",
    tag = "portfolio-projects",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, body = PortfolioProjectInfo),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_portfolio_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<PortfolioProjectInfo>, AppError> {
    debug!("delete portfolio project {:#?}", project_id);

    let project = state.portfolio_projects.delete_project(project_id).await?;
    info!("🗑️ 作品集项目已删除: {}", project);

    Ok(Json(project.into()))
}
