//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::portfolio_projects::__path_create_portfolio_project;
use crate::routes::portfolio_projects::__path_delete_portfolio_project;
use crate::routes::portfolio_projects::__path_find_portfolio_projects;
use crate::routes::portfolio_projects::__path_get_portfolio_project;
use crate::routes::portfolio_projects::__path_update_portfolio_project;
use crate::routes::portfolio_projects::{
    create_portfolio_project, delete_portfolio_project, find_portfolio_projects, get_portfolio_project,
    update_portfolio_project,
};
use crate::routes::video_projects::__path_create_video_project;
use crate::routes::video_projects::__path_delete_video_project;
use crate::routes::video_projects::__path_find_video_projects;
use crate::routes::video_projects::__path_get_video_project;
use crate::routes::video_projects::__path_update_video_project;
use crate::routes::video_projects::{
    create_video_project, delete_video_project, find_video_projects, get_video_project, update_video_project,
};
use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod portfolio_projects;
pub mod video_projects;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放各个仓库实例。
///
/// ## **❗️注意事项：**
///
/// 同一个 [`routes!`] 宏里的接口必须共用同一个路径，不同路径需要拆开定义：
///
/// ```rust,ignore
/// .routes(routes!(create_portfolio_project))
/// .routes(routes!(get_portfolio_project, update_portfolio_project))
/// ```
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_portfolio_projects))
        .routes(routes!(create_portfolio_project))
        .routes(routes!(get_portfolio_project, update_portfolio_project, delete_portfolio_project))
        .routes(routes!(find_video_projects))
        .routes(routes!(create_video_project))
        .routes(routes!(get_video_project, update_video_project, delete_video_project))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "portfolio-projects", description = "作品集项目：标题、描述、封面图片和外部链接"),
            (name = "video-projects", description = "视频项目：标题、简介、视频文件和创建时间"),
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .merge(Scalar::with_url("/docs", api))
        .route("/health", get(health::health_check))
}
