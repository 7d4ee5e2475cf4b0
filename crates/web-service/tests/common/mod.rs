//! 集成测试公共工具：内存仓库实现与请求辅助函数

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use database::{
    DatabaseError, DatabaseResult, PortfolioProjectCreate, PortfolioProjectInfo, PortfolioProjectRepositoryTrait,
    PortfolioProjectSearchResult, PortfolioProjectUpdate, VideoProjectCreate, VideoProjectInfo,
    VideoProjectRepositoryTrait, VideoProjectSearchResult, VideoProjectUpdate,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::AppState;

fn matches_title(title: &str, keyword: &Option<String>) -> bool {
    match keyword.as_deref() {
        None | Some("") => true,
        Some(k) => title.to_lowercase().contains(&k.to_lowercase()),
    }
}

fn page<T: Clone>(items: &[T], page_size: i64, offset: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset as usize)
        .take(page_size as usize)
        .cloned()
        .collect()
}

/// 内存版作品集项目仓库
#[derive(Default)]
pub struct InMemoryPortfolioProjects {
    rows: Mutex<Vec<PortfolioProjectInfo>>,
}

#[async_trait::async_trait]
impl PortfolioProjectRepositoryTrait for InMemoryPortfolioProjects {
    async fn find_projects(
        &self,
        title: Option<String>,
        page_size: i64,
        offset: i64,
    ) -> DatabaseResult<PortfolioProjectSearchResult> {
        let rows = self.rows.lock().await;
        let filtered: Vec<_> = rows.iter().filter(|p| matches_title(&p.title, &title)).cloned().collect();
        Ok(PortfolioProjectSearchResult {
            total: filtered.len() as u32,
            projects: page(&filtered, page_size, offset),
        })
    }

    async fn create_project(&self, project: PortfolioProjectCreate) -> DatabaseResult<PortfolioProjectInfo> {
        let mut rows = self.rows.lock().await;
        let info = PortfolioProjectInfo {
            id: rows.last().map_or(1, |p| p.id + 1),
            title: project.title,
            description: project.description,
            image: project.image,
            github_link: project.github_link,
            demo_link: project.demo_link,
        };
        rows.push(info.clone());
        Ok(info)
    }

    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<PortfolioProjectInfo> {
        let rows = self.rows.lock().await;
        rows.iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("作品集项目 {id}")))
    }

    async fn update_project(&self, id: i64, update: PortfolioProjectUpdate) -> DatabaseResult<PortfolioProjectInfo> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("作品集项目 {id}")))?;

        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(image) = update.image {
            row.image = image;
        }
        if let Some(link) = update.github_link {
            row.github_link = Some(link).filter(|l| !l.is_empty());
        }
        if let Some(link) = update.demo_link {
            row.demo_link = Some(link).filter(|l| !l.is_empty());
        }
        Ok(row.clone())
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<PortfolioProjectInfo> {
        let mut rows = self.rows.lock().await;
        let index = rows
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("作品集项目 {id}")))?;
        Ok(rows.remove(index))
    }
}

/// 内存版视频项目仓库，`created_at` 每次创建递增一分钟
#[derive(Default)]
pub struct InMemoryVideoProjects {
    rows: Mutex<Vec<VideoProjectInfo>>,
}

#[async_trait::async_trait]
impl VideoProjectRepositoryTrait for InMemoryVideoProjects {
    async fn find_projects(
        &self,
        title: Option<String>,
        page_size: i64,
        offset: i64,
    ) -> DatabaseResult<VideoProjectSearchResult> {
        let rows = self.rows.lock().await;
        let mut filtered: Vec<_> = rows.iter().filter(|p| matches_title(&p.title, &title)).cloned().collect();
        filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(VideoProjectSearchResult {
            total: filtered.len() as u32,
            projects: page(&filtered, page_size, offset),
        })
    }

    async fn create_project(&self, project: VideoProjectCreate) -> DatabaseResult<VideoProjectInfo> {
        let mut rows = self.rows.lock().await;
        let id = rows.last().map_or(1, |p| p.id + 1);
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let info = VideoProjectInfo {
            id,
            title: project.title,
            description: project.description,
            video: project.video,
            created_at: epoch + Duration::minutes(id),
        };
        rows.push(info.clone());
        Ok(info)
    }

    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<VideoProjectInfo> {
        let rows = self.rows.lock().await;
        rows.iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("视频项目 {id}")))
    }

    async fn update_project(&self, id: i64, update: VideoProjectUpdate) -> DatabaseResult<VideoProjectInfo> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("视频项目 {id}")))?;

        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(video) = update.video {
            row.video = video;
        }
        Ok(row.clone())
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<VideoProjectInfo> {
        let mut rows = self.rows.lock().await;
        let index = rows
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("视频项目 {id}")))?;
        Ok(rows.remove(index))
    }
}

/// 使用内存仓库构建完整路由
pub fn build_test_app() -> Router {
    create_app_router(AppState {
        portfolio_projects: Arc::new(InMemoryPortfolioProjects::default()),
        video_projects: Arc::new(InMemoryVideoProjects::default()),
    })
}

/// 发送请求，返回状态码和 JSON 响应（非 JSON 时为 `Value::Null`）
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
