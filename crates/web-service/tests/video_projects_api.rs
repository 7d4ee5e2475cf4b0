//! 视频项目接口测试

mod common;

use axum::http::{Method, StatusCode};
use common::{build_test_app, send};
use serde_json::json;

async fn create(app: &axum::Router, title: &str) -> serde_json::Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/video-projects",
        Some(json!({
            "title": title,
            "description": "Motion design highlights",
            "video": format!("{title}.mp4"),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"].clone()
}

#[tokio::test]
async fn create_stores_video_under_namespace_with_timestamp() {
    let app = build_test_app();
    let project = create(&app, "Showreel").await;

    assert_eq!(project["title"], "Showreel");
    assert_eq!(project["video"], "videos/Showreel.mp4");
    assert!(project["created_at"].is_string());
}

#[tokio::test]
async fn created_at_is_not_changed_by_updates() {
    let app = build_test_app();
    let project = create(&app, "Showreel").await;
    let uri = format!("/api/v1/video-projects/{}", project["id"]);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({
            "description": "Recut",
            "video": "recut.webm",
            "created_at": "1999-12-31T23:59:59Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "Recut");
    assert_eq!(updated["video"], "videos/recut.webm");
    assert_eq!(updated["created_at"], project["created_at"]);
}

#[tokio::test]
async fn field_limits_are_enforced() {
    let app = build_test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/video-projects",
        Some(json!({"title": "t".repeat(101), "description": "d", "video": "a.mp4"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/video-projects",
        Some(json!({"title": "t", "description": "d".repeat(201), "video": "a.mp4"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/video-projects",
        Some(json!({"title": "t", "description": "d", "video": "../"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_lists_newest_first() {
    let app = build_test_app();
    for title in ["first", "second", "third"] {
        create(&app, title).await;
    }

    let (status, page) = send(
        &app,
        Method::POST,
        "/api/v1/search-video-projects",
        Some(json!({"page_query": {"page_index": 1, "page_size": 20}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 3);
    let titles: Vec<_> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn delete_removes_project() {
    let app = build_test_app();
    let project = create(&app, "Showreel").await;
    let uri = format!("/api/v1/video-projects/{}", project["id"]);

    let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], project["id"]);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_search_title_and_padded_fields() {
    let app = build_test_app();
    create(&app, "Showreel").await;

    let (status, page) = send(
        &app,
        Method::POST,
        "/api/v1/search-video-projects",
        Some(json!({"title": "", "page_query": {"page_index": 1, "page_size": 10}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/video-projects",
        Some(json!({
            "title": format!("  {}  ", "v".repeat(100)),
            "description": " Motion design highlights ",
            "video": "reel.mp4",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["data"]["title"], "v".repeat(100));
    assert_eq!(created["data"]["description"], "Motion design highlights");
}
