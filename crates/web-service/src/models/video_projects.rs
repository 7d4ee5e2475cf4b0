use crate::models::common::PageQuery;
use crate::models::validation::{trimmed, trimmed_opt, validate_not_blank, validate_video_name};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_lib::{MediaError, UploadTo};
use utoipa::ToSchema;
use validator::Validate;

/// 搜索视频项目列表信息
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct VideoProjectSearch {
    #[schema(example = "reel")]
    #[validate(length(max = 100))]
    /// 查询的项目标题（模糊搜索）
    pub title: Option<String>,

    /// 查询分页信息
    #[validate(nested)]
    pub page_query: PageQuery,
}

/// 新建视频项目
///
/// 不接受 `created_at`，由数据库在创建时写入
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct VideoProjectCreate {
    #[schema(example = "Showreel")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    #[serde(deserialize_with = "trimmed")]
    pub title: String,

    #[schema(example = "Motion design highlights")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    #[serde(deserialize_with = "trimmed")]
    pub description: String,

    #[schema(example = "showreel.mp4")]
    #[validate(custom(function = "validate_video_name"))]
    /// 上传视频的原始文件名，保存时会放到 `videos/` 下
    pub video: String,
}

impl TryFrom<VideoProjectCreate> for database::VideoProjectCreate {
    type Error = MediaError;

    fn try_from(project: VideoProjectCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: project.title.trim().to_string(),
            description: project.description.trim().to_string(),
            video: UploadTo::Videos.generate_filename(&project.video)?,
        })
    }
}

/// 修改视频项目
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct VideoProjectUpdate {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,

    #[validate(custom(function = "validate_video_name"))]
    pub video: Option<String>,
}

impl TryFrom<VideoProjectUpdate> for database::VideoProjectUpdate {
    type Error = MediaError;

    fn try_from(update: VideoProjectUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: update.title.map(|s| s.trim().to_string()),
            description: update.description.map(|s| s.trim().to_string()),
            video: update.video.map(|name| UploadTo::Videos.generate_filename(&name)).transpose()?,
        })
    }
}

/// 视频项目信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct VideoProjectInfo {
    #[schema(example = 3)]
    pub id: i64,

    #[schema(example = "Showreel")]
    pub title: String,

    pub description: String,

    #[schema(example = "videos/showreel.mp4")]
    /// 视频存储路径
    pub video: String,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl From<database::VideoProjectInfo> for VideoProjectInfo {
    fn from(project: database::VideoProjectInfo) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            video: project.video,
            created_at: project.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_limits() {
        let ok = VideoProjectCreate {
            title: "t".repeat(100),
            description: "d".repeat(200),
            video: "clip.mov".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = VideoProjectCreate {
            title: "t".repeat(101),
            description: "d".repeat(201),
            video: "clip.mov".to_string(),
        };
        let errors = too_long.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn video_is_stored_under_videos_namespace() {
        let db: database::VideoProjectCreate = VideoProjectCreate {
            title: "Reel".to_string(),
            description: "Highlights".to_string(),
            video: "/home/me/Final Cut.mp4".to_string(),
        }
        .try_into()
        .unwrap();
        assert_eq!(db.video, "videos/Final_Cut.mp4");
    }

    #[test]
    fn json_created_at_is_ignored_on_create() {
        let json = r#"{"title":"Reel","description":"d","video":"a.mp4","created_at":"2000-01-01T00:00:00Z"}"#;
        let project: VideoProjectCreate = serde_json::from_str(json).unwrap();
        let db: database::VideoProjectCreate = project.try_into().unwrap();
        assert_eq!(db.title, "Reel");
    }
}
