use crate::models::common::PageQuery;
use crate::models::validation::{
    blank_to_none, trimmed, trimmed_opt, validate_image_name, validate_link, validate_not_blank,
};
use serde::{Deserialize, Serialize};
use shared_lib::{MediaError, UploadTo};
use utoipa::ToSchema;
use validator::Validate;

/// 搜索作品集项目列表信息
///
/// - `title`为可选参数
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct PortfolioProjectSearch {
    #[schema(example = "orbit")]
    #[validate(length(max = 200))]
    /// 查询的项目标题（模糊搜索）
    pub title: Option<String>,

    /// 查询分页信息
    #[validate(nested)]
    pub page_query: PageQuery,
}

/// 新建作品集项目
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct PortfolioProjectCreate {
    #[schema(example = "Orbit landing page")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    /// 项目标题
    #[serde(deserialize_with = "trimmed")]
    pub title: String,

    #[schema(example = "A landing page with GSAP orbit animations")]
    #[validate(custom(function = "validate_not_blank"))]
    /// 项目描述
    #[serde(deserialize_with = "trimmed")]
    pub description: String,

    #[schema(example = "orbit cover.png")]
    #[validate(custom(function = "validate_image_name"))]
    /// 上传图片的原始文件名，保存时会放到 `projects/` 下
    pub image: String,

    #[schema(example = "https://github.com/example/orbit")]
    #[validate(custom(function = "validate_link"))]
    pub github_link: Option<String>,

    #[schema(example = "https://orbit.example.com")]
    #[validate(custom(function = "validate_link"))]
    pub demo_link: Option<String>,
}

impl TryFrom<PortfolioProjectCreate> for database::PortfolioProjectCreate {
    type Error = MediaError;

    fn try_from(project: PortfolioProjectCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: project.title.trim().to_string(),
            description: project.description.trim().to_string(),
            image: UploadTo::ProjectImages.generate_image_filename(&project.image)?,
            github_link: blank_to_none(project.github_link),
            demo_link: blank_to_none(project.demo_link),
        })
    }
}

/// 修改作品集项目
///
/// 所有字段都是可选的，未提供的字段保持不变；链接传入空字符串表示清空
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct PortfolioProjectUpdate {
    #[schema(example = "Orbit landing page v2")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub description: Option<String>,

    #[schema(example = "orbit-v2.png")]
    #[validate(custom(function = "validate_image_name"))]
    pub image: Option<String>,

    #[validate(custom(function = "validate_link"))]
    pub github_link: Option<String>,

    #[validate(custom(function = "validate_link"))]
    pub demo_link: Option<String>,
}

impl TryFrom<PortfolioProjectUpdate> for database::PortfolioProjectUpdate {
    type Error = MediaError;

    fn try_from(update: PortfolioProjectUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            title: update.title.map(|s| s.trim().to_string()),
            description: update.description.map(|s| s.trim().to_string()),
            image: update
                .image
                .map(|name| UploadTo::ProjectImages.generate_image_filename(&name))
                .transpose()?,
            // 保留 Some("") 以便仓库层清空链接
            github_link: update.github_link.map(|s| s.trim().to_string()),
            demo_link: update.demo_link.map(|s| s.trim().to_string()),
        })
    }
}

/// 作品集项目信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct PortfolioProjectInfo {
    #[schema(example = 15)]
    /// 项目ID
    pub id: i64,

    #[schema(example = "Orbit landing page")]
    pub title: String,

    pub description: String,

    #[schema(example = "projects/orbit_cover.png")]
    /// 图片存储路径
    pub image: String,

    pub github_link: Option<String>,

    pub demo_link: Option<String>,
}

impl From<database::PortfolioProjectInfo> for PortfolioProjectInfo {
    fn from(project: database::PortfolioProjectInfo) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            image: project.image,
            github_link: project.github_link,
            demo_link: project.demo_link,
        }
    }
}
