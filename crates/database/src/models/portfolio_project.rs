//! 作品集项目数据库模型
//!
//! 对应 `main.portfolio_projects` 表：标题、描述、封面图片以及可选的 GitHub / 演示链接

use std::fmt;

/// 作品集项目信息结构体
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PortfolioProjectInfo {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// 图片的存储路径，位于 `projects/` 下
    pub image: String,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
}

/// 展示名称即标题
impl fmt::Display for PortfolioProjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// 作品集项目搜索结果
#[derive(Debug, Clone)]
pub struct PortfolioProjectSearchResult {
    pub projects: Vec<PortfolioProjectInfo>,
    pub total: u32,
}

/// 作品集项目创建参数
#[derive(Debug, Clone)]
pub struct PortfolioProjectCreate {
    pub title: String,
    pub description: String,
    pub image: String,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
}

/// 作品集项目更新参数
///
/// 字段为 `None` 时保留原值；链接字段传入空字符串时清空为 `NULL`
#[derive(Debug, Clone, Default)]
pub struct PortfolioProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
}
