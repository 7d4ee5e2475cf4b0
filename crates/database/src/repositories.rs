//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod portfolio_project;
pub mod traits;
pub mod video_project;

// 重新导出具体的类型
pub use portfolio_project::PortfolioProjectRepository;
pub use traits::{PortfolioProjectRepositoryTrait, VideoProjectRepositoryTrait};
pub use video_project::VideoProjectRepository;

/// 构造 `ILIKE` 子串匹配参数，转义用户输入中的通配符
pub(crate) fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("orbit"), "%orbit%");
        assert_eq!(contains_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
