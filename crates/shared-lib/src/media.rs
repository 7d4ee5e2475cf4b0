//! 上传文件命名规则
//!
//! 这里只负责生成和校验文件在存储中的相对路径（例如 `projects/cover.png`），
//! 不负责文件内容的实际存储。

use std::fmt;
use thiserror::Error;

/// 文件引用字段的最大长度
pub const FILE_PATH_MAX_LENGTH: usize = 100;

/// 允许作为图片保存的扩展名
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg"];

/// 文件名相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// 文件名清洗后为空或者是保留名称
    #[error("无效的文件名: {0:?}")]
    InvalidFileName(String),

    /// 生成的路径超过字段长度限制
    #[error("文件路径 {path:?} 超过最大长度 {max}")]
    PathTooLong { path: String, max: usize },

    /// 不是图片文件
    #[error("不是有效的图片文件: {0:?}")]
    NotAnImage(String),
}

/// 上传文件所在的命名空间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTo {
    /// 作品集项目图片，保存在 `projects/` 下
    ProjectImages,
    /// 视频项目文件，保存在 `videos/` 下
    Videos,
}

impl UploadTo {
    /// 命名空间前缀（带结尾的 `/`）
    pub fn prefix(&self) -> &'static str {
        match self {
            UploadTo::ProjectImages => "projects/",
            UploadTo::Videos => "videos/",
        }
    }

    /// 根据上传时的原始文件名生成存储路径
    ///
    /// 1. 只保留最后一段文件名，丢弃客户端带上来的目录
    /// 2. 清洗文件名：去掉首尾空白，空格换成 `_`，只保留字母数字和 `_-.`
    /// 3. 拼接命名空间前缀，并检查长度
    ///
    /// ```
    /// use shared_lib::UploadTo;
    ///
    /// let path = UploadTo::ProjectImages.generate_filename("C:\\tmp\\my cover (1).png").unwrap();
    /// assert_eq!(path, "projects/my_cover_1.png");
    /// ```
    pub fn generate_filename(&self, original: &str) -> Result<String, MediaError> {
        let name = valid_file_name(base_name(original));
        if name.is_empty() || name == "." || name == ".." {
            return Err(MediaError::InvalidFileName(original.to_string()));
        }

        let path = format!("{}{}", self.prefix(), name);
        if path.chars().count() > FILE_PATH_MAX_LENGTH {
            return Err(MediaError::PathTooLong {
                path,
                max: FILE_PATH_MAX_LENGTH,
            });
        }
        Ok(path)
    }

    /// 生成图片的存储路径
    ///
    /// 扩展名按清洗后的文件名判断，例如 `$$.png` 清洗后只剩 `.png`，不算图片
    pub fn generate_image_filename(&self, original: &str) -> Result<String, MediaError> {
        let path = self.generate_filename(original)?;
        if !is_image_file_name(&path) {
            return Err(MediaError::NotAnImage(original.to_string()));
        }
        Ok(path)
    }

    /// 判断已保存的路径是否直接位于该命名空间下
    pub fn contains(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix()) {
            Some(rest) => !matches!(rest, "" | "." | "..") && !rest.contains('/') && !rest.contains('\\'),
            None => false,
        }
    }
}

impl fmt::Display for UploadTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches('/'))
    }
}

/// 判断文件名是否为图片（按扩展名，不区分大小写）
pub fn is_image_file_name(name: &str) -> bool {
    base_name(name)
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

fn valid_file_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}
