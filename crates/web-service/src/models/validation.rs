//! 自定义字段校验函数
//!
//! 配合 `#[validate(custom(function = "..."))]` 使用，字段为 `Option` 时只在有值时校验。
//! 文本字段在反序列化时先去掉首尾空白（[`trimmed`] / [`trimmed_opt`]），长度限制按去掉空白后的值计算。

use shared_lib::{MediaError, UploadTo};
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use validator::{ValidateUrl, ValidationError};

/// 链接最大长度
pub const LINK_MAX_LENGTH: usize = 200;

const URL_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "ftps://"];

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// 必填文本不能只包含空白
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "this field may not be blank"));
    }
    Ok(())
}

/// 可选链接：空白表示没有链接，否则必须是长度不超过 200 的 http(s)/ftp(s) 地址
pub fn validate_link(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() > LINK_MAX_LENGTH {
        return Err(error("length", "link must be at most 200 characters"));
    }

    let lower = value.to_ascii_lowercase();
    if !URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) || !value.validate_url() {
        return Err(error("url", "enter a valid URL"));
    }
    Ok(())
}

/// 图片文件名：能生成合法的 `projects/` 路径，且清洗后的文件名仍是图片
pub fn validate_image_name(value: &str) -> Result<(), ValidationError> {
    match UploadTo::ProjectImages.generate_image_filename(value) {
        Ok(_) => Ok(()),
        Err(MediaError::NotAnImage(_)) => Err(error("image", "upload a valid image file")),
        Err(e) => Err(file_name_error(e)),
    }
}

/// 视频文件名：能生成合法的 `videos/` 路径
pub fn validate_video_name(value: &str) -> Result<(), ValidationError> {
    validate_upload(UploadTo::Videos, value)
}

fn validate_upload(upload_to: UploadTo, value: &str) -> Result<(), ValidationError> {
    upload_to.generate_filename(value).map(|_| ()).map_err(file_name_error)
}

fn file_name_error(e: MediaError) -> ValidationError {
    let mut err = ValidationError::new("file_name");
    err.message = Some(Cow::Owned(e.to_string()));
    err
}

/// 反序列化时去掉字符串首尾空白
pub fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

/// [`trimmed`] 的 `Option` 版本，需要配合 `#[serde(default)]` 使用
pub fn trimmed_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| s.trim().to_string()))
}

/// 空白链接统一转换为 `None`
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_not_blank("  \t").is_err());
        assert!(validate_not_blank(" ok ").is_ok());
    }

    #[test]
    fn links() {
        assert!(validate_link("").is_ok());
        assert!(validate_link("   ").is_ok());
        assert!(validate_link("https://github.com/example/repo").is_ok());
        assert!(validate_link("HTTP://EXAMPLE.COM").is_ok());
        assert!(validate_link("github.com/example").is_err());
        assert!(validate_link("mailto:someone@example.com").is_err());

        let long = format!("https://example.com/{}", "a".repeat(LINK_MAX_LENGTH));
        assert_eq!(validate_link(&long).unwrap_err().code, "length");
    }

    #[test]
    fn file_names() {
        assert!(validate_image_name("cover.png").is_ok());
        assert_eq!(validate_image_name("cover.mp4").unwrap_err().code, "image");
        // 清洗后只剩扩展名
        assert_eq!(validate_image_name("$$.png").unwrap_err().code, "image");
        assert_eq!(validate_image_name("???").unwrap_err().code, "file_name");
        assert!(validate_video_name("reel.mp4").is_ok());
        assert_eq!(validate_video_name("???").unwrap_err().code, "file_name");
    }

    #[test]
    fn blank_links_become_none() {
        assert_eq!(blank_to_none(Some("  ".to_string())), None);
        assert_eq!(blank_to_none(None), None);
        assert_eq!(
            blank_to_none(Some(" https://x.dev ".to_string())).as_deref(),
            Some("https://x.dev")
        );
    }
}
