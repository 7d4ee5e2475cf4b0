//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 程序配置
//! - 上传文件的命名空间与文件名规则

pub mod media;
pub mod models;

// 重新导出常用类型
pub use media::{is_image_file_name, MediaError, UploadTo, FILE_PATH_MAX_LENGTH};
pub use models::AppConfig;
