use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误
    #[error("数据库操作错误: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    MigrationError(String),

    /// 记录不存在
    #[error("记录不存在: {0}")]
    NotFound(String),

    /// 数据不满足约束
    #[error("数据校验错误: {0}")]
    ValidationError(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }

    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// 创建数据校验错误
    pub fn validation<T: ToString>(msg: T) -> Self {
        Self::ValidationError(msg.to_string())
    }

    /// 将违反数据库约束（长度、非空等）的错误归类为 [`DatabaseError::ValidationError`]
    ///
    /// PostgreSQL 错误码参考：
    /// - `22001` string_data_right_truncation
    /// - `23502` not_null_violation
    /// - `23514` check_violation
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(db_err.code().as_deref(), Some("22001" | "23502" | "23514")) {
                return Self::ValidationError(db_err.message().to_string());
            }
        }
        Self::SqlxError(err)
    }
}
