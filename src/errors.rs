use std::fmt;

use actix_web::http::StatusCode;
use sea_orm::{DbErr, SqlErr};

use crate::codec::DecodeError;

#[derive(Debug, Clone)]
pub enum TagshortError {
    InvalidCode(String),
    NotFound(String),
    StoreUnavailable(String),
    ConstraintViolation(String),
    DatabaseConfig(String),
    DatabaseOperation(String),
    Bootstrap(String),
    Validation(String),
    Config(String),
}

impl TagshortError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TagshortError::InvalidCode(_) => "E001",
            TagshortError::NotFound(_) => "E002",
            TagshortError::StoreUnavailable(_) => "E003",
            TagshortError::ConstraintViolation(_) => "E004",
            TagshortError::DatabaseConfig(_) => "E005",
            TagshortError::DatabaseOperation(_) => "E006",
            TagshortError::Bootstrap(_) => "E007",
            TagshortError::Validation(_) => "E008",
            TagshortError::Config(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TagshortError::InvalidCode(_) => "Invalid Code",
            TagshortError::NotFound(_) => "Resource Not Found",
            TagshortError::StoreUnavailable(_) => "Store Unavailable",
            TagshortError::ConstraintViolation(_) => "Constraint Violation",
            TagshortError::DatabaseConfig(_) => "Database Configuration Error",
            TagshortError::DatabaseOperation(_) => "Database Operation Error",
            TagshortError::Bootstrap(_) => "Bootstrap Error",
            TagshortError::Validation(_) => "Validation Error",
            TagshortError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TagshortError::InvalidCode(msg) => msg,
            TagshortError::NotFound(msg) => msg,
            TagshortError::StoreUnavailable(msg) => msg,
            TagshortError::ConstraintViolation(msg) => msg,
            TagshortError::DatabaseConfig(msg) => msg,
            TagshortError::DatabaseOperation(msg) => msg,
            TagshortError::Bootstrap(msg) => msg,
            TagshortError::Validation(msg) => msg,
            TagshortError::Config(msg) => msg,
        }
    }

    /// HTTP status the web layer answers with.
    ///
    /// Malformed codes and missing rows are indistinguishable to clients.
    pub fn http_status(&self) -> StatusCode {
        match self {
            TagshortError::InvalidCode(_) | TagshortError::NotFound(_) => StatusCode::NOT_FOUND,
            TagshortError::Validation(_) => StatusCode::BAD_REQUEST,
            TagshortError::ConstraintViolation(_) => StatusCode::CONFLICT,
            TagshortError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            TagshortError::DatabaseConfig(_)
            | TagshortError::DatabaseOperation(_)
            | TagshortError::Bootstrap(_)
            | TagshortError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 调用方可以把它当成 404 处理
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TagshortError::InvalidCode(_) | TagshortError::NotFound(_)
        )
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TagshortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TagshortError {}

// 便捷的构造函数
impl TagshortError {
    pub fn invalid_code<T: Into<String>>(msg: T) -> Self {
        TagshortError::InvalidCode(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TagshortError::NotFound(msg.into())
    }

    pub fn store_unavailable<T: Into<String>>(msg: T) -> Self {
        TagshortError::StoreUnavailable(msg.into())
    }

    pub fn constraint_violation<T: Into<String>>(msg: T) -> Self {
        TagshortError::ConstraintViolation(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        TagshortError::DatabaseConfig(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        TagshortError::DatabaseOperation(msg.into())
    }

    pub fn bootstrap<T: Into<String>>(msg: T) -> Self {
        TagshortError::Bootstrap(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TagshortError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        TagshortError::Config(msg.into())
    }
}

/// Whether a backend error means the store could not be reached at all.
pub fn is_connectivity_error(err: &DbErr) -> bool {
    matches!(err, DbErr::ConnectionAcquire(_) | DbErr::Conn(_))
}

impl From<DbErr> for TagshortError {
    fn from(err: DbErr) -> Self {
        if is_connectivity_error(&err) {
            return TagshortError::StoreUnavailable(err.to_string());
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return TagshortError::ConstraintViolation(detail);
            }
            _ => {}
        }
        TagshortError::DatabaseOperation(err.to_string())
    }
}

impl From<DecodeError> for TagshortError {
    fn from(err: DecodeError) -> Self {
        TagshortError::InvalidCode(err.to_string())
    }
}

impl From<config::ConfigError> for TagshortError {
    fn from(err: config::ConfigError) -> Self {
        TagshortError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TagshortError>;
