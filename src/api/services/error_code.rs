//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::TagshortError;

/// API 错误码枚举
///
/// 序列化为数字，按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 链接错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    LinkNotFound = 3000,
    LinkConflict = 3001,
    LinkInvalidUrl = 3002,
    LinkDatabaseError = 3005,
    LinkInvalidCode = 3007,
    LinkUnknownCreator = 3008,
}

impl From<&TagshortError> for ErrorCode {
    fn from(err: &TagshortError) -> Self {
        match err {
            TagshortError::InvalidCode(_) => ErrorCode::LinkInvalidCode,
            TagshortError::NotFound(_) => ErrorCode::LinkNotFound,
            TagshortError::StoreUnavailable(_) => ErrorCode::ServiceUnavailable,
            TagshortError::ConstraintViolation(_) => ErrorCode::LinkConflict,
            TagshortError::DatabaseOperation(_) => ErrorCode::LinkDatabaseError,
            TagshortError::Validation(_) => ErrorCode::BadRequest,
            TagshortError::DatabaseConfig(_)
            | TagshortError::Bootstrap(_)
            | TagshortError::Config(_) => ErrorCode::InternalServerError,
        }
    }
}
