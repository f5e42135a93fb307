//! API 帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::errors::TagshortError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 TagshortError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_tagshort(err: &TagshortError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// Absolute origin for links: configured `public_base_url`, else the
/// scheme and host the request came in on.
pub fn base_url(req: &HttpRequest) -> String {
    let config = crate::config::get_config();
    if let Some(base) = config
        .server
        .public_base_url
        .as_deref()
        .filter(|b| !b.is_empty())
    {
        return base.trim_end_matches('/').to_string();
    }

    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// 短码含 `#`、`$` 等保留字符，拼链接前必须转义
pub fn short_link(base: &str, code: &str) -> String {
    format!("{}/{}", base, urlencoding::encode(code))
}

pub fn details_path(code: &str) -> String {
    format!("/details/{}", urlencoding::encode(code))
}

pub fn details_link(base: &str, code: &str) -> String {
    format!("{}{}", base, details_path(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_escapes_reserved_characters() {
        assert_eq!(short_link("http://h", "b"), "http://h/b");
        assert_eq!(short_link("http://h", "#"), "http://h/%23");
        assert_eq!(short_link("http://h", "T@$"), "http://h/T%40%24");
        assert_eq!(details_path("b!"), "/details/b%21");
    }

    #[test]
    fn test_unreserved_alphabet_characters_pass_through() {
        assert_eq!(short_link("http://h", "2tE"), "http://h/2tE");
        assert_eq!(short_link("http://h", "~-"), "http://h/~-");
    }

    #[test]
    fn test_error_from_tagshort_status() {
        let resp = error_from_tagshort(&TagshortError::store_unavailable("down"));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = error_from_tagshort(&TagshortError::validation("bad url"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
