//! API 类型定义

use serde::{Deserialize, Serialize};

use crate::storage::{TagCount, UrlDetails, UrlSummary};

/// 统一响应包装
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// `POST /new` 表单
#[derive(Deserialize, Clone, Debug)]
pub struct NewUrlForm {
    pub url: String,
    /// comma separated
    #[serde(default)]
    pub tags: Option<String>,
}

/// `POST /api/urls` 请求体
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CreateUrlRequest {
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creator display name; anonymous when absent.
    #[serde(default)]
    pub creator: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreatedUrl {
    pub code: String,
    pub short_url: String,
    pub details_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UrlDetailsView {
    #[serde(flatten)]
    pub details: UrlDetails,
    pub short_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UrlSummaryView {
    #[serde(flatten)]
    pub summary: UrlSummary,
    pub short_url: String,
}

/// 标签云
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagCloud {
    pub tags: Vec<TagCount>,
    /// Largest count, 0 when there are no tags. Clients scale by it.
    pub max_count: u64,
}

impl TagCloud {
    pub fn new(tags: Vec<TagCount>) -> Self {
        let max_count = tags.iter().map(|t| t.count).max().unwrap_or(0);
        Self { tags, max_count }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub response_time_ms: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub backend: String,
}
