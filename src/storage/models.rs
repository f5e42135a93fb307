use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One URL with its creator and every tag, code already encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDetails {
    pub code: String,
    pub uri: String,
    pub creator_name: String,
    pub created: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Projection used by the by-tag listing. Carries no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSummary {
    pub code: String,
    pub uri: String,
    pub creator_name: String,
    pub created: DateTime<Utc>,
}

/// A distinct tag and the number of URLs carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}
