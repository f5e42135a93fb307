use std::collections::HashMap;

use chrono::{DateTime, Utc};
use migration::entities::{tags, urls, users};

use crate::codec;
use crate::storage::models::{UrlDetails, UrlSummary};

/// 行 id 转公开短码
#[inline]
pub fn code_for(id: i64) -> String {
    codec::encode(id.max(0) as u64)
}

/// ActiveModel for a new URL row; the id is assigned by the backend.
pub fn new_url_model(uri: &str, owner: i64, created: DateTime<Utc>) -> urls::ActiveModel {
    use sea_orm::ActiveValue::*;

    urls::ActiveModel {
        id: NotSet,
        uri: Set(uri.to_string()),
        owner: Set(owner),
        created: Set(created),
    }
}

/// One tag row per entry, in the given order, duplicates kept.
pub fn new_tag_models(url_id: i64, tag_list: &[String]) -> Vec<tags::ActiveModel> {
    use sea_orm::ActiveValue::*;

    tag_list
        .iter()
        .map(|tag| tags::ActiveModel {
            id: NotSet,
            tag: Set(tag.clone()),
            url: Set(url_id),
        })
        .collect()
}

/// Group tag rows by owning URL id. Input order is preserved per URL.
pub fn group_tags(rows: Vec<tags::Model>) -> HashMap<i64, Vec<String>> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        grouped.entry(row.url).or_default().push(row.tag);
    }
    grouped
}

/// Build a details record. Rows without a resolvable creator are dropped
/// (inner-join semantics).
pub fn details_from_rows(
    url: urls::Model,
    creator: Option<users::Model>,
    tags: Vec<String>,
) -> Option<UrlDetails> {
    let creator = creator?;
    Some(UrlDetails {
        code: code_for(url.id),
        uri: url.uri,
        creator_name: creator.name,
        created: url.created,
        tags,
    })
}

pub fn summary_from_rows(url: urls::Model, creator: Option<users::Model>) -> Option<UrlSummary> {
    let creator = creator?;
    Some(UrlSummary {
        code: code_for(url.id),
        uri: url.uri,
        creator_name: creator.name,
        created: url.created,
    })
}
