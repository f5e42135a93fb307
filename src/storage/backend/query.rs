//! Query operations for LinkStore
//!
//! This module contains all read-only database operations.

use sea_orm::sea_query::{Expr, Func, Query};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::{debug, trace};

use super::LinkStore;
use super::converters::{code_for, details_from_rows, group_tags, summary_from_rows};
use crate::codec;
use crate::errors::Result;
use crate::storage::models::{TagCount, UrlDetails, UrlSummary};

use migration::entities::{tags, urls, users};

/// 按名字查 creator id（构造时解析 anonymous 也用它）
pub(super) async fn find_creator_id<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<i64>> {
    let creator = users::Entity::find()
        .filter(users::Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(creator.map(|u| u.id))
}

/// Decode a public code into a row id.
///
/// Codec failures are errors; a value beyond the backend's integer range
/// cannot name a row and yields `None`.
fn row_id(code: &str) -> Result<Option<i64>> {
    let value = codec::decode(code)?;
    Ok(i64::try_from(value).ok())
}

impl LinkStore {
    /// Destination for a code, `None` when no row matches.
    pub async fn get_url(&self, code: &str) -> Result<Option<String>> {
        let Some(id) = row_id(code)? else {
            trace!("Code {} is beyond the id range", code);
            return Ok(None);
        };

        let found = urls::Entity::find_by_id(id).one(&self.db).await?;
        debug!("get_url({}) -> id {} found={}", code, id, found.is_some());
        Ok(found.map(|m| m.uri))
    }

    /// Full record for a code: creator name and every tag.
    pub async fn get_url_details(&self, code: &str) -> Result<Option<UrlDetails>> {
        let Some(id) = row_id(code)? else {
            return Ok(None);
        };

        let Some((url, creator)) = urls::Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let tag_list: Vec<String> = tags::Entity::find()
            .filter(tags::Column::Url.eq(id))
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|t| t.tag)
            .collect();

        Ok(details_from_rows(url, creator, tag_list))
    }

    /// Every URL with creator and tags. Full scan, no pagination.
    pub async fn list_url_details(&self) -> Result<Vec<UrlDetails>> {
        let rows = urls::Entity::find()
            .order_by_asc(urls::Column::Id)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await?;

        let tag_rows = tags::Entity::find()
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await?;
        let mut grouped = group_tags(tag_rows);

        let details: Vec<UrlDetails> = rows
            .into_iter()
            .filter_map(|(url, creator)| {
                let tag_list = grouped.remove(&url.id).unwrap_or_default();
                details_from_rows(url, creator, tag_list)
            })
            .collect();

        debug!("Listed {} URLs with details", details.len());
        Ok(details)
    }

    /// Distinct tags with the number of URLs carrying each.
    ///
    /// A tag repeated on the same URL counts that URL once.
    pub async fn list_tags(&self) -> Result<Vec<TagCount>> {
        let rows: Vec<(String, i64)> = tags::Entity::find()
            .select_only()
            .column(tags::Column::Tag)
            .column_as(Expr::from(Func::count_distinct(Expr::col(tags::Column::Url))), "count")
            .group_by(tags::Column::Tag)
            .order_by_asc(tags::Column::Tag)
            .into_tuple()
            .all(&self.db)
            .await?;

        trace!("Tag cloud: {} distinct tags", rows.len());
        Ok(rows
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag,
                count: u64::try_from(count).unwrap_or_default(),
            })
            .collect())
    }

    /// URLs carrying exactly `tag` (case-sensitive). No tags in the result.
    pub async fn list_urls_by_tag(&self, tag: &str) -> Result<Vec<UrlSummary>> {
        let tagged = Query::select()
            .column(tags::Column::Url)
            .from(tags::Entity)
            .and_where(tags::Column::Tag.eq(tag))
            .to_owned();

        let rows = urls::Entity::find()
            .filter(urls::Column::Id.in_subquery(tagged))
            .order_by_asc(urls::Column::Id)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(url, creator)| summary_from_rows(url, creator))
            .collect())
    }

    /// Id of the creator with this display name.
    pub async fn creator_id(&self, name: &str) -> Result<Option<i64>> {
        find_creator_id(&self.db, name).await
    }

    /// Code of the row already holding `uri`.
    pub async fn find_code_by_uri(&self, uri: &str) -> Result<Option<String>> {
        let found = urls::Entity::find()
            .filter(urls::Column::Uri.eq(uri))
            .one(&self.db)
            .await?;
        Ok(found.map(|m| code_for(m.id)))
    }

    pub async fn count_urls(&self) -> Result<u64> {
        Ok(urls::Entity::find().count(&self.db).await?)
    }
}
