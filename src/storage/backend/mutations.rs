//! Mutation operations for LinkStore
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, SqlErr, TransactionTrait, sea_query::OnConflict};
use tracing::{debug, error, info};

use super::LinkStore;
use super::converters::{code_for, new_tag_models, new_url_model};
use crate::errors::{Result, TagshortError};

use migration::entities::{tags, urls};

/// Outcome of the conditional insert inside the transaction.
enum InsertOutcome {
    Inserted(i64),
    /// Another row already holds the uri.
    Exists,
}

/// DO NOTHING 冲突或唯一约束冲突都算"已存在"
fn is_uri_conflict(err: &DbErr) -> bool {
    matches!(err, DbErr::RecordNotInserted)
        || matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl LinkStore {
    /// Store `uri` with `tag_list` and return its code.
    ///
    /// Insert-or-get: when a row with the same uri exists (including one
    /// committed by a concurrent caller) its code is returned and the
    /// supplied tags are dropped. A new row and its tags commit together.
    pub async fn add_url(
        &self,
        uri: &str,
        tag_list: &[String],
        creator: Option<i64>,
    ) -> Result<String> {
        let owner = creator.unwrap_or(self.anonymous_id);

        match self.insert_new(uri, tag_list, owner).await? {
            InsertOutcome::Inserted(id) => {
                let code = code_for(id);
                info!("URL stored: {} -> {} ({} tags)", code, uri, tag_list.len());
                Ok(code)
            }
            InsertOutcome::Exists => {
                let code = self.find_code_by_uri(uri).await?.ok_or_else(|| {
                    error!("Unique conflict on {} but no row could be re-read", uri);
                    TagshortError::constraint_violation(format!(
                        "uri conflicts with an existing row that cannot be read: {}",
                        uri
                    ))
                })?;
                debug!("URL already stored: {} -> {}, tags dropped", code, uri);
                Ok(code)
            }
        }
    }

    async fn insert_new(
        &self,
        uri: &str,
        tag_list: &[String],
        owner: i64,
    ) -> Result<InsertOutcome> {
        let txn = self.db.begin().await?;

        let inserted = urls::Entity::insert(new_url_model(uri, owner, Utc::now()))
            .on_conflict(OnConflict::column(urls::Column::Uri).do_nothing().to_owned())
            .exec(&txn)
            .await;

        let id = match inserted {
            Ok(res) => res.last_insert_id,
            Err(e) if is_uri_conflict(&e) => {
                txn.rollback().await?;
                return Ok(InsertOutcome::Exists);
            }
            Err(e) => {
                // txn 在 drop 时回滚
                error!("Failed to insert URL {}: {}", uri, e);
                return Err(e.into());
            }
        };

        if !tag_list.is_empty() {
            tags::Entity::insert_many(new_tag_models(id, tag_list))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to insert tags for URL id {}: {}", id, e);
                    TagshortError::from(e)
                })?;
        }

        txn.commit().await?;
        Ok(InsertOutcome::Inserted(id))
    }
}
