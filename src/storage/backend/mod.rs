//! SeaORM link store
//!
//! The only gateway between public codes and integer-keyed rows. Supports
//! SQLite and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::errors::{Result, TagshortError};
use migration::ANONYMOUS_CREATOR;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{
    code_for, details_from_rows, group_tags, new_tag_models, new_url_model, summary_from_rows,
};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(TagshortError::database_config(format!(
            "cannot infer database type from URL: {}. Supported: sqlite://, postgres://",
            database_url
        )))
    }
}

/// URL + tag store backed by a pooled SeaORM connection.
///
/// Holds no mutable state: the anonymous creator id is resolved once in
/// the constructor. Cloning shares the pool.
#[derive(Clone)]
pub struct LinkStore {
    db: DatabaseConnection,
    backend_name: String,
    anonymous_id: i64,
}

impl LinkStore {
    /// Connect, migrate and resolve the anonymous creator.
    pub async fn new(database_url: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(TagshortError::database_config("DATABASE_URL is not set"));
        }

        let backend_name = infer_backend_from_url(database_url)?;

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, &backend_name).await?
        };

        run_migrations(&db).await?;

        let store = Self::with_connection(db, &backend_name).await?;
        warn!("{} storage initialized.", store.backend_name.to_uppercase());
        Ok(store)
    }

    /// Wrap an already-migrated connection.
    ///
    /// Fails with [`TagshortError::Bootstrap`] when the `anonymous` user row
    /// is missing.
    pub async fn with_connection(db: DatabaseConnection, backend_name: &str) -> Result<Self> {
        let anonymous_id = query::find_creator_id(&db, ANONYMOUS_CREATOR)
            .await?
            .ok_or_else(|| {
                TagshortError::bootstrap(format!(
                    "creator '{}' does not exist; the users table must be seeded before the store starts",
                    ANONYMOUS_CREATOR
                ))
            })?;

        info!("Anonymous creator resolved to id {}", anonymous_id);

        Ok(Self {
            db,
            backend_name: backend_name.to_string(),
            anonymous_id,
        })
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    pub fn anonymous_id(&self) -> i64 {
        self.anonymous_id
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
