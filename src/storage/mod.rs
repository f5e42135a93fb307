use std::sync::Arc;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::LinkStore;
pub use models::{TagCount, UrlDetails, UrlSummary};

pub struct StorageFactory;

impl StorageFactory {
    /// Open the store named by the global config.
    pub async fn create() -> Result<Arc<LinkStore>> {
        let config = crate::config::get_config();
        let database_url = &config.database.database_url;

        let store = LinkStore::new(database_url).await?;
        Ok(Arc::new(store))
    }
}
