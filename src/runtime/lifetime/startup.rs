use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::storage::{LinkStore, StorageFactory};

pub struct StartupContext {
    pub store: Arc<LinkStore>,
}

/// 准备服务器启动的上下文：连接、迁移、解析 anonymous
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let store = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", store.backend_name());

    let count = store
        .count_urls()
        .await
        .context("Failed to count stored URLs")?;
    info!("{} URLs in store", count);

    debug!("Pre-startup finished in {:?}", start_time.elapsed());
    Ok(StartupContext { store })
}
