use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Loads from the default location on first
/// use if [`init_config`] was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)))
        .load_full()
}

/// Initialize the global configuration from `config.toml` + environment.
///
/// # Examples
/// ```no_run
/// use tagshort::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)));
}

/// Initialize from an explicit file, surfacing load errors.
///
/// If the configuration was already initialized, it is replaced.
pub fn init_config_from(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    let config = Arc::new(StaticConfig::try_load(path)?);
    CONFIG
        .get_or_init(|| ArcSwap::new(config.clone()))
        .store(config.clone());
    Ok(config)
}
