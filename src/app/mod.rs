// Application wiring: builds the directory and helper from configuration.

use crate::adapters::advisor::{HttpCategoryAdvisor, KeywordAdvisor};
use crate::adapters::storage::LocalStorage;
use crate::config::AppConfig;
use crate::core::catalog::CatalogStore;
use crate::core::directory::Directory;
use crate::core::persistence::CatalogPersistence;
use crate::domain::ports::CategoryAdvisor;
use crate::utils::error::Result;

/// Opens the on-disk catalog described by `config`.
pub fn open_directory(config: &AppConfig) -> Result<Directory<LocalStorage>> {
    config.validate_config()?;

    let storage = LocalStorage::new(&config.storage.data_dir);
    let persistence = CatalogPersistence::new(storage, config.storage_keys());

    if config.storage.purge_legacy {
        match persistence.purge_legacy() {
            Ok(0) => {}
            Ok(removed) => tracing::info!("🧹 Purged {} legacy keys", removed),
            Err(e) => tracing::warn!("⚠️ Could not purge legacy keys: {}", e),
        }
    }

    tracing::debug!(
        "Opening catalog in {} (schema v{})",
        config.storage.data_dir,
        config.storage.schema_version
    );
    Ok(Directory::new(CatalogStore::open(persistence)))
}

/// The remote helper when an endpoint is configured, otherwise keyword lookup.
pub fn build_advisor(config: &AppConfig) -> Result<Box<dyn CategoryAdvisor>> {
    match &config.advisor.endpoint {
        Some(endpoint) => Ok(Box::new(HttpCategoryAdvisor::new(
            endpoint.clone(),
            config.advisor_timeout(),
        )?)),
        None => Ok(Box::new(KeywordAdvisor)),
    }
}
