use std::sync::Arc;

use catfacts_core::config::{AppConfig, DatabaseConfig};
use catfacts_core::errors::ApplicationError;
use catfacts_core::FactStore;
use catfacts_db::{connect_read_only, FactRepository, RepositoryError, SqlFactRepository};
use thiserror::Error;
use tracing::{info, warn};

pub struct Application {
    pub config: AppConfig,
    pub store: Arc<FactStore>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("fact store unavailable at `{url}`: {source}")]
    StoreUnavailable {
        url: String,
        #[source]
        source: RepositoryError,
    },
}

impl From<BootstrapError> for ApplicationError {
    fn from(value: BootstrapError) -> Self {
        match value {
            BootstrapError::StoreUnavailable { .. } => Self::StoreUnavailable(value.to_string()),
        }
    }
}

/// Loads the fact store before anything is allowed to serve traffic.
pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        database_url = %config.database.url,
        "starting application bootstrap"
    );

    let store = load_fact_store(&config.database).await?;
    if store.is_empty() {
        warn!(
            event_name = "system.bootstrap.facts_empty",
            correlation_id = "bootstrap",
            "facts table is empty; fact requests will fail until the database is repopulated"
        );
    }
    info!(
        event_name = "system.bootstrap.facts_loaded",
        correlation_id = "bootstrap",
        facts_loaded = store.len(),
        categories = store.categories().len(),
        "fact store loaded"
    );

    Ok(Application { config, store: Arc::new(store) })
}

async fn load_fact_store(database: &DatabaseConfig) -> Result<FactStore, BootstrapError> {
    let unavailable = |source: RepositoryError| BootstrapError::StoreUnavailable {
        url: database.url.clone(),
        source,
    };

    let pool = connect_read_only(&database.url, database.max_connections, database.timeout_secs)
        .await
        .map_err(|error| unavailable(RepositoryError::Database(error)))?;

    let loaded = SqlFactRepository::new(pool.clone()).load_all().await;
    // Nothing reads the database after startup.
    pool.close().await;

    Ok(FactStore::new(loaded.map_err(unavailable)?))
}
