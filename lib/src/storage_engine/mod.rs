// lib/src/storage_engine/mod.rs

pub mod inmemory_storage;
pub mod mysql_storage;
pub mod storage_engine;
pub mod storage_utils;

pub use inmemory_storage::InMemoryStorage;
pub use mysql_storage::MySQLStorage;
pub use storage_engine::RecordStore;

use crate::config::{DatabaseConfig, StorageEngineType};
use log::info;
use models::errors::RecordResult;
use std::sync::Arc;

/// Opens the backend named by `config.engine` and, when `init_schema` is set,
/// makes sure its tables exist.
pub async fn create_storage(config: &DatabaseConfig) -> RecordResult<Arc<dyn RecordStore>> {
    let storage: Arc<dyn RecordStore> = match config.engine {
        StorageEngineType::MySQL => Arc::new(MySQLStorage::new(config)?),
        StorageEngineType::InMemory => Arc::new(InMemoryStorage::new()),
    };
    if config.init_schema {
        storage.initialize_schema().await?;
    }
    info!("Using {} record store", storage.get_type());
    Ok(storage)
}
