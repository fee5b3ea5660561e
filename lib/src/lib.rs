// lib/src/lib.rs

//! Datastore client: configuration, the `RecordStore` backends and the typed
//! `Database` wrapper used by the REST layer.

pub mod config;
pub mod database;
pub mod storage_engine;

pub use crate::config::{load_database_config, DatabaseConfig, StorageEngineType};
pub use crate::database::Database;
pub use crate::storage_engine::{create_storage, InMemoryStorage, MySQLStorage, RecordStore};
