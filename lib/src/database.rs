// lib/src/database.rs

use std::sync::Arc;

use log::warn;
use models::errors::{RecordError, RecordResult};
use models::{FromRecord, Record, Table, ToRecord};

use crate::config::DatabaseConfig;
use crate::storage_engine::{create_storage, InMemoryStorage, RecordStore};

/// Typed front for an underlying `RecordStore`.
///
/// Turns "no such row" into `RecordError::NotFound` and maps rows to
/// entities. Cheap to clone; clones share the store.
#[derive(Debug, Clone)]
pub struct Database {
    storage_engine: Arc<dyn RecordStore>,
}

impl Database {
    /// Opens the backend described by `config`.
    pub async fn new(config: &DatabaseConfig) -> RecordResult<Self> {
        Ok(Database {
            storage_engine: create_storage(config).await?,
        })
    }

    pub fn from_store(storage_engine: Arc<dyn RecordStore>) -> Self {
        Database { storage_engine }
    }

    /// Empty in-memory database.
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryStorage::new()))
    }

    pub fn get_type(&self) -> &'static str {
        self.storage_engine.get_type()
    }

    pub async fn create<T: FromRecord>(&self, table: Table, fields: &impl ToRecord) -> RecordResult<T> {
        let stored = self.storage_engine.insert(table, fields.to_record()).await?;
        T::from_record(&stored)
    }

    pub async fn list<T: FromRecord>(&self, table: Table) -> RecordResult<Vec<T>> {
        self.storage_engine
            .fetch_all(table)
            .await?
            .iter()
            .map(T::from_record)
            .collect()
    }

    pub async fn get<T: FromRecord>(&self, table: Table, id: u64) -> RecordResult<T> {
        match self.storage_engine.fetch_one(table, id).await? {
            Some(row) => T::from_record(&row),
            None => Err(not_found(table, id)),
        }
    }

    pub async fn exists(&self, table: Table, id: u64) -> RecordResult<bool> {
        self.storage_engine.exists(table, id).await
    }

    /// Existence check used before writing a row that references `id`.
    pub async fn require(&self, table: Table, id: u64) -> RecordResult<()> {
        if self.exists(table, id).await? {
            Ok(())
        } else {
            Err(not_found(table, id))
        }
    }

    /// Writes `changes` and returns the row as re-read after the write.
    pub async fn update<T: FromRecord>(&self, table: Table, id: u64, changes: Record) -> RecordResult<T> {
        match self.storage_engine.update(table, id, changes).await? {
            Some(row) => T::from_record(&row),
            None => Err(not_found(table, id)),
        }
    }

    pub async fn delete(&self, table: Table, id: u64) -> RecordResult<()> {
        if self.storage_engine.delete(table, id).await? {
            Ok(())
        } else {
            Err(not_found(table, id))
        }
    }
}

fn not_found(table: Table, id: u64) -> RecordError {
    warn!("{} {} not found", table.entity_name(), id);
    RecordError::not_found(table, id)
}
