// lib/src/storage_engine/inmemory_storage.rs
use super::storage_engine::RecordStore;
use super::storage_utils::check_columns;
use async_trait::async_trait;
use log::debug;
use models::errors::{RecordError, RecordResult};
use models::{Record, Table};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct TableRows {
    last_id: u64, // AUTO_INCREMENT counter; ids are never reused
    rows: BTreeMap<u64, Record>,
}

/// Process-local record store used by tests and `--engine inmemory` runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    tables: Arc<RwLock<HashMap<Table, TableRows>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryStorage {
    async fn insert(&self, table: Table, record: Record) -> RecordResult<Record> {
        check_columns(table, &record)?;
        if record.is_empty() {
            return Err(RecordError::StorageError(format!("empty insert into {}", table)));
        }
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table).or_default();
        rows.last_id += 1;
        let id = rows.last_id;
        let mut stored = Record::new().with(table.key_column(), id);
        stored.merge(&record);
        rows.rows.insert(id, stored.clone());
        debug!("Inserted {} row {}", table, id);
        Ok(stored)
    }

    async fn fetch_all(&self, table: Table) -> RecordResult<Vec<Record>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&table)
            .map(|rows| rows.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch_one(&self, table: Table, id: u64) -> RecordResult<Option<Record>> {
        let tables = self.tables.read().await;
        Ok(tables.get(&table).and_then(|rows| rows.rows.get(&id).cloned()))
    }

    async fn update(&self, table: Table, id: u64, changes: Record) -> RecordResult<Option<Record>> {
        check_columns(table, &changes)?;
        let mut tables = self.tables.write().await;
        let row = tables
            .get_mut(&table)
            .and_then(|rows| rows.rows.get_mut(&id));
        Ok(row.map(|row| {
            row.merge(&changes);
            row.clone()
        }))
    }

    async fn delete(&self, table: Table, id: u64) -> RecordResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .get_mut(&table)
            .map(|rows| rows.rows.remove(&id).is_some())
            .unwrap_or(false))
    }

    fn get_type(&self) -> &'static str {
        "inmemory"
    }
}
