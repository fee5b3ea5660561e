// lib/src/storage_engine/storage_engine.rs

use async_trait::async_trait;
use models::errors::RecordResult;
use models::{Record, Table};
use std::fmt::Debug;

/// Generic query/execute interface over the three record tables.
///
/// Every call is its own unit of work: a backend acquires a connection, runs
/// the statements the call needs, commits (or rolls back on error) and
/// releases the connection before returning. Rows come back as field-name
/// keyed records with the key column first.
#[async_trait]
pub trait RecordStore: Send + Sync + Debug {
    /// Creates missing tables. Backends without a schema do nothing.
    async fn initialize_schema(&self) -> RecordResult<()> {
        Ok(())
    }

    /// Inserts a row and returns it as stored, including the assigned key.
    async fn insert(&self, table: Table, record: Record) -> RecordResult<Record>;

    /// All rows in key order.
    async fn fetch_all(&self, table: Table) -> RecordResult<Vec<Record>>;

    async fn fetch_one(&self, table: Table, id: u64) -> RecordResult<Option<Record>>;

    async fn exists(&self, table: Table, id: u64) -> RecordResult<bool> {
        Ok(self.fetch_one(table, id).await?.is_some())
    }

    /// Writes exactly the columns in `changes` and re-reads the row.
    /// Returns `None` when no row has the key.
    async fn update(&self, table: Table, id: u64, changes: Record) -> RecordResult<Option<Record>>;

    /// Returns whether a row was removed.
    async fn delete(&self, table: Table, id: u64) -> RecordResult<bool>;

    fn get_type(&self) -> &'static str;
}
