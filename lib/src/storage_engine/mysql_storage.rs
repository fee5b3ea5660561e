// lib/src/storage_engine/mysql_storage.rs
// NOTE: Assumes the `patients`, `medical_tests` and `diagnosis` tables created by
// `initialize_schema` (see storage_utils::create_table_statement).

use super::storage_engine::RecordStore;
use super::storage_utils::{
    check_columns, create_table_statement, delete_statement, exists_statement, insert_statement,
    lock_row_statement, select_all_statement, select_one_statement, update_statement,
};
use crate::config::DatabaseConfig;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use models::errors::{RecordError, RecordResult};
use models::{FieldValue, Record, Table};
use mysql::prelude::*;
use mysql::{OptsBuilder, Pool, PoolConstraints, PoolOpts, Row, Transaction, TxOpts, Value};

fn storage_error(err: mysql::Error) -> RecordError {
    RecordError::StorageError(err.to_string())
}

fn to_mysql_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Integer(i) => Value::Int(*i),
        FieldValue::Float(f) => Value::Double(*f),
        FieldValue::Null => Value::NULL,
    }
}

fn params_for(record: &Record) -> Vec<Value> {
    record.values().map(to_mysql_value).collect()
}

fn from_mysql_value(column: &str, value: &Value) -> RecordResult<FieldValue> {
    match value {
        Value::NULL => Ok(FieldValue::Null),
        Value::Int(i) => Ok(FieldValue::Integer(*i)),
        Value::UInt(u) => Ok(i64::try_from(*u)
            .map(FieldValue::Integer)
            .unwrap_or(FieldValue::Float(*u as f64))),
        Value::Float(f) => Ok(FieldValue::Float(f64::from(*f))),
        Value::Double(f) => Ok(FieldValue::Float(*f)),
        // Text protocol and DECIMAL columns arrive as bytes.
        Value::Bytes(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            text.parse::<i64>()
                .map(FieldValue::Integer)
                .or_else(|_| text.parse::<f64>().map(FieldValue::Float))
                .map_err(|_| {
                    RecordError::MalformedRow(format!("column '{}' holds non-numeric data", column))
                })
        }
        other => Err(RecordError::MalformedRow(format!(
            "column '{}' holds unsupported value {:?}",
            column, other
        ))),
    }
}

fn row_to_record(row: &Row) -> RecordResult<Record> {
    let mut record = Record::new();
    for (index, column) in row.columns_ref().iter().enumerate() {
        let name = column.name_str();
        let value = match row.as_ref(index) {
            Some(value) => from_mysql_value(&name, value)?,
            None => FieldValue::Null,
        };
        record.set(name.into_owned(), value);
    }
    Ok(record)
}

fn select_row(tx: &mut Transaction<'_>, table: Table, id: u64) -> RecordResult<Option<Record>> {
    let row: Option<Row> = tx
        .exec_first(select_one_statement(table), (id,))
        .map_err(storage_error)?;
    row.as_ref().map(row_to_record).transpose()
}

/// MySQL backend. Holds a connection pool; each call checks out its own
/// connection and never shares it with another call.
#[derive(Clone)]
pub struct MySQLStorage {
    pool: Pool,
}

impl std::fmt::Debug for MySQLStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySQLStorage").finish_non_exhaustive()
    }
}

impl MySQLStorage {
    pub fn new(config: &DatabaseConfig) -> RecordResult<Self> {
        let constraints = PoolConstraints::new(config.pool_min, config.pool_max).ok_or_else(|| {
            RecordError::ConfigError(format!(
                "invalid pool bounds: min {} max {}",
                config.pool_min, config.pool_max
            ))
        })?;
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(config.host.clone()))
            .tcp_port(config.port)
            .user(Some(config.user.clone()))
            .pass(Some(config.password.clone()))
            .db_name(Some(config.database.clone()))
            .pool_opts(PoolOpts::default().with_constraints(constraints));
        // The driver's message never carries the password; describe() omits it too.
        let pool = Pool::new(opts).map_err(|e| {
            RecordError::ConnectionError(format!("{} ({})", e, config.describe()))
        })?;
        info!("Connected to MySQL at {}", config.describe());
        Ok(MySQLStorage { pool })
    }

    /// Runs `work` inside one transaction on a pooled connection. Commits on
    /// success, rolls back on error, and returns the connection to the pool
    /// before the result is handed back.
    async fn unit_of_work<T, F>(&self, label: &'static str, work: F) -> RecordResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Transaction<'_>) -> RecordResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get_conn()
                .map_err(|e| RecordError::ConnectionError(e.to_string()))?;
            let mut tx = conn
                .start_transaction(TxOpts::default())
                .map_err(storage_error)?;
            match work(&mut tx) {
                Ok(value) => {
                    tx.commit().map_err(storage_error)?;
                    Ok(value)
                }
                Err(err) => {
                    warn!("Rolling back {}: {}", label, err);
                    if let Err(rollback_err) = tx.rollback() {
                        error!("Rollback of {} failed: {}", label, rollback_err);
                    }
                    Err(err)
                }
            }
        })
        .await
        .map_err(|e| RecordError::InternalError(format!("Task failed to join: {:?}", e)))?
    }
}

#[async_trait]
impl RecordStore for MySQLStorage {
    async fn initialize_schema(&self) -> RecordResult<()> {
        self.unit_of_work("initialize_schema", |tx| {
            for table in Table::ALL {
                tx.query_drop(create_table_statement(table)).map_err(storage_error)?;
            }
            Ok(())
        })
        .await?;
        info!("MySQL schema is in place");
        Ok(())
    }

    async fn insert(&self, table: Table, record: Record) -> RecordResult<Record> {
        check_columns(table, &record)?;
        let statement = insert_statement(table, &record);
        debug!("{}", statement);
        self.unit_of_work("insert", move |tx| {
            tx.exec_drop(&statement, params_for(&record)).map_err(storage_error)?;
            let id = tx.last_insert_id().ok_or_else(|| {
                RecordError::StorageError(format!("no key assigned by insert into {}", table))
            })?;
            select_row(tx, table, id)?.ok_or_else(|| {
                RecordError::StorageError(format!("inserted {} row {} vanished", table, id))
            })
        })
        .await
    }

    async fn fetch_all(&self, table: Table) -> RecordResult<Vec<Record>> {
        self.unit_of_work("fetch_all", move |tx| {
            let rows: Vec<Row> = tx.query(select_all_statement(table)).map_err(storage_error)?;
            rows.iter().map(row_to_record).collect()
        })
        .await
    }

    async fn fetch_one(&self, table: Table, id: u64) -> RecordResult<Option<Record>> {
        self.unit_of_work("fetch_one", move |tx| select_row(tx, table, id)).await
    }

    async fn exists(&self, table: Table, id: u64) -> RecordResult<bool> {
        self.unit_of_work("exists", move |tx| {
            let found: Option<u8> = tx
                .exec_first(exists_statement(table), (id,))
                .map_err(storage_error)?;
            Ok(found.is_some())
        })
        .await
    }

    async fn update(&self, table: Table, id: u64, changes: Record) -> RecordResult<Option<Record>> {
        check_columns(table, &changes)?;
        if changes.is_empty() {
            return Err(RecordError::StorageError(format!("empty update of {} row {}", table, id)));
        }
        let statement = update_statement(table, &changes);
        debug!("{}", statement);
        self.unit_of_work("update", move |tx| {
            // MySQL reports zero affected rows for no-op updates, so presence is
            // decided by the locking probe, not by the UPDATE itself.
            let locked: Option<u64> = tx
                .exec_first(lock_row_statement(table), (id,))
                .map_err(storage_error)?;
            if locked.is_none() {
                return Ok(None);
            }
            let mut params = params_for(&changes);
            params.push(Value::from(id));
            tx.exec_drop(&statement, params).map_err(storage_error)?;
            select_row(tx, table, id)
        })
        .await
    }

    async fn delete(&self, table: Table, id: u64) -> RecordResult<bool> {
        self.unit_of_work("delete", move |tx| {
            tx.exec_drop(delete_statement(table), (id,)).map_err(storage_error)?;
            Ok(tx.affected_rows() > 0)
        })
        .await
    }

    fn get_type(&self) -> &'static str {
        "mysql"
    }
}
