// lib/src/config/config_structs.rs

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Which `RecordStore` backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEngineType {
    MySQL,
    InMemory,
}

impl FromStr for StorageEngineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(StorageEngineType::MySQL),
            "inmemory" | "in-memory" | "memory" => Ok(StorageEngineType::InMemory),
            _ => Err(format!("Unknown storage engine type: {}", s)),
        }
    }
}

impl fmt::Display for StorageEngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageEngineType::MySQL => f.write_str("mysql"),
            StorageEngineType::InMemory => f.write_str("inmemory"),
        }
    }
}

impl<'de> Deserialize<'de> for StorageEngineType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Connection settings for the relational datastore, read from `DATABASE_*`.
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    #[serde(rename = "name")]
    pub database: String,
    pub engine: StorageEngineType,
    pub pool_min: usize,
    pub pool_max: usize,
    pub init_schema: bool,
}

impl DatabaseConfig {
    /// `user@host:port/database`, safe to log.
    pub fn describe(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("engine", &self.engine)
            .field("pool_min", &self.pool_min)
            .field("pool_max", &self.pool_max)
            .field("init_schema", &self.init_schema)
            .finish()
    }
}
