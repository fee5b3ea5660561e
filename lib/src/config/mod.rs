// lib/src/config/mod.rs

pub mod config_defaults;
pub mod config_structs;

pub use config_defaults::*;
pub use config_structs::{DatabaseConfig, StorageEngineType};

use config::{Config, ConfigError, Environment, Map};
use log::{info, warn};
use models::errors::{RecordError, RecordResult};

fn config_error(err: ConfigError) -> RecordError {
    RecordError::ConfigError(err.to_string())
}

fn build_database_config(source: Environment) -> RecordResult<DatabaseConfig> {
    Config::builder()
        .set_default("host", DEFAULT_DATABASE_HOST)
        .and_then(|b| b.set_default("port", i64::from(DEFAULT_DATABASE_PORT)))
        .and_then(|b| b.set_default("user", DEFAULT_DATABASE_USER))
        .and_then(|b| b.set_default("password", ""))
        .and_then(|b| b.set_default("name", DEFAULT_DATABASE_NAME))
        .and_then(|b| b.set_default("engine", DEFAULT_STORAGE_ENGINE))
        .and_then(|b| b.set_default("pool_min", DEFAULT_POOL_MIN as i64))
        .and_then(|b| b.set_default("pool_max", DEFAULT_POOL_MAX as i64))
        .and_then(|b| b.set_default("init_schema", DEFAULT_INIT_SCHEMA))
        .map_err(config_error)?
        .add_source(source)
        .build()
        .and_then(|settings| settings.try_deserialize::<DatabaseConfig>())
        .map_err(config_error)
}

/// Loads `DATABASE_*` settings from the process environment, after pulling in
/// a `.env` file when one exists.
pub fn load_database_config() -> RecordResult<DatabaseConfig> {
    if let Err(e) = dotenv::dotenv() {
        // A missing .env is the normal case outside local development.
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }
    let config = build_database_config(Environment::with_prefix(DATABASE_ENV_PREFIX))?;
    info!("Database configuration loaded: {:?}", config);
    Ok(config)
}

/// Same as `load_database_config`, but reads variables from `vars` instead of
/// the process environment.
pub fn database_config_from_vars<I, K, V>(vars: I) -> RecordResult<DatabaseConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map: Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    build_database_config(Environment::with_prefix(DATABASE_ENV_PREFIX).source(Some(map)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = database_config_from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.host, DEFAULT_DATABASE_HOST);
        assert_eq!(config.port, 3307);
        assert_eq!(config.engine, StorageEngineType::MySQL);
        assert!(config.init_schema);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = database_config_from_vars([
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_PORT", "3306"),
            ("DATABASE_USER", "clinic"),
            ("DATABASE_PASSWORD", "s3cret"),
            ("DATABASE_NAME", "liver"),
            ("DATABASE_ENGINE", "InMemory"),
            ("DATABASE_INIT_SCHEMA", "false"),
        ])
        .unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, "liver");
        assert_eq!(config.engine, StorageEngineType::InMemory);
        assert!(!config.init_schema);
        assert_eq!(config.describe(), "clinic@db.internal:3306/liver");
    }

    #[test]
    fn debug_output_redacts_password() {
        let config = database_config_from_vars([("DATABASE_PASSWORD", "s3cret")]).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let err = database_config_from_vars([("DATABASE_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, RecordError::ConfigError(_)));
    }

    #[test]
    fn unknown_engine_is_a_config_error() {
        let err = database_config_from_vars([("DATABASE_ENGINE", "sqlite")]).unwrap_err();
        assert!(matches!(err, RecordError::ConfigError(_)));
    }
}
