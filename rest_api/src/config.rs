// rest_api/src/config.rs

use anyhow::{Context, Result};
use config::{Config, Environment, Map};
use serde::Deserialize;

pub const REST_API_ENV_PREFIX: &str = "REST_API";
pub const DEFAULT_REST_API_HOST: &str = "127.0.0.1";
pub const DEFAULT_REST_API_PORT: u16 = 8000;

/// Represents the configuration for the REST API server itself.
#[derive(Debug, Clone, Deserialize)]
pub struct RestApiConfig {
    pub host: String,
    pub port: u16,
}

impl RestApiConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn build_rest_api_config(source: Environment) -> Result<RestApiConfig> {
    Config::builder()
        .set_default("host", DEFAULT_REST_API_HOST)?
        .set_default("port", i64::from(DEFAULT_REST_API_PORT))?
        .add_source(source)
        .build()
        .context("Failed to read REST API configuration")?
        .try_deserialize()
        .context("Failed to parse REST API configuration")
}

/// Loads the REST API configuration from `REST_API_HOST` / `REST_API_PORT`.
pub fn load_rest_api_config() -> Result<RestApiConfig> {
    build_rest_api_config(Environment::with_prefix(REST_API_ENV_PREFIX))
}

pub fn rest_api_config_from_vars<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<RestApiConfig> {
    let map: Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    build_rest_api_config(Environment::with_prefix(REST_API_ENV_PREFIX).source(Some(map)))
}
