// lib/src/config/config_defaults.rs

pub const DATABASE_ENV_PREFIX: &str = "DATABASE";

pub const DEFAULT_DATABASE_HOST: &str = "127.0.0.1";
pub const DEFAULT_DATABASE_PORT: u16 = 3307;
pub const DEFAULT_DATABASE_USER: &str = "root";
pub const DEFAULT_DATABASE_NAME: &str = "liver_disease";
pub const DEFAULT_STORAGE_ENGINE: &str = "mysql";
pub const DEFAULT_POOL_MIN: usize = 1;
pub const DEFAULT_POOL_MAX: usize = 10;
pub const DEFAULT_INIT_SCHEMA: bool = true;
