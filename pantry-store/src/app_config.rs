use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub expenses: ExpensesConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpensesConfig {
    /// Length of the "recent expenses" window, today included.
    #[serde(default = "default_range_days")]
    pub range_days: u32,
}

impl Default for ExpensesConfig {
    fn default() -> Self {
        Self { range_days: default_range_days() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// JSON product list for the in-memory backend.
    pub products_file: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            products_file: None,
        }
    }
}

/// Upper bound for `expenses.range_days`, roughly a century.
pub const MAX_RANGE_DAYS: u32 = 36_600;

fn default_max_connections() -> u32 { 5 }
fn default_true() -> bool { true }
fn default_range_days() -> u32 { 10 }
fn default_page_size() -> usize { 10 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `PANTRY_DATABASE__URL=postgres://...` sets `database.url`
            .add_source(config::Environment::with_prefix("PANTRY").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.expenses.range_days == 0 || self.expenses.range_days > MAX_RANGE_DAYS {
            return Err(config::ConfigError::Message(format!(
                "expenses.range_days must be between 1 and {}, got {}",
                MAX_RANGE_DAYS, self.expenses.range_days
            )));
        }
        if self.catalog.page_size == 0 {
            return Err(config::ConfigError::Message(
                "catalog.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
