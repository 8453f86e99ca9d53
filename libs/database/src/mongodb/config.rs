#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// Connection settings for MongoDB.
///
/// Built manually for tests and tools, or from the environment (with
/// the `config` feature) in deployed services:
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let manual = MongoConfig::with_database("mongodb://localhost:27017", "events");
/// let from_env = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/?options]`
    pub url: String,
    /// Name of the database to operate on
    pub database: String,
    /// Reported to the server for its connection logs
    pub app_name: Option<String>,
    /// Connection pool ceiling
    pub max_pool_size: u32,
    /// Connections kept warm in the pool
    pub min_pool_size: u32,
    /// TCP connect timeout, seconds
    pub connect_timeout_secs: u64,
    /// Server selection timeout, seconds
    pub server_selection_timeout_secs: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Environment variables, with `MONGO_*` accepted as a fallback
/// spelling for the two required ones:
///
/// | Variable | Default |
/// |----------|---------|
/// | `MONGODB_URL` / `MONGO_URL` | required |
/// | `MONGODB_DATABASE` / `MONGO_DATABASE` | required |
/// | `MONGODB_APP_NAME` | unset |
/// | `MONGODB_MAX_POOL_SIZE` | 100 |
/// | `MONGODB_MIN_POOL_SIZE` | 5 |
/// | `MONGODB_CONNECT_TIMEOUT_SECS` | 10 |
/// | `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` | 30 |
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = first_of(&["MONGODB_URL", "MONGO_URL"])?;
        let database = first_of(&["MONGODB_DATABASE", "MONGO_DATABASE"])?;
        let defaults = Self::default();

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: numeric("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: numeric("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: numeric(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: numeric(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}

#[cfg(feature = "config")]
fn first_of(keys: &[&str]) -> Result<String, ConfigError> {
    keys.iter()
        .find_map(|key| std::env::var(key).ok())
        .ok_or_else(|| ConfigError::MissingEnvVar(keys.join(" or ")))
}

#[cfg(feature = "config")]
fn numeric<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
    }
}
