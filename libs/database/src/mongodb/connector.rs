use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect with default settings, verifying the server is reachable.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Connect using explicit settings.
///
/// Pool sizes, timeouts, and the reported app name all come from the
/// config. The returned client has been verified with a round trip to
/// the server, so a bad address fails here rather than on first query.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Connecting to MongoDB at {}", config.url());

    let client = Client::with_options(client_options(config).await?)?;
    verify(&client).await?;

    info!("MongoDB connection established");
    Ok(client)
}

/// Connect with default settings, retrying on failure.
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    connect_from_config_with_retry(&MongoConfig::new(url), retry_config).await
}

/// Connect using explicit settings, retrying transient failures with
/// backoff. Pass `None` for the default policy.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config_with_retry};
/// use database::RetryConfig;
///
/// let config = MongoConfig::from_env()?;
/// let policy = RetryConfig::new().with_max_retries(5);
/// let client = connect_from_config_with_retry(&config, Some(policy)).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(config.url()).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone();
    Ok(options)
}

// list_database_names is the cheapest command that proves both the
// network path and authentication
async fn verify(client: &Client) -> Result<(), MongoError> {
    client
        .list_database_names()
        .await
        .map(|_| ())
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn connects_to_local_instance() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        assert!(connect(&url).await.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn connects_with_explicit_config() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "test")
            .with_app_name("connector-test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
