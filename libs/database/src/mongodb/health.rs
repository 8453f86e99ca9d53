use mongodb::Client;
use std::time::Instant;

/// Outcome of a detailed health probe.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error description when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Cheap liveness probe against the server.
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}

/// Liveness probe that also reports latency and the failure reason,
/// for readiness endpoints that expose diagnostics.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let started = Instant::now();
    let outcome = client.list_database_names().await;
    let response_time_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn healthy_local_instance() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(check_health(&client).await);

        let status = check_health_detailed(&client).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }
}
