use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for retried connection attempts.
///
/// Delays grow geometrically from `base_delay` up to `max_delay`, with
/// optional jitter so that a fleet of restarting services does not hit
/// the database in lockstep.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt (3 means up to 4 attempts total)
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
    /// Growth factor applied between retries
    pub multiplier: f64,
    /// Randomize each delay into the [50%, 100%] band
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Deterministic delays, mainly for tests
    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    fn next_delay(&self, current: Duration) -> Duration {
        current.mul_f64(self.multiplier).min(self.max_delay)
    }

    fn sleep_for(&self, planned: Duration) -> Duration {
        if self.jitter { jittered(planned) } else { planned }
    }
}

/// Scale a delay by a pseudo-random factor in [0.5, 1.0).
///
/// Hashing the current time through RandomState is enough entropy here
/// and avoids pulling in a rand dependency.
fn jittered(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let sample = RandomState::new().hash_one(std::time::SystemTime::now()) % 50;
    delay.mul_f64(0.5 + sample as f64 / 100.0)
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The final error is returned unchanged once `config.max_retries`
/// retries have failed.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay = config.base_delay;
    let mut failures = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!("Operation succeeded after {} retries", failures);
                }
                return Ok(value);
            }
            Err(e) if failures >= config.max_retries => {
                warn!("Operation failed after {} attempts: {}", failures + 1, e);
                return Err(e);
            }
            Err(e) => {
                failures += 1;
                let pause = config.sleep_for(delay);
                debug!(
                    "Operation failed (attempt {}/{}): {}. Retrying in {:?}",
                    failures,
                    config.max_retries + 1,
                    e,
                    pause
                );
                tokio::time::sleep(pause).await;
                delay = config.next_delay(delay);
            }
        }
    }
}

/// Retry with the default policy (3 retries, 100ms base, jittered).
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig::new()
            .with_base_delay(Duration::from_millis(1))
            .without_jitter()
    }

    #[tokio::test]
    async fn first_attempt_success_does_not_retry() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let out = retry_with_backoff(
            || {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(42)
                }
            },
            fast(),
        )
        .await;

        assert_eq!(out.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let out = retry_with_backoff(
            || {
                let c = c.clone();
                async move {
                    match c.fetch_add(1, Ordering::SeqCst) {
                        0 | 1 => Err("not yet".to_string()),
                        _ => Ok("up"),
                    }
                }
            },
            fast(),
        )
        .await;

        assert_eq!(out.unwrap(), "up");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_budget_and_returns_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();

        let out: Result<(), _> = retry_with_backoff(
            || {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("down".to_string())
                }
            },
            fast().with_max_retries(2),
        )
        .await;

        assert_eq!(out.unwrap_err(), "down");
        // initial attempt plus two retries
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn delay_growth_is_capped() {
        let config = RetryConfig::new()
            .with_base_delay(Duration::from_millis(400))
            .with_max_delay(Duration::from_millis(1000));

        let second = config.next_delay(config.base_delay);
        let third = config.next_delay(second);
        assert_eq!(second, Duration::from_millis(800));
        assert_eq!(third, Duration::from_millis(1000));
    }

    #[test]
    fn jitter_stays_in_band() {
        let delay = Duration::from_millis(1000);
        for _ in 0..20 {
            let j = jittered(delay);
            assert!(j >= Duration::from_millis(500));
            assert!(j <= delay);
        }
    }
}
