use crate::external::ExternalError;

use um_config::RetryConfig;

use std::time::Duration;

use tokio::time::sleep;

/// Errors that may succeed when the call is repeated
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for ExternalError {
    fn is_retryable(&self) -> bool {
        match self {
            ExternalError::Request { source, .. } => {
                source.is_timeout() || source.is_connect() || source.is_request()
            }
            ExternalError::Status { status, .. } => *status >= 500 || *status == 429,
            ExternalError::NotConfigured { .. } | ExternalError::Shape { .. } => false,
        }
    }
}

/// Delay before the retry following `delay`, capped at the configured maximum
pub fn next_delay(config: &RetryConfig, delay: Duration) -> Duration {
    Duration::from_secs_f64(
        (delay.as_secs_f64() * config.backoff_multiplier).min(config.max_delay().as_secs_f64()),
    )
}

/// Scale `delay` by a random factor in [0.5, 1.5) when jitter is on
pub fn jittered(config: &RetryConfig, delay: Duration) -> Duration {
    if config.jitter {
        let factor = 0.5 + rand::random::<f64>();
        Duration::from_secs_f64(delay.as_secs_f64() * factor)
    } else {
        delay
    }
}

/// Run `operation` until it succeeds, fails permanently, or runs out of attempts.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut attempts = 0;
    let mut delay = config.initial_delay();

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempts);
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_retryable() || attempts >= config.max_attempts {
                    log::warn!(
                        "{} failed after {} attempts: {}",
                        operation_name,
                        attempts,
                        e
                    );
                    return Err(e);
                }

                let wait = jittered(config, delay);
                log::debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    operation_name,
                    attempts,
                    e,
                    wait
                );

                sleep(wait).await;
                delay = next_delay(config, delay);
            }
        }
    }
}
