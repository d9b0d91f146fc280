use crate::SyncError;

use cs_config::RetryConfig;

use std::fmt::Display;

use tokio::time::sleep;

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// `config.max_attempts` is reached. The wait grows linearly with the attempt
/// number.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display + IsRetryable,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempt);
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_retryable() || attempt >= max_attempts {
                    log::warn!("{} failed after {} attempts: {}", operation_name, attempt, e);
                    return Err(e);
                }

                let delay = config.delay_after(attempt);
                log::debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    operation_name,
                    attempt,
                    e,
                    delay
                );

                sleep(delay).await;
            }
        }
    }
}

/// Errors that know whether another attempt could succeed.
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for SyncError {
    fn is_retryable(&self) -> bool {
        SyncError::is_retryable(self)
    }
}
