use crate::{SyncError, with_retry};

use cs_config::RetryConfig;

use std::sync::atomic::{AtomicU32, Ordering};

use googletest::prelude::*;

fn config(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        base_delay_ms: 1,
    }
}

#[tokio::test]
async fn given_transient_failures_when_with_retry_then_eventually_succeeds() {
    let counter = AtomicU32::new(0);
    let attempts = &counter;

    let result = with_retry(&config(3), "test", || async move {
        if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(SyncError::network("refused"))
        } else {
            Ok(42)
        }
    })
    .await;

    assert_that!(result, ok(eq(&42)));
    assert_that!(attempts.load(Ordering::SeqCst), eq(3));
}

#[tokio::test]
async fn given_permanent_failure_when_with_retry_then_single_attempt() {
    let counter = AtomicU32::new(0);
    let attempts = &counter;

    let result: Result<(), SyncError> = with_retry(&config(3), "test", || async move {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(SyncError::name_conflict("taken"))
    })
    .await;

    assert!(matches!(result, Err(SyncError::NameConflict { .. })));
    assert_that!(attempts.load(Ordering::SeqCst), eq(1));
}

#[tokio::test]
async fn given_max_attempts_reached_when_with_retry_then_last_error_returned() {
    let counter = AtomicU32::new(0);
    let attempts = &counter;

    let result: Result<(), SyncError> = with_retry(&config(2), "test", || async move {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(SyncError::timeout("slow"))
    })
    .await;

    assert!(matches!(result, Err(SyncError::Timeout { .. })));
    assert_that!(attempts.load(Ordering::SeqCst), eq(2));
}

#[test]
fn given_base_delay_then_backoff_is_linear() {
    let config = RetryConfig {
        max_attempts: 3,
        base_delay_ms: 2000,
    };

    assert_that!(config.delay_after(1).as_millis(), eq(2000));
    assert_that!(config.delay_after(2).as_millis(), eq(4000));
}
