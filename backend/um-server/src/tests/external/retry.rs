use crate::external::retry::{jittered, next_delay};
use crate::external::{ExternalError, IsRetryable, with_retry};

use um_config::RetryConfig;

use std::panic::Location;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use proptest::prelude::*;

fn fast_config(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 10,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

fn status_error(status: u16) -> ExternalError {
    ExternalError::Status {
        status,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[test]
fn given_server_errors_when_checking_retryable_then_true() {
    assert_that!(status_error(500).is_retryable(), eq(true));
    assert_that!(status_error(503).is_retryable(), eq(true));
    assert_that!(status_error(429).is_retryable(), eq(true));
}

#[test]
fn given_client_errors_when_checking_retryable_then_false() {
    assert_that!(status_error(400).is_retryable(), eq(false));
    assert_that!(status_error(401).is_retryable(), eq(false));
    assert_that!(ExternalError::shape("bad").is_retryable(), eq(false));
}

#[tokio::test]
async fn given_transient_failures_when_retrying_then_eventually_succeeds() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result: std::result::Result<u32, ExternalError> =
        with_retry(&fast_config(3), "test op", move || async move {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 { Err(status_error(503)) } else { Ok(n) }
        })
        .await;

    assert_that!(result.unwrap(), eq(3));
    assert_that!(calls.load(Ordering::SeqCst), eq(3));
}

#[tokio::test]
async fn given_permanent_failure_when_retrying_then_stops_after_first_attempt() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result: std::result::Result<(), ExternalError> =
        with_retry(&fast_config(5), "test op", move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(status_error(404))
        })
        .await;

    assert_that!(result, err(anything()));
    assert_that!(calls.load(Ordering::SeqCst), eq(1));
}

#[tokio::test]
async fn given_persistent_transient_failure_when_retrying_then_gives_up_at_max_attempts() {
    let calls = AtomicU32::new(0);
    let counter = &calls;

    let result: std::result::Result<(), ExternalError> =
        with_retry(&fast_config(2), "test op", move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(status_error(500))
        })
        .await;

    assert_that!(result, err(anything()));
    assert_that!(calls.load(Ordering::SeqCst), eq(2));
}

#[test]
fn given_delay_near_cap_when_backing_off_then_capped_at_max_delay() {
    let config = fast_config(3);

    let next = next_delay(&config, Duration::from_millis(800));

    assert_that!(next, eq(Duration::from_secs(1)));
}

proptest! {
    #[test]
    fn jittered_delay_stays_within_half_to_one_and_a_half(delay_ms in 1u64..10_000) {
        let config = RetryConfig { jitter: true, ..RetryConfig::default() };
        let delay = Duration::from_millis(delay_ms);

        let actual = jittered(&config, delay).as_secs_f64();

        prop_assert!(actual >= delay.as_secs_f64() * 0.5 - 1e-6);
        prop_assert!(actual < delay.as_secs_f64() * 1.5 + 1e-6);
    }

    #[test]
    fn backoff_never_exceeds_max_delay(delay_ms in 0u64..120_000, multiplier in 1.0f64..10.0) {
        let config = RetryConfig { backoff_multiplier: multiplier, ..RetryConfig::default() };

        let next = next_delay(&config, Duration::from_millis(delay_ms));

        prop_assert!(next <= config.max_delay());
    }
}
