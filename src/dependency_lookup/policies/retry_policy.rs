use crate::shared::error::{NetworkFailure, ScoutError};
use std::time::Duration;

/// Upper bound on the delay between two attempts
const MAX_RETRY_DELAY: Duration = Duration::from_secs(10);

/// What to do after a failed pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Transient: run the same step again
    Retry,
    /// The host cannot be reached at all; stop and print the firewall hint
    Blocked,
    /// Retrying cannot help; stop
    Fatal,
}

/// RetryPolicy decides whether a failed step is retried and how long to wait.
///
/// Classification rules:
/// - connection reset, timeouts, other transport failures, 5xx and 429: retry
/// - connection refused, unreachable host: blocked
/// - everything else (decode errors, 4xx, missing manifest, invalid input): fatal
///
/// Retries are bounded by `max_attempts` with exponential backoff starting at
/// `base_delay` and capped at 10 seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// True when another attempt is allowed after `attempt` (1-based) failed.
    pub fn allows_another(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Delay to wait after failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay
            .saturating_mul(1u32 << exponent)
            .min(MAX_RETRY_DELAY)
    }

    pub fn classify(err: &anyhow::Error) -> FailureClass {
        match err.downcast_ref::<ScoutError>() {
            Some(ScoutError::Network { failure, .. }) => match failure {
                NetworkFailure::ConnectionRefused | NetworkFailure::Unreachable => {
                    FailureClass::Blocked
                }
                NetworkFailure::ConnectionReset
                | NetworkFailure::Timeout
                | NetworkFailure::Other => FailureClass::Retry,
            },
            Some(ScoutError::HttpStatus { status, .. }) => {
                if *status >= 500 || *status == 429 {
                    FailureClass::Retry
                } else {
                    FailureClass::Fatal
                }
            }
            _ => FailureClass::Fatal,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(5, Duration::from_millis(500))
    }
}
