//! Bounded retry with exponential backoff for optimistic-concurrency conflicts.
//!
//! # Example
//!
//! ```rust
//! use seat_allocator::coordinator::RetryPolicy;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::builder()
//!     .max_attempts(8)
//!     .initial_backoff(Duration::from_millis(2))
//!     .max_backoff(Duration::from_millis(20))
//!     .multiplier(2.0)
//!     .build();
//!
//! assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(2));
//! assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(8));
//! assert_eq!(policy.delay_for_attempt(10), Duration::from_millis(20));
//! ```

use crate::config::AllocatorConfig;
use std::time::Duration;

/// How many times the coordinator tries before giving up, and how long it
/// waits between tries.
///
/// # Default Values
///
/// - `max_attempts`: 5
/// - `initial_backoff`: 1ms
/// - `max_backoff`: 50ms
/// - `multiplier`: 2.0
///
/// Built only through [`RetryPolicy::builder`] or `Default`, so
/// `max_attempts` is never below 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
    multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(50),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Create a new policy builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder {
            policy: Self::default(),
        }
    }

    /// Total attempts, including the first. Never below 1.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay after the first conflict.
    pub fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }

    /// Cap for exponential growth.
    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Growth factor per further conflict.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Delay to wait after the `attempt`-th conflict (1-based).
    ///
    /// `initial_backoff * multiplier^(attempt - 1)`, capped at `max_backoff`.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.multiplier.max(1.0).powi(exponent);
        // Float-to-int `as` saturates, so an overflowing product lands on the cap.
        let nanos = (self.initial_backoff.as_nanos() as f64 * factor) as u64;
        Duration::from_nanos(nanos).min(self.max_backoff)
    }

    /// Waits out the backoff for `attempt`. A zero delay still yields so that
    /// the task that beat us can make progress.
    pub async fn backoff(&self, attempt: u32) {
        let delay = self.delay_for_attempt(attempt);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

impl From<&AllocatorConfig> for RetryPolicy {
    fn from(config: &AllocatorConfig) -> Self {
        Self::builder()
            .max_attempts(config.max_attempts)
            .initial_backoff(Duration::from_millis(config.initial_backoff_ms))
            .max_backoff(Duration::from_millis(config.max_backoff_ms))
            .multiplier(config.backoff_multiplier)
            .build()
    }
}

/// Builder for [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryPolicyBuilder {
    policy: RetryPolicy,
}

impl RetryPolicyBuilder {
    /// Set the attempt budget. Values below 1 are raised to 1.
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.policy.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn initial_backoff(mut self, delay: Duration) -> Self {
        self.policy.initial_backoff = delay;
        self
    }

    #[must_use]
    pub fn max_backoff(mut self, delay: Duration) -> Self {
        self.policy.max_backoff = delay;
        self
    }

    #[must_use]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.policy.multiplier = multiplier;
        self
    }

    /// Disable waiting between attempts (yield only).
    #[must_use]
    pub fn no_backoff(self) -> Self {
        self.initial_backoff(Duration::ZERO).max_backoff(Duration::ZERO)
    }

    /// Build the [`RetryPolicy`].
    #[must_use]
    pub fn build(self) -> RetryPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_budget_never_below_one() {
        let policy = RetryPolicy::builder().max_attempts(0).build();
        assert_eq!(policy.max_attempts(), 1);
    }

    #[test]
    fn test_delay_grows_then_caps() {
        let policy = RetryPolicy::builder()
            .initial_backoff(Duration::from_millis(10))
            .max_backoff(Duration::from_millis(35))
            .multiplier(2.0)
            .build();

        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(10));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(20));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(35));
        assert_eq!(policy.delay_for_attempt(u32::MAX), Duration::from_millis(35));
    }

    #[test]
    fn test_no_backoff_is_zero() {
        let policy = RetryPolicy::builder().no_backoff().build();
        assert!(policy.delay_for_attempt(4).is_zero());
    }

    #[test]
    fn test_from_config() {
        let config = AllocatorConfig {
            max_attempts: 9,
            initial_backoff_ms: 3,
            max_backoff_ms: 30,
            backoff_multiplier: 1.5,
            ..AllocatorConfig::default()
        };
        let policy = RetryPolicy::from(&config);
        assert_eq!(policy.max_attempts(), 9);
        assert_eq!(policy.initial_backoff(), Duration::from_millis(3));
        assert_eq!(policy.max_backoff(), Duration::from_millis(30));
        assert_eq!(policy.multiplier(), 1.5);
    }

    #[test]
    fn test_zero_attempts_from_config_becomes_one() {
        let config = AllocatorConfig {
            max_attempts: 0,
            ..AllocatorConfig::default()
        };
        assert_eq!(RetryPolicy::from(&config).max_attempts(), 1);
    }
}
