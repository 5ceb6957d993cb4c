//! Configuration for the allocation system.
//!
//! Loads settings from environment variables with sensible defaults. A value
//! that is missing or fails to parse falls back to its default; values that
//! parse but make no sense are caught by [`AllocatorConfig::validate`].

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const ENV_MAX_ATTEMPTS: &str = "ALLOCATOR_MAX_ATTEMPTS";
pub const ENV_INITIAL_BACKOFF_MS: &str = "ALLOCATOR_INITIAL_BACKOFF_MS";
pub const ENV_MAX_BACKOFF_MS: &str = "ALLOCATOR_MAX_BACKOFF_MS";
pub const ENV_BACKOFF_MULTIPLIER: &str = "ALLOCATOR_BACKOFF_MULTIPLIER";
pub const ENV_MAILBOX_CAPACITY: &str = "ALLOCATOR_MAILBOX_CAPACITY";

/// Allocator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Attempts per `allocate` call, including the first (default: 5)
    pub max_attempts: u32,
    /// Backoff after the first conflict, in milliseconds (default: 1)
    pub initial_backoff_ms: u64,
    /// Upper bound for the backoff, in milliseconds (default: 50)
    pub max_backoff_ms: u64,
    /// Backoff growth factor per conflict (default: 2.0)
    pub backoff_multiplier: f64,
    /// Request queue length of each actor (default: 64)
    pub mailbox_capacity: usize,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 1,
            max_backoff_ms: 50,
            backoff_multiplier: 2.0,
            mailbox_capacity: 64,
        }
    }
}

/// A configuration value outside its allowed range.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("mailbox_capacity must be at least 1")]
    ZeroMailbox,

    #[error("backoff_multiplier must be >= 1.0, got {0}")]
    ShrinkingBackoff(f64),
}

impl AllocatorConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `from_env` is this with the process environment plugged in.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            max_attempts: lookup(ENV_MAX_ATTEMPTS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_attempts),
            initial_backoff_ms: lookup(ENV_INITIAL_BACKOFF_MS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.initial_backoff_ms),
            max_backoff_ms: lookup(ENV_MAX_BACKOFF_MS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_backoff_ms),
            backoff_multiplier: lookup(ENV_BACKOFF_MULTIPLIER)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.backoff_multiplier),
            mailbox_capacity: lookup(ENV_MAILBOX_CAPACITY)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.mailbox_capacity),
        }
    }

    /// Checks the ranges `from_env` cannot enforce by parsing alone.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::ZeroMailbox);
        }
        if self.backoff_multiplier.is_nan() || self.backoff_multiplier < 1.0 {
            return Err(ConfigError::ShrinkingBackoff(self.backoff_multiplier));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AllocatorConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AllocatorConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_are_read() {
        let config = AllocatorConfig::from_lookup(lookup_from(&[
            (ENV_MAX_ATTEMPTS, "9"),
            (ENV_INITIAL_BACKOFF_MS, "0"),
            (ENV_MAX_BACKOFF_MS, "10"),
            (ENV_BACKOFF_MULTIPLIER, "1.5"),
            (ENV_MAILBOX_CAPACITY, "256"),
        ]));
        assert_eq!(config.max_attempts, 9);
        assert_eq!(config.initial_backoff_ms, 0);
        assert_eq!(config.max_backoff_ms, 10);
        assert_eq!(config.backoff_multiplier, 1.5);
        assert_eq!(config.mailbox_capacity, 256);
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        let config = AllocatorConfig::from_lookup(lookup_from(&[
            (ENV_MAX_ATTEMPTS, "lots"),
            (ENV_MAILBOX_CAPACITY, "-1"),
        ]));
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.mailbox_capacity, 64);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let zero_attempts = AllocatorConfig {
            max_attempts: 0,
            ..AllocatorConfig::default()
        };
        assert_eq!(zero_attempts.validate(), Err(ConfigError::ZeroAttempts));

        let zero_mailbox = AllocatorConfig {
            mailbox_capacity: 0,
            ..AllocatorConfig::default()
        };
        assert_eq!(zero_mailbox.validate(), Err(ConfigError::ZeroMailbox));

        let shrinking = AllocatorConfig {
            backoff_multiplier: 0.5,
            ..AllocatorConfig::default()
        };
        assert_eq!(shrinking.validate(), Err(ConfigError::ShrinkingBackoff(0.5)));
    }
}
