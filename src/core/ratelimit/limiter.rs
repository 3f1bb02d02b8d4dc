//! Hourly export quota
//!
//! The quota is a counter with a window end, read lazily: an expired window
//! is treated as empty at read time, there is no background timer. Reads and
//! writes are not atomic across concurrent callers; one interactive user per
//! store is assumed.

use super::clock::{Clock, SystemClock};
use super::state::RateLimitState;
use super::store::KeyValueStore;
use crate::domain::errors::StorageError;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Storage key used by the export menu
pub const DEFAULT_RATE_LIMIT_KEY: &str = "export_rate_limit";

/// Length of one quota window
pub fn default_window() -> Duration {
    Duration::hours(1)
}

/// Result of a quota check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStatus {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_time: DateTime<Utc>,
}

/// Rolling hourly rate limiter
pub struct RateLimiter {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key: String,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    /// Create a limiter allowing `limit` exports per hour
    pub fn new(store: Arc<dyn KeyValueStore>, limit: u32) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            key: DEFAULT_RATE_LIMIT_KEY.to_string(),
            limit,
            window: default_window(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Check the quota without consuming it
    ///
    /// Fails open: when the store cannot be read the full quota is reported
    /// as available.
    pub fn check(&self) -> RateLimitStatus {
        let now = self.clock.now();

        match self.load_state(now) {
            Ok(state) => RateLimitStatus {
                allowed: state.count < self.limit,
                remaining: self.limit.saturating_sub(state.count),
                reset_time: state.reset_at(),
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %self.key,
                    "Rate limit storage unavailable, allowing export"
                );
                RateLimitStatus {
                    allowed: true,
                    remaining: self.limit,
                    reset_time: now + self.window,
                }
            }
        }
    }

    /// Record one successful export
    ///
    /// Storage failures are logged and swallowed; the export they follow has
    /// already happened.
    pub fn increment(&self) {
        let now = self.clock.now();

        let result = self.load_state(now).and_then(|mut state| {
            state.count = state.count.saturating_add(1);
            self.save_state(&state).map(|_| state)
        });

        match result {
            Ok(state) => tracing::debug!(
                count = state.count,
                limit = self.limit,
                reset_time = %state.reset_at(),
                "Export counted against rate limit"
            ),
            Err(e) => tracing::warn!(
                error = %e,
                key = %self.key,
                "Failed to record export in rate limit storage"
            ),
        }
    }

    /// Read the stored state with the lazy reset applied
    ///
    /// An undecodable value is treated like an expired window, so the next
    /// increment overwrites it. Only an unreachable store is an error.
    fn load_state(&self, now: DateTime<Utc>) -> Result<RateLimitState, StorageError> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(RateLimitState::fresh(now, self.window)),
            Err(e @ StorageError::Corrupt { .. }) => return Ok(self.reset_corrupt(now, &e)),
            Err(e) => return Err(e),
        };

        match serde_json::from_str::<RateLimitState>(&raw) {
            Ok(state) => Ok(state.effective(now, self.window)),
            Err(e) => {
                let err = StorageError::Corrupt {
                    key: self.key.clone(),
                    message: e.to_string(),
                };
                Ok(self.reset_corrupt(now, &err))
            }
        }
    }

    fn reset_corrupt(&self, now: DateTime<Utc>, error: &StorageError) -> RateLimitState {
        tracing::warn!(
            error = %error,
            key = %self.key,
            "Discarding unreadable rate limit state"
        );
        RateLimitState::fresh(now, self.window)
    }

    fn save_state(&self, state: &RateLimitState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state).map_err(|e| StorageError::Corrupt {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ratelimit::clock::ManualClock;
    use crate::core::ratelimit::store::MemoryStore;
    use chrono::TimeZone;

    fn setup(limit: u32) -> (RateLimiter, Arc<ManualClock>, Arc<MemoryStore>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 5, 19, 10, 0, 0).unwrap(),
        ));
        let store = Arc::new(MemoryStore::new());
        let limiter = RateLimiter::new(store.clone(), limit).with_clock(clock.clone());
        (limiter, clock, store)
    }

    #[test]
    fn test_fresh_state_allows_full_quota() {
        let (limiter, clock, _) = setup(5);
        let status = limiter.check();
        assert!(status.allowed);
        assert_eq!(status.remaining, 5);
        assert_eq!(status.reset_time, clock.now() + Duration::hours(1));
    }

    #[test]
    fn test_check_does_not_write() {
        let (limiter, _, store) = setup(5);
        limiter.check();
        assert_eq!(store.get(DEFAULT_RATE_LIMIT_KEY).unwrap(), None);
    }

    #[test]
    fn test_increment_persists_state() {
        let (limiter, clock, store) = setup(5);
        limiter.increment();
        limiter.increment();

        let raw = store.get(DEFAULT_RATE_LIMIT_KEY).unwrap().unwrap();
        let state: RateLimitState = serde_json::from_str(&raw).unwrap();
        assert_eq!(state.count, 2);
        assert_eq!(
            state.reset_time,
            (clock.now() + Duration::hours(1)).timestamp_millis()
        );
        assert_eq!(limiter.check().remaining, 3);
    }

    #[test]
    fn test_window_start_is_fixed_by_first_export() {
        let (limiter, clock, _) = setup(5);
        limiter.increment();
        let first_reset = limiter.check().reset_time;

        clock.advance(Duration::minutes(30));
        limiter.increment();
        assert_eq!(limiter.check().reset_time, first_reset);
    }

    #[test]
    fn test_increment_after_expiry_starts_new_window() {
        let (limiter, clock, _) = setup(5);
        for _ in 0..5 {
            limiter.increment();
        }
        assert!(!limiter.check().allowed);

        clock.advance(Duration::hours(1) + Duration::seconds(1));
        limiter.increment();
        let status = limiter.check();
        assert!(status.allowed);
        assert_eq!(status.remaining, 4);
    }

    #[test]
    fn test_corrupt_state_fails_open() {
        let (limiter, _, store) = setup(5);
        store.set(DEFAULT_RATE_LIMIT_KEY, "{not json").unwrap();

        let status = limiter.check();
        assert!(status.allowed);
        assert_eq!(status.remaining, 5);
    }

    #[test]
    fn test_corrupt_state_is_replaced_on_increment() {
        let (limiter, _, store) = setup(2);
        store
            .set(DEFAULT_RATE_LIMIT_KEY, r#"{"count":-1,"resetTime":0}"#)
            .unwrap();

        limiter.increment();
        let raw = store.get(DEFAULT_RATE_LIMIT_KEY).unwrap().unwrap();
        let state: RateLimitState = serde_json::from_str(&raw).unwrap();
        assert_eq!(state.count, 1);

        limiter.increment();
        let status = limiter.check();
        assert!(!status.allowed);
        assert_eq!(status.remaining, 0);
    }

    #[test]
    fn test_custom_key() {
        let (limiter, _, store) = setup(5);
        let limiter = limiter.with_key("quota:citizen");
        limiter.increment();
        assert!(store.get("quota:citizen").unwrap().is_some());
        assert!(store.get(DEFAULT_RATE_LIMIT_KEY).unwrap().is_none());
    }
}
