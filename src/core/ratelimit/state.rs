//! Persisted rate-limit state
//!
//! Stored as JSON `{"count": n, "resetTime": epoch_ms}` under a fixed key.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Export counter for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitState {
    /// Successful exports in the current window
    pub count: u32,
    /// End of the window, epoch milliseconds
    pub reset_time: i64,
}

impl RateLimitState {
    /// Empty state whose window ends `window` after `now`
    pub fn fresh(now: DateTime<Utc>, window: Duration) -> Self {
        Self {
            count: 0,
            reset_time: (now + window).timestamp_millis(),
        }
    }

    /// Whether the window has ended; the reset instant itself is still inside
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.reset_time
    }

    /// The state to make quota decisions on, applying the lazy reset
    pub fn effective(self, now: DateTime<Utc>, window: Duration) -> Self {
        if self.is_expired(now) {
            Self::fresh(now, window)
        } else {
            self
        }
    }

    /// Window end as a timestamp
    pub fn reset_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.reset_time)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
