//! Export rate limiting
//!
//! - [`limiter`] - quota checks and increments with lazy window reset
//! - [`state`] - the persisted `{count, resetTime}` record
//! - [`store`] - key-value storage backends
//! - [`clock`] - wall-clock and manual time sources

pub mod clock;
pub mod limiter;
pub mod state;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::{RateLimitStatus, RateLimiter, DEFAULT_RATE_LIMIT_KEY};
pub use state::RateLimitState;
pub use store::{FileStore, KeyValueStore, MemoryStore};
