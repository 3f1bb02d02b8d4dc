//! Rate limiter behaviour with a simulated clock and real stores

use belediye_export::config::RoleConfiguration;
use belediye_export::core::export::{ExportOrchestrator, ExportRequest};
use belediye_export::core::ratelimit::{
    Clock, FileStore, KeyValueStore, ManualClock, MemoryStore, RateLimitState, RateLimiter,
    DEFAULT_RATE_LIMIT_KEY,
};
use belediye_export::domain::{ExportFormat, StorageError, UserRole};
use chrono::{Duration, TimeZone, Utc};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Store whose every operation fails
#[derive(Default)]
struct BrokenStore {
    calls: AtomicUsize,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable("disk gone".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable("disk gone".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk gone".to_string()))
    }
}

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 9, 1, 8, 15, 0).unwrap(),
    ))
}

#[test]
fn quota_exhausts_and_resets_after_window() {
    let clock = clock();
    let limiter = RateLimiter::new(Arc::new(MemoryStore::new()), 10).with_clock(clock.clone());

    for expected_remaining in (0..10).rev() {
        limiter.increment();
        assert_eq!(limiter.check().remaining, expected_remaining);
        clock.advance(Duration::minutes(5));
    }
    assert!(!limiter.check().allowed);

    // 50 minutes in; the window closes at 09:15
    clock.set(Utc.with_ymd_and_hms(2025, 9, 1, 9, 15, 0).unwrap());
    assert!(!limiter.check().allowed, "reset instant is still inside the window");

    clock.advance(Duration::milliseconds(1));
    let status = limiter.check();
    assert!(status.allowed);
    assert_eq!(status.remaining, 10);
    assert_eq!(status.reset_time, clock.now() + Duration::hours(1));
}

#[test]
fn remaining_never_underflows() {
    let clock = clock();
    let store = Arc::new(MemoryStore::new());
    let over = RateLimitState {
        count: 250,
        reset_time: (clock.now() + Duration::minutes(10)).timestamp_millis(),
    };
    store
        .set(DEFAULT_RATE_LIMIT_KEY, &serde_json::to_string(&over).unwrap())
        .unwrap();

    let limiter = RateLimiter::new(store, 100).with_clock(clock);
    let status = limiter.check();
    assert!(!status.allowed);
    assert_eq!(status.remaining, 0);
}

#[test]
fn stored_layout_uses_epoch_millis() {
    let clock = clock();
    let store = Arc::new(MemoryStore::new());
    let limiter = RateLimiter::new(store.clone(), 3).with_clock(clock.clone());
    limiter.increment();

    let raw: serde_json::Value =
        serde_json::from_str(&store.get(DEFAULT_RATE_LIMIT_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(
        raw,
        json!({
            "count": 1,
            "resetTime": (clock.now() + Duration::hours(1)).timestamp_millis()
        })
    );
}

#[test]
fn file_store_keeps_quota_between_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("storage.json");
    let clock = clock();

    {
        let limiter = RateLimiter::new(Arc::new(FileStore::new(&path)), 5).with_clock(clock.clone());
        limiter.increment();
        limiter.increment();
    }

    let limiter = RateLimiter::new(Arc::new(FileStore::new(&path)), 5).with_clock(clock.clone());
    assert_eq!(limiter.check().remaining, 3);

    // clearing the store resets the quota
    FileStore::new(&path).remove(DEFAULT_RATE_LIMIT_KEY).unwrap();
    assert_eq!(limiter.check().remaining, 5);
}

#[test]
fn broken_storage_fails_open() {
    let store = Arc::new(BrokenStore::default());
    let limiter = RateLimiter::new(store.clone(), 7).with_clock(clock());

    let status = limiter.check();
    assert!(status.allowed);
    assert_eq!(status.remaining, 7);

    // swallowed, not panicking
    limiter.increment();
    assert!(store.calls.load(Ordering::SeqCst) >= 2);
}

#[test]
fn exports_succeed_when_storage_is_broken() {
    let role = RoleConfiguration::new(false, UserRole::Citizen, 1, 10.0).unwrap();
    let orchestrator = ExportOrchestrator::new(role, Arc::new(BrokenStore::default()));

    for _ in 0..3 {
        let artifact = orchestrator
            .run_export(ExportRequest::new(
                json!([{"ilce": "Keçiören"}]),
                "liste",
                ExportFormat::Csv,
            ))
            .unwrap();
        assert!(!artifact.is_empty());
    }
}

#[test]
fn corrupt_file_store_fails_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "<<bozuk>>").unwrap();

    let limiter = RateLimiter::new(Arc::new(FileStore::new(&path)), 4).with_clock(clock());
    assert!(limiter.check().allowed);
    assert_eq!(limiter.check().remaining, 4);
}

#[test]
fn corrupt_stored_value_is_repaired_by_next_export() {
    let clock = clock();
    let store = Arc::new(MemoryStore::new());
    store
        .set(DEFAULT_RATE_LIMIT_KEY, r#"{"count":-1,"resetTime":0}"#)
        .unwrap();

    let limiter = RateLimiter::new(store.clone(), 2).with_clock(clock);
    assert_eq!(limiter.check().remaining, 2);

    for _ in 0..10 {
        limiter.increment();
    }
    let status = limiter.check();
    assert!(!status.allowed);
    assert_eq!(status.remaining, 0);

    let state: RateLimitState =
        serde_json::from_str(&store.get(DEFAULT_RATE_LIMIT_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(state.count, 10);
}

#[test]
fn corrupt_file_store_is_rewritten_by_increment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "<<bozuk>>").unwrap();

    let limiter = RateLimiter::new(Arc::new(FileStore::new(&path)), 1).with_clock(clock());
    limiter.increment();

    assert!(!limiter.check().allowed);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains(DEFAULT_RATE_LIMIT_KEY));
}
