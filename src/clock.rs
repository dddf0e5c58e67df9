//! Current-time source with a test override.
//!
//! All time comparisons in the crate go through [`now`]. Production code gets
//! `Utc::now()`; tests pin the clock with a [`TestNow`] guard so that
//! "scheduled for next week" scenarios can be exercised without sleeping.
//!
//! The override is process-wide. [`TestNow`] holds a global lock for its
//! lifetime, so tests that freeze time serialize against each other and a
//! panicking test cannot leak a frozen clock into the next one.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, RwLock};

static TEST_NOW: Lazy<RwLock<Option<DateTime<Utc>>>> = Lazy::new(|| RwLock::new(None));

static FREEZE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// The current time, honoring any active test override.
pub fn now() -> DateTime<Utc> {
    test_now().unwrap_or_else(Utc::now)
}

fn test_now() -> Option<DateTime<Utc>> {
    *TEST_NOW.read().unwrap_or_else(|e| e.into_inner())
}

fn set_test_now(at: Option<DateTime<Utc>>) {
    *TEST_NOW.write().unwrap_or_else(|e| e.into_inner()) = at;
}

/// Pins the clock to a fixed instant for the guard's lifetime.
///
/// Dropping the guard restores the real clock.
pub struct TestNow {
    _serial: MutexGuard<'static, ()>,
}

impl TestNow {
    pub fn freeze(at: DateTime<Utc>) -> Self {
        let guard = FREEZE_LOCK
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        set_test_now(Some(at));
        Self { _serial: guard }
    }

    /// Move the pinned clock, e.g. to simulate elapsed time mid-test.
    pub fn advance_to(&self, at: DateTime<Utc>) {
        set_test_now(Some(at));
    }
}

impl Drop for TestNow {
    fn drop(&mut self) {
        set_test_now(None);
    }
}
