//! Shared fixtures for in-memory integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex};
use taskledger::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

/// Service type used by the integration suites.
pub type TestService = TaskService<InMemoryTaskRepository, FixedClock>;

/// Deterministic clock for tests that need fixed or advancing instants.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += duration;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

/// An arbitrary but fixed reference instant.
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid reference instant")
}

/// Builds a service over a fresh repository and a pinned clock, returning
/// the clock handle for advancing time mid-test.
pub fn service_with_clock() -> (TestService, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(reference_instant()));
    let service = TaskService::with_default_create_limit(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&clock),
    );
    (service, clock)
}
