//! Sliding-window rate limiting keyed by caller-supplied strings.
//!
//! The limiter is agnostic to what the key denotes (an IP address, a user
//! id); each limiting policy constructs its own instance, so independent
//! policies never share state. State lives in memory only and resets on
//! process restart.

use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};


/// Sliding-window admission controller.
///
/// Tracks request timestamps per key; a request is admitted when fewer than
/// `max_requests` timestamps remain inside the trailing window. Safe for
/// concurrent callers.
pub struct RateLimiter<C>
where
    C: Clock,
{
    max_requests: usize,
    window: Duration,
    clock: Arc<C>,
    clients: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl<C> RateLimiter<C>
where
    C: Clock,
{
    /// Creates a limiter admitting `max_requests` per key per `window`.
    #[must_use]
    pub fn new(max_requests: usize, window: Duration, clock: Arc<C>) -> Self {
        Self {
            max_requests,
            window,
            clock,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Decides whether a request under `key` is admitted right now.
    ///
    /// Purges timestamps that have left the window, then either rejects
    /// (at capacity) or records the current instant and admits. Keys left
    /// with no in-window timestamps are dropped from tracking, so the map
    /// only ever holds recently active keys.
    #[must_use]
    pub fn allow(&self, key: &str) -> bool {
        let now = self.clock.utc();
        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        clients.retain(|_, timestamps| {
            timestamps.retain(|recorded| now.signed_duration_since(*recorded) < self.window);
            !timestamps.is_empty()
        });

        let timestamps = clients.entry(key.to_owned()).or_default();
        if timestamps.len() >= self.max_requests {
            return false;
        }
        timestamps.push(now);
        true
    }

    /// Drops all recorded state for every key.
    pub fn reset(&self) {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the configured per-window admission count.
    #[must_use]
    pub const fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Returns the configured window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl<C> std::fmt::Debug for RateLimiter<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_requests", &self.max_requests)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}
