//! Request pacing for the Wyscout API.
//!
//! This module provides rate limiting functionality using the
//! `governor` crate to keep clients inside their per-second request
//! allowance.

use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use wyscout_core::DEFAULT_REQUESTS_PER_SEC;

type DirectLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Paces requests so that consecutive acquisitions are at least
/// `1 / requests_per_second` apart.
///
/// The quota holds a single cell, so there is no burst allowance: a
/// quiet period does not earn extra immediate requests afterwards, and
/// N consecutive acquisitions take at least `(N-1)/r` seconds. The
/// underlying clock is monotonic. State belongs to the instance;
/// cloning shares it.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DirectLimiter>,
    interval: Duration,
}

impl RateLimiter {
    /// Create a limiter granting `requests_per_second` evenly spaced
    /// acquisitions per second.
    ///
    /// A zero rate falls back to the default of
    /// [`DEFAULT_REQUESTS_PER_SEC`] rather than failing construction.
    #[must_use]
    pub fn per_second(requests_per_second: u32) -> Self {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or_else(|| {
            NonZeroU32::new(DEFAULT_REQUESTS_PER_SEC).expect("default rate must be non-zero")
        });

        let interval = Duration::from_secs(1) / rate.get();
        let quota = Quota::with_period(interval).expect("pacing interval is non-zero");

        RateLimiter { limiter: Arc::new(GovernorRateLimiter::direct(quota)), interval }
    }

    /// Waits until the limiter grants the next acquisition.
    ///
    /// Returns immediately when the pacing interval has already passed
    /// since the previous grant; otherwise suspends the calling task
    /// for the remainder of the interval.
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }

    /// Whether an acquisition would be granted right now, without
    /// consuming one on failure.
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// The minimum spacing between granted acquisitions.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        RateLimiter::per_second(DEFAULT_REQUESTS_PER_SEC)
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("interval", &self.interval)
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_first_acquisition_is_immediate() {
        let limiter = RateLimiter::per_second(1);

        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_consecutive_acquisitions_are_paced() {
        let limiter = RateLimiter::per_second(10);

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        let elapsed = start.elapsed();

        // Three acquisitions at 10/s must span at least two intervals.
        assert!(
            elapsed >= Duration::from_millis(199),
            "three acquisitions completed in {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_no_burst_after_idle() {
        let limiter = RateLimiter::per_second(10);
        limiter.acquire().await;

        tokio::time::sleep(Duration::from_millis(500)).await;

        // The idle period must not have banked extra grants.
        limiter.acquire().await;
        assert!(!limiter.check());
    }

    #[test]
    fn test_zero_rate_falls_back_to_default() {
        let limiter = RateLimiter::per_second(0);
        assert_eq!(limiter.interval(), Duration::from_secs(1) / DEFAULT_REQUESTS_PER_SEC);
    }
}
