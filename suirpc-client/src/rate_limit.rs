//! Explicit, opt-in request rate limiting
//!
//! The limiter is an ordinary configuration value passed to the builder, not
//! hidden global state: a client without one never takes a lock. When
//! configured, the transport awaits [`RateLimit::acquire`] before every send.
//!
//! # Semantics
//!
//! Fixed-window limiting: up to `max_requests` permits per `per` window.
//! When the window is exhausted, `acquire` sleeps until the window rolls
//! over. Waiting is purely cooperative; there are no fairness guarantees
//! beyond FIFO ordering on the internal lock.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Fixed-window rate limiter shared by all calls on one client
#[derive(Debug)]
pub struct RateLimit {
    /// Permits per window
    max_requests: u32,
    /// Window length
    per: Duration,
    /// Current window state
    window: Mutex<Window>,
}

#[derive(Debug)]
struct Window {
    started: Instant,
    issued: u32,
}

impl RateLimit {
    /// Allow at most `max_requests` requests per `per` window
    ///
    /// `max_requests` is clamped to at least 1 so a misconfigured limiter
    /// cannot deadlock every call.
    pub fn new(max_requests: u32, per: Duration) -> Self {
        Self {
            max_requests: max_requests.max(1),
            per,
            window: Mutex::new(Window {
                started: Instant::now(),
                issued: 0,
            }),
        }
    }

    /// Wait until a permit is available, then consume it
    pub async fn acquire(&self) {
        loop {
            let mut window = self.window.lock().await;
            let now = Instant::now();

            if now.duration_since(window.started) >= self.per {
                window.started = now;
                window.issued = 0;
            }

            if window.issued < self.max_requests {
                window.issued += 1;
                return;
            }

            let remaining = self.per - now.duration_since(window.started);
            drop(window);
            tokio::time::sleep(remaining).await;
        }
    }
}
