// src/scrape/rate_limit.rs
//
// Sliding-window call budget. Callers over budget sleep; nobody is rejected.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::consts::{RATE_LIMIT_CALLS, RATE_LIMIT_WINDOW_SECS};

#[derive(Debug)]
pub struct RateLimiter {
    max_calls: usize,
    window: Duration,
    calls: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// At most `max_calls` acquisitions in any `window`. `max_calls` is at least 1.
    pub fn new(max_calls: usize, window: Duration) -> Self {
        let max_calls = max_calls.max(1);
        Self {
            max_calls,
            window,
            calls: Mutex::new(VecDeque::with_capacity(max_calls.min(64))),
        }
    }

    pub fn max_calls(&self) -> usize { self.max_calls }
    pub fn window(&self) -> Duration { self.window }

    /// Take one slot, sleeping until the window has room.
    /// Returns how long the caller was held back.
    pub fn acquire(&self) -> Duration {
        let started = Instant::now();
        loop {
            let wait = {
                let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
                let now = Instant::now();
                self.evict(&mut calls, now);

                if calls.len() < self.max_calls {
                    calls.push_back(now);
                    return started.elapsed();
                }
                // Full: wait for the oldest call to age out.
                match calls.front() {
                    Some(&oldest) => self.window.saturating_sub(now.duration_since(oldest)),
                    None => Duration::ZERO,
                }
            };
            logd!("Rate limit reached ({} calls / {:?}); sleeping {:?}", self.max_calls, self.window, wait);
            thread::sleep(wait);
        }
    }

    /// Calls currently counted against the window.
    pub fn in_window(&self) -> usize {
        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        self.evict(&mut calls, Instant::now());
        calls.len()
    }

    fn evict(&self, calls: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&t) = calls.front() {
            if now.duration_since(t) >= self.window {
                calls.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Process-wide limiter guarding page scrapes: 30 calls per 60 s.
pub fn page_limiter() -> &'static RateLimiter {
    static LIMITER: OnceLock<RateLimiter> = OnceLock::new();
    LIMITER.get_or_init(|| {
        RateLimiter::new(RATE_LIMIT_CALLS, Duration::from_secs(RATE_LIMIT_WINDOW_SECS))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_budget_does_not_wait() {
        let rl = RateLimiter::new(5, Duration::from_secs(60));
        for _ in 0..5 {
            assert!(rl.acquire() < Duration::from_millis(50));
        }
        assert_eq!(rl.in_window(), 5);
    }

    #[test]
    fn over_budget_blocks_until_window_frees() {
        let window = Duration::from_millis(200);
        let rl = RateLimiter::new(3, window);
        let t0 = Instant::now();
        for _ in 0..3 { rl.acquire(); }
        rl.acquire();
        assert!(t0.elapsed() >= Duration::from_millis(190), "elapsed {:?}", t0.elapsed());
    }

    #[test]
    fn zero_budget_is_treated_as_one() {
        let rl = RateLimiter::new(0, Duration::from_millis(10));
        assert_eq!(rl.max_calls(), 1);
        rl.acquire();
        rl.acquire();
    }

    #[test]
    fn global_limiter_budget() {
        let rl = page_limiter();
        assert_eq!(rl.max_calls(), 30);
        assert_eq!(rl.window(), Duration::from_secs(60));
    }
}
