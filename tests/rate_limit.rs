// tests/rate_limit.rs
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sofifa_scrape::RateLimiter;

#[test]
fn thirty_first_call_waits_for_the_window() {
    let window = Duration::from_millis(300);
    let rl = RateLimiter::new(30, window);
    let t0 = Instant::now();
    for _ in 0..30 {
        rl.acquire();
    }
    assert!(t0.elapsed() < Duration::from_millis(150), "first 30 should not wait");

    let waited = rl.acquire();
    assert!(t0.elapsed() >= Duration::from_millis(290), "elapsed {:?}", t0.elapsed());
    assert!(waited > Duration::ZERO);
}

#[test]
fn shared_across_threads() {
    let rl = Arc::new(RateLimiter::new(4, Duration::from_millis(250)));
    let t0 = Instant::now();
    let handles: Vec<_> = (0..6)
        .map(|_| {
            let rl = Arc::clone(&rl);
            thread::spawn(move || { rl.acquire(); })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    // six calls through a budget of four: the last two had to wait a window
    assert!(t0.elapsed() >= Duration::from_millis(240), "elapsed {:?}", t0.elapsed());
}
