use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Window {
    opened_at: Instant,
    hits: u32,
}

/// Fixed one-second window limiter shared across the public quiz API.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    limit: u32,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            window: Arc::new(Mutex::new(Window {
                opened_at: Instant::now(),
                hits: 0,
            })),
        }
    }

    fn try_acquire(&self) -> bool {
        let mut window = self.window.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(window.opened_at) >= WINDOW {
            window.opened_at = now;
            window.hits = 0;
        }
        if window.hits >= self.limit {
            return false;
        }
        window.hits += 1;
        true
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.try_acquire() {
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_once_window_is_full() {
        let limiter = RateLimiter::new(2);
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn limit_is_at_least_one() {
        let limiter = RateLimiter::new(0);
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }
}
