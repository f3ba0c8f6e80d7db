//! Client-side token bucket rate limiting.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Longest single sleep while waiting for a token; the bucket is re-checked
/// after every sleep.
const MAX_WAIT: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// A token bucket holding up to `burst` tokens, refilled at `qps` tokens per
/// second. Each request takes one token.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    qps: f64,
    burst: f64,
    bucket: Mutex<Bucket>,
}

impl RateLimiter {
    /// Returns `None` when `qps` disables limiting.
    pub(crate) fn new(qps: f32, burst: u32) -> Option<Self> {
        if qps <= 0.0 {
            return None;
        }
        let burst = f64::from(burst.max(1));
        Some(Self {
            qps: f64::from(qps),
            burst,
            bucket: Mutex::new(Bucket {
                tokens: burst,
                last_refill: Instant::now(),
            }),
        })
    }

    /// Waits until a token is available and takes it.
    pub(crate) async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.bucket.lock().await;
                let now = Instant::now();
                let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
                bucket.tokens = elapsed.mul_add(self.qps, bucket.tokens).min(self.burst);
                bucket.last_refill = now;

                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    return;
                }
                Duration::try_from_secs_f64((1.0 - bucket.tokens) / self.qps)
                    .map_or(MAX_WAIT, |wait| wait.min(MAX_WAIT))
            };

            tracing::debug!("Client-side throttling, waiting {:?} for a request token", wait);
            tokio::time::sleep(wait).await;
        }
    }
}
