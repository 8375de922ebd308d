//! Simulated network latency applied before every store operation.

use std::time::Duration;

/// Delay applied before a store operation runs.
pub trait Latency {
    fn wait(&self);
}

/// Blocks the calling thread for a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Latency for FixedLatency {
    fn wait(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Completes immediately. Used by tests and batch tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn wait(&self) {}
}

#[cfg(test)]
mod tests {
    use super::{FixedLatency, Latency};
    use std::time::{Duration, Instant};

    #[test]
    fn fixed_latency_waits_at_least_the_delay() {
        let latency = FixedLatency::from_millis(20);
        let started = Instant::now();
        latency.wait();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
