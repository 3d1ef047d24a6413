// Receiver-qualifier timing: `&self` vs `&mut self` over an identical loop.

use std::time::{Duration, Instant};

/// Hosts the same accumulation loop behind both receiver qualifiers.
///
/// The accumulator is a `u64`: summing `0..1_000_000` reaches
/// 499_999_500_000, far past what 32 bits hold.
pub struct Workload {
    limit: u64,
}

impl Workload {
    pub fn new(limit: u64) -> Self {
        Workload { limit }
    }

    /// Shared-receiver variant.
    pub fn sum_by_ref(&self) -> u64 {
        let mut sum = 0u64;
        for i in 0..self.limit {
            sum += i;
        }
        sum
    }

    /// Exclusive-receiver variant. Must stay bit-identical to `sum_by_ref`:
    /// same loop bound, same arithmetic. Anything else and the timing
    /// comparison measures the workload, not the qualifier.
    pub fn sum_by_mut(&mut self) -> u64 {
        let mut sum = 0u64;
        for i in 0..self.limit {
            sum += i;
        }
        sum
    }
}

impl Default for Workload {
    fn default() -> Self {
        Workload::new(1_000_000)
    }
}

/// Runs `op` `batch` times and returns the wall-clock time of the whole
/// batch. One `Instant` pair around the batch, so the timer is read twice no
/// matter how large the batch is.
pub fn measure<F: FnMut()>(batch: u32, mut op: F) -> Duration {
    let start = Instant::now();
    for _ in 0..batch {
        op();
    }
    start.elapsed()
}
