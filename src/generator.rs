//! Synthetic workload generation.
//!
//! Produces reproducible random process lists from a seed, for demos and
//! property tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Seeded generator of random processes.
///
/// # Example
///
/// ```
/// use u_cpusched::generator::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(1).with_burst_range(1, 4).generate(5);
/// let b = WorkloadGenerator::new(1).with_burst_range(1, 4).generate(5);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|p| (1..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: StdRng,
    arrival: (i64, i64),
    burst: (i64, i64),
    priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator with arrivals in 0..=20, bursts in 1..=10 and
    /// priorities in 1..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            arrival: (0, 20),
            burst: (1, 10),
            priority: (1, 5),
        }
    }

    /// Sets the inclusive arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = ordered(min, max);
        self
    }

    /// Sets the inclusive burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = ordered(min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Generates `count` processes with IDs `1..=count`.
    pub fn generate(&mut self, count: usize) -> Vec<Process> {
        (1..=count)
            .map(|i| {
                let id = i32::try_from(i).unwrap_or(i32::MAX);
                let arrival = self.rng.random_range(self.arrival.0..=self.arrival.1);
                let burst = self.rng.random_range(self.burst.0..=self.burst.1);
                let priority = self.rng.random_range(self.priority.0..=self.priority.1);
                Process::new(id, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
