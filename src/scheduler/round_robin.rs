//! Round Robin.
//!
//! # Algorithm
//!
//! Repeated passes over all unfinished processes in input order. Each
//! visit grants at most one quantum; a process whose remaining time fits
//! in the quantum runs to completion and records its completion time.
//! Arrival times do not gate execution: every process is in the rotation
//! from t=0.
//!
//! A process with zero burst time is finished the first time it is
//! visited, at the current clock, without consuming CPU time.
//!
//! Turnaround and waiting times are derived from the completion time with
//! the same identities the other policies use.

use log::{debug, trace};

use super::SchedulingPolicy;
use crate::config::DEFAULT_QUANTUM;
use crate::error::SimError;
use crate::models::{ExecutionSlice, Process, Schedule};

/// Preemptive round-robin policy with a fixed time quantum.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates the policy.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, SimError> {
        if quantum <= 0 {
            return Err(SimError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let n = processes.len();
        debug!("RR: scheduling {} processes, quantum={}", n, self.quantum);

        let mut finished: Vec<Process> = processes.to_vec();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time.max(0)).collect();
        let mut done = vec![false; n];
        let mut pending = n;
        let mut current_time = 0;
        let mut schedule = Schedule::with_capacity(n);

        while pending > 0 {
            for i in 0..n {
                if done[i] {
                    continue;
                }

                let run = remaining[i].min(self.quantum);
                if run > 0 {
                    schedule.add_slice(ExecutionSlice::new(
                        processes[i].id,
                        current_time,
                        current_time + run,
                    ));
                    trace!(
                        "RR: process {} runs {}..{}",
                        processes[i].id,
                        current_time,
                        current_time + run
                    );
                    current_time += run;
                    remaining[i] -= run;
                }

                if remaining[i] == 0 {
                    finished[i].finish_at(current_time);
                    done[i] = true;
                    pending -= 1;
                }
            }
        }

        debug!("RR: finished at t={}", current_time);
        schedule.processes = finished;
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn run(quantum: i64, processes: &[Process]) -> Schedule {
        RoundRobin::new(quantum).unwrap().schedule(processes)
    }

    #[test]
    fn test_rejects_non_positive_quantum() {
        assert!(matches!(RoundRobin::new(0), Err(SimError::InvalidQuantum(0))));
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::default().quantum(), 2);
    }

    #[test]
    fn test_interleaving() {
        // P1 burst 5, P2 burst 3, quantum 2:
        // P1 0..2, P2 2..4, P1 4..6, P2 6..7 (done), P1 7..8 (done)
        let schedule = run(2, &[Process::new(1, 0, 5), Process::new(2, 0, 3)]);
        let p1 = schedule.process(1).unwrap();
        let p2 = schedule.process(2).unwrap();
        assert_eq!(p2.completion_time, 7);
        assert_eq!(p1.completion_time, 8);
        assert_eq!(schedule.timeline.len(), 5);
        assert_eq!(schedule.timeline[3], ExecutionSlice::new(2, 6, 7));
    }

    #[test]
    fn test_turnaround_and_waiting_derived() {
        let schedule = run(2, &[Process::new(1, 0, 5), Process::new(2, 1, 3)]);
        for p in &schedule.processes {
            assert!(p.timings_consistent());
        }
        let p2 = schedule.process(2).unwrap();
        assert_eq!(p2.turn_around_time, 6);
        assert_eq!(p2.waiting_time, 3);
    }

    #[test]
    fn test_output_keeps_input_order() {
        let schedule = run(2, &[Process::new(5, 0, 9), Process::new(2, 0, 1)]);
        let ids: Vec<i32> = schedule.processes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn test_burst_fits_quantum_exactly() {
        let schedule = run(2, &[Process::new(1, 0, 2), Process::new(2, 0, 4)]);
        assert_eq!(schedule.process(1).unwrap().completion_time, 2);
        assert_eq!(schedule.process(2).unwrap().completion_time, 6);
        assert_eq!(schedule.slices_for_process(1).len(), 1);
    }

    #[test]
    fn test_zero_burst_finishes_without_advancing_clock() {
        let schedule = run(
            2,
            &[Process::new(1, 0, 3), Process::new(2, 0, 0), Process::new(3, 0, 1)],
        );
        // P1 0..2, P2 done at 2, P3 2..3, P1 3..4
        assert_eq!(schedule.process(2).unwrap().completion_time, 2);
        assert!(schedule.slices_for_process(2).is_empty());
        assert_eq!(schedule.process(3).unwrap().completion_time, 3);
        assert_eq!(schedule.process(1).unwrap().completion_time, 4);
    }

    #[test]
    fn test_all_zero_bursts() {
        let schedule = run(2, &[Process::new(1, 0, 0), Process::new(2, 0, 0)]);
        assert!(schedule.processes.iter().all(|p| p.completion_time == 0));
        assert!(schedule.timeline.is_empty());
    }

    #[test]
    fn test_large_quantum_behaves_like_input_order_fcfs() {
        let schedule = run(100, &[Process::new(1, 0, 4), Process::new(2, 0, 3)]);
        assert_eq!(schedule.process(1).unwrap().completion_time, 4);
        assert_eq!(schedule.process(2).unwrap().completion_time, 7);
    }

    #[test]
    fn test_slices_sum_to_burst_and_last_finisher_is_max() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let n = rng.random_range(1..=8);
            let processes: Vec<Process> = (0..n)
                .map(|i| Process::new(i, rng.random_range(0..=5), rng.random_range(1..=12)))
                .collect();
            let quantum = rng.random_range(1..=4);
            let schedule = run(quantum, &processes);

            for p in &processes {
                assert_eq!(schedule.cpu_time_for_process(p.id), p.burst_time);
                assert!(schedule
                    .slices_for_process(p.id)
                    .iter()
                    .all(|s| s.duration() <= quantum));
            }

            let last = schedule.timeline.last().unwrap();
            let max_completion = schedule.makespan();
            assert_eq!(last.end, max_completion);
            assert_eq!(
                schedule.process(last.process_id).unwrap().completion_time,
                max_completion
            );
        }
    }

    #[test]
    fn test_empty() {
        let schedule = run(2, &[]);
        assert!(schedule.is_empty());
    }
}
