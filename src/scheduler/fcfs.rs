//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (ties per [`TieBreaker`]).
//! 2. Keep a clock starting at t=0. If the next process has not arrived
//!    yet, the CPU idles until it does.
//! 3. Run each process to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the timeline.

use log::{debug, trace};

use super::SchedulingPolicy;
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::models::{ExecutionSlice, Process, Schedule};

/// Non-preemptive first-come-first-served policy.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{FirstComeFirstServed, SchedulingPolicy};
///
/// let processes = vec![
///     Process::new(1, 0, 4).with_priority(1),
///     Process::new(2, 1, 3).with_priority(2),
/// ];
/// let schedule = FirstComeFirstServed::new().schedule(&processes);
/// assert_eq!(schedule.processes[1].completion_time, 7);
/// assert_eq!(schedule.processes[1].waiting_time, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FirstComeFirstServed {
    tie_breaker: TieBreaker,
}

impl FirstComeFirstServed {
    /// Creates the policy with input-order tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how processes with equal arrival times are ordered.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }
}

impl SchedulingPolicy for FirstComeFirstServed {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let engine = RuleEngine::new()
            .with_rule(rules::Fifo)
            .with_final_tie_breaker(self.tie_breaker);
        let order = engine.sort_indices(processes);

        debug!("FCFS: scheduling {} processes", processes.len());

        let mut schedule = Schedule::with_capacity(processes.len());
        let mut current_time = 0;

        for idx in order {
            let mut process = processes[idx];
            if current_time < process.arrival_time {
                trace!("FCFS: idle {}..{}", current_time, process.arrival_time);
                current_time = process.arrival_time;
            }

            let start = current_time;
            process.finish_at(current_time + process.burst_time);
            current_time += process.burst_time;

            schedule.add_slice(ExecutionSlice::new(process.id, start, current_time));
            schedule.add_process(process);
        }

        debug!("FCFS: finished at t={}", current_time);
        schedule
    }
}
