//! Ranked non-preemptive policies: Shortest Job First and Priority.
//!
//! # Algorithm
//!
//! 1. Rank all processes by a single key (burst time or priority value),
//!    ties per [`TieBreaker`].
//! 2. Run them back to back from t=0. Arrival times neither gate execution
//!    nor affect the ranking; every process is treated as ready at t=0.
//! 3. `waiting_time` is the clock when the process starts,
//!    `completion_time` the clock when it ends, and `turn_around_time`
//!    is `completion_time - arrival_time`.
//!
//! With non-zero arrival times `waiting_time` therefore need not equal
//! `turn_around_time - burst_time`.

use log::debug;

use super::SchedulingPolicy;
use crate::dispatching::{rules, DispatchingRule, RuleEngine, TieBreaker};
use crate::models::{ExecutionSlice, Process, Schedule};

fn run_ranked<R>(label: &str, rule: R, tie_breaker: TieBreaker, processes: &[Process]) -> Schedule
where
    R: DispatchingRule + 'static,
{
    let engine = RuleEngine::new()
        .with_rule(rule)
        .with_final_tie_breaker(tie_breaker);
    let order = engine.sort_indices(processes);

    debug!("{}: scheduling {} processes", label, processes.len());

    let mut schedule = Schedule::with_capacity(processes.len());
    let mut current_time = 0;

    for idx in order {
        let mut process = processes[idx];
        let start = current_time;

        process.waiting_time = current_time;
        current_time += process.burst_time;
        process.completion_time = current_time;
        process.turn_around_time = process.completion_time - process.arrival_time;

        schedule.add_slice(ExecutionSlice::new(process.id, start, current_time));
        schedule.add_process(process);
    }

    debug!("{}: finished at t={}", label, current_time);
    schedule
}

/// Non-preemptive shortest-job-first policy.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{SchedulingPolicy, ShortestJobFirst};
///
/// let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
/// let schedule = ShortestJobFirst::new().schedule(&processes);
///
/// assert_eq!(schedule.processes[0].id, 2);
/// assert_eq!(schedule.processes[0].turn_around_time, 2);
/// assert_eq!(schedule.processes[1].completion_time, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShortestJobFirst {
    tie_breaker: TieBreaker,
}

impl ShortestJobFirst {
    /// Creates the policy with input-order tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how processes with equal burst times are ordered.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }
}

impl SchedulingPolicy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_ranked(self.name(), rules::ShortestBurst, self.tie_breaker, processes)
    }
}

/// Non-preemptive priority policy (lower value runs first).
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduling {
    tie_breaker: TieBreaker,
}

impl PriorityScheduling {
    /// Creates the policy with input-order tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how processes with equal priority are ordered.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }
}

impl SchedulingPolicy for PriorityScheduling {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_ranked(self.name(), rules::PriorityValue, self.tie_breaker, processes)
    }
}
