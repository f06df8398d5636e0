//! Schedule (simulation result) model.
//!
//! A schedule holds the processes with their computed timings, in the
//! order the policy emits them, plus the execution timeline: the
//! contiguous intervals during which each process held the CPU.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Process;

/// The result of running one scheduling policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Processes with computed timings.
    pub processes: Vec<Process>,
    /// CPU execution slices in chronological order.
    pub timeline: Vec<ExecutionSlice>,
}

/// One contiguous interval of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSlice {
    /// Process that ran.
    pub process_id: i32,
    /// Start of the interval.
    pub start: i64,
    /// End of the interval (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: i32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty schedule with room for `n` processes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            processes: Vec::with_capacity(n),
            timeline: Vec::with_capacity(n),
        }
    }

    /// Appends a scheduled process.
    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Appends a slice. Empty or inverted intervals are not recorded.
    pub fn add_slice(&mut self, slice: ExecutionSlice) {
        if slice.end > slice.start {
            self.timeline.push(slice);
        }
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process was scheduled.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Finds a scheduled process by ID.
    pub fn process(&self, id: i32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Latest completion time across all processes (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Returns all slices for a given process.
    pub fn slices_for_process(&self, id: i32) -> Vec<&ExecutionSlice> {
        self.timeline.iter().filter(|s| s.process_id == id).collect()
    }

    /// Total CPU time the timeline grants a process.
    pub fn cpu_time_for_process(&self, id: i32) -> i64 {
        self.slices_for_process(id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// First time a process got the CPU.
    pub fn first_start(&self, id: i32) -> Option<i64> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == id)
            .map(|s| s.start)
            .min()
    }

    /// First CPU start of every process that ran, built in one pass.
    pub fn first_starts(&self) -> HashMap<i32, i64> {
        let mut starts = HashMap::with_capacity(self.processes.len());
        for slice in &self.timeline {
            starts
                .entry(slice.process_id)
                .and_modify(|start: &mut i64| *start = (*start).min(slice.start))
                .or_insert(slice.start);
        }
        starts
    }

    /// Sum of all slice durations.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(|s| s.duration()).sum()
    }

    /// CPU idle time between t=0 and the end of the last slice.
    pub fn idle_time(&self) -> i64 {
        let mut idle = 0;
        let mut clock = 0;
        for slice in &self.timeline {
            if slice.start > clock {
                idle += slice.start - clock;
            }
            clock = clock.max(slice.end);
        }
        idle
    }
}
