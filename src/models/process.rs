//! Process model.
//!
//! A process is one schedulable unit: an identifier, the time it becomes
//! ready, the CPU time it needs, and a priority. The three derived timing
//! fields are filled in by a scheduling policy.
//!
//! # Time Representation
//! All times are integer ticks of a simulated clock starting at t=0.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Serialized with camelCase field names (`arrivalTime`, `turnAroundTime`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier, assigned by the caller.
    pub id: i32,
    /// Time at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// Time at which the process finished. Zero until scheduled.
    #[serde(default)]
    pub completion_time: i64,
    /// Time spent ready but not running. Zero until scheduled.
    #[serde(default)]
    pub waiting_time: i64,
    /// Total time in the system. Zero until scheduled.
    #[serde(default)]
    pub turn_around_time: i64,
}

impl Process {
    /// Creates a process with priority 0 and no computed timings.
    pub fn new(id: i32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            completion_time: 0,
            waiting_time: 0,
            turn_around_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Records completion and derives turnaround and waiting time.
    ///
    /// `turn_around_time = completion - arrival`,
    /// `waiting_time = turn_around_time - burst`.
    pub fn finish_at(&mut self, completion_time: i64) {
        self.completion_time = completion_time;
        self.turn_around_time = completion_time - self.arrival_time;
        self.waiting_time = self.turn_around_time - self.burst_time;
    }

    /// Whether the standard turnaround/waiting identities hold.
    pub fn timings_consistent(&self) -> bool {
        self.turn_around_time == self.completion_time - self.arrival_time
            && self.waiting_time == self.turn_around_time - self.burst_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 3, 10).with_priority(2);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 10);
        assert_eq!(p.priority, 2);
        assert_eq!(p.completion_time, 0);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.turn_around_time, 0);
    }

    #[test]
    fn test_finish_at_derives_timings() {
        let mut p = Process::new(2, 1, 3);
        p.finish_at(7);
        assert_eq!(p.completion_time, 7);
        assert_eq!(p.turn_around_time, 6);
        assert_eq!(p.waiting_time, 3);
        assert!(p.timings_consistent());
    }

    #[test]
    fn test_serde_field_names() {
        let mut p = Process::new(1, 0, 5).with_priority(1);
        p.finish_at(5);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["arrivalTime"], 0);
        assert_eq!(json["burstTime"], 5);
        assert_eq!(json["priority"], 1);
        assert_eq!(json["completionTime"], 5);
        assert_eq!(json["waitingTime"], 0);
        assert_eq!(json["turnAroundTime"], 5);
    }

    #[test]
    fn test_deserialize_without_derived_fields() {
        let p: Process =
            serde_json::from_str(r#"{"id":4,"arrivalTime":2,"burstTime":6,"priority":3}"#).unwrap();
        assert_eq!(p, Process::new(4, 2, 6).with_priority(3));
    }
}
