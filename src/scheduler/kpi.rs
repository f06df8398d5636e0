//! Schedule performance metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average turnaround | mean(completion - arrival) |
//! | Average waiting | mean(waiting_time) |
//! | Average response | mean(first CPU start - arrival) |
//! | Makespan | Latest completion time |
//! | Idle time | CPU gaps between t=0 and the last slice |
//! | CPU utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! Every mean and ratio is 0.0 when its denominator is zero.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Aggregate indicators for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU idle time.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy.
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let count = schedule.processes.len();
        if count == 0 {
            return Self::default();
        }

        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let first_starts = schedule.first_starts();

        for p in &schedule.processes {
            total_turnaround += p.turn_around_time as f64;
            total_waiting += p.waiting_time as f64;

            // Zero-burst processes never hold the CPU; they respond on completion.
            let first_start = first_starts
                .get(&p.id)
                .copied()
                .unwrap_or(p.completion_time);
            total_response += (first_start - p.arrival_time) as f64;
        }

        let makespan = schedule.makespan();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                schedule.busy_time() as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            average_turnaround_time: total_turnaround / count as f64,
            average_waiting_time: total_waiting / count as f64,
            average_response_time: total_response / count as f64,
            makespan,
            idle_time: schedule.idle_time(),
            cpu_utilization,
            throughput,
        }
    }
}
