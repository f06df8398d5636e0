//! Simulation façade: configuration in, report out.
//!
//! # Flow
//! 1. Resolve the algorithm to a policy using the configuration.
//! 2. Run the policy, optionally timing just that call.
//! 3. Aggregate metrics from the resulting schedule.

use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{Algorithm, ScheduleMetrics};
use crate::config::SimulatorConfig;
use crate::error::SimError;
use crate::models::{ExecutionSlice, Process, Schedule};

/// Everything one simulation run produces.
///
/// Serializes as
/// `{"algorithm", "processes", "timeline", "averageTurnaroundTime",
/// "averageWaitingTime", ..., "overheadMs"}`; `overheadMs` is omitted when
/// timing was disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// Algorithm that produced the report.
    pub algorithm: Algorithm,
    /// Processes with computed timings, in policy output order.
    pub processes: Vec<Process>,
    /// CPU execution slices.
    pub timeline: Vec<ExecutionSlice>,
    /// Aggregate metrics.
    #[serde(flatten)]
    pub metrics: ScheduleMetrics,
    /// Wall-clock duration of the scheduling call (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overhead_ms: Option<f64>,
}

impl SimulationReport {
    /// Serializes the full report as compact JSON.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the full report as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes only the process array.
    pub fn processes_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(&self.processes)?)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(
            f,
            "{:>6} {:>8} {:>6} {:>9} {:>11} {:>8} {:>11}",
            "ID", "Arrival", "Burst", "Priority", "Completion", "Waiting", "Turnaround"
        )?;
        for p in &self.processes {
            writeln!(
                f,
                "{:>6} {:>8} {:>6} {:>9} {:>11} {:>8} {:>11}",
                p.id,
                p.arrival_time,
                p.burst_time,
                p.priority,
                p.completion_time,
                p.waiting_time,
                p.turn_around_time
            )?;
        }
        writeln!(
            f,
            "Average turnaround time: {:.2}",
            self.metrics.average_turnaround_time
        )?;
        writeln!(
            f,
            "Average waiting time:    {:.2}",
            self.metrics.average_waiting_time
        )?;
        writeln!(
            f,
            "Average response time:   {:.2}",
            self.metrics.average_response_time
        )?;
        write!(
            f,
            "Makespan: {}  Idle: {}  Utilization: {:.1}%  Throughput: {:.3}",
            self.metrics.makespan,
            self.metrics.idle_time,
            self.metrics.cpu_utilization * 100.0,
            self.metrics.throughput
        )?;
        if let Some(ms) = self.overhead_ms {
            write!(f, "\nOverhead: {ms:.3} ms")?;
        }
        Ok(())
    }
}

/// Runs scheduling algorithms with a fixed configuration.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Algorithm, Simulator};
///
/// let simulator = Simulator::default();
/// let processes = vec![Process::new(1, 0, 5).with_priority(1)];
/// let report = simulator.run(Algorithm::Fcfs, &processes).unwrap();
///
/// assert_eq!(report.processes[0].completion_time, 5);
/// assert!((report.metrics.average_turnaround_time - 5.0).abs() < 1e-9);
/// assert!(report.overhead_ms.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator.
    ///
    /// # Errors
    /// Fails if the configuration is invalid (e.g. quantum ≤ 0).
    pub fn new(config: SimulatorConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `algorithm` over `processes`.
    pub fn run(
        &self,
        algorithm: Algorithm,
        processes: &[Process],
    ) -> Result<SimulationReport, SimError> {
        let policy = algorithm.policy(&self.config)?;
        debug!(
            "running {} over {} processes ({:?})",
            policy.name(),
            processes.len(),
            self.config
        );

        let zero_bursts = processes.iter().filter(|p| p.burst_time == 0).count();
        if zero_bursts > 0 {
            warn!("{zero_bursts} process(es) have zero burst time");
        }

        let started = self.config.measure_overhead.then(Instant::now);
        let schedule: Schedule = policy.schedule(processes);
        let overhead_ms = started.map(|t| t.elapsed().as_secs_f64() * 1000.0);

        let metrics = ScheduleMetrics::calculate(&schedule);
        info!(
            "{}: avg turnaround {:.2}, avg waiting {:.2}, makespan {}",
            algorithm, metrics.average_turnaround_time, metrics.average_waiting_time, metrics.makespan
        );

        Ok(SimulationReport {
            algorithm,
            processes: schedule.processes,
            timeline: schedule.timeline,
            metrics,
            overhead_ms,
        })
    }

    /// Runs the algorithm named `name` (`FCFS`, `RR`, `SJF` or `Priority`).
    ///
    /// Unknown names fail before any computation.
    pub fn run_named(&self, name: &str, processes: &[Process]) -> Result<SimulationReport, SimError> {
        let algorithm: Algorithm = name.parse()?;
        self.run(algorithm, processes)
    }
}
