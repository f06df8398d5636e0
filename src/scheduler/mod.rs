//! Scheduling policies, metrics, and the simulator façade.
//!
//! # Policies
//!
//! | Name | Type | Preemptive | Order |
//! |------|------|-----------|-------|
//! | `FCFS` | [`FirstComeFirstServed`] | no | arrival time, idle gaps honored |
//! | `RR` | [`RoundRobin`] | yes | input order, fixed quantum |
//! | `SJF` | [`ShortestJobFirst`] | no | burst time, arrival ignored |
//! | `Priority` | [`PriorityScheduling`] | no | priority value, arrival ignored |
//!
//! Every policy takes the input processes by shared reference and returns
//! a fresh [`Schedule`]; the input is never mutated.

mod fcfs;
mod kpi;
mod ranked;
mod round_robin;
mod simulator;

pub use fcfs::FirstComeFirstServed;
pub use kpi::ScheduleMetrics;
pub use ranked::{PriorityScheduling, ShortestJobFirst};
pub use round_robin::RoundRobin;
pub use simulator::{SimulationReport, Simulator};

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SimulatorConfig;
use crate::error::SimError;
use crate::models::{Process, Schedule};

/// A scheduling strategy.
pub trait SchedulingPolicy: Debug {
    /// Policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Computes the timeline for `processes`.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// The selectable scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Round Robin.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Priority scheduling (non-preemptive).
    Priority,
}

impl Algorithm {
    /// All algorithms, in canonical order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::RoundRobin,
        Algorithm::Sjf,
        Algorithm::Priority,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::RoundRobin => "RR",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
        }
    }

    /// Builds the policy for this algorithm from `config`.
    pub fn policy(&self, config: &SimulatorConfig) -> Result<Box<dyn SchedulingPolicy>, SimError> {
        let policy: Box<dyn SchedulingPolicy> = match self {
            Algorithm::Fcfs => {
                Box::new(FirstComeFirstServed::new().with_tie_breaker(config.tie_breaker))
            }
            Algorithm::RoundRobin => Box::new(RoundRobin::new(config.quantum)?),
            Algorithm::Sjf => {
                Box::new(ShortestJobFirst::new().with_tie_breaker(config.tie_breaker))
            }
            Algorithm::Priority => {
                Box::new(PriorityScheduling::new().with_tie_breaker(config.tie_breaker))
            }
        };
        Ok(policy)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses an algorithm name, case-insensitively.
impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SimError::UnknownAlgorithm(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("Priority".parse::<Algorithm>().unwrap(), Algorithm::Priority);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "LOTTERY".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, SimError::UnknownAlgorithm(ref n) if n == "LOTTERY"));
    }

    #[test]
    fn test_display_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_policy_names() {
        let config = SimulatorConfig::default();
        for algorithm in Algorithm::ALL {
            let policy = algorithm.policy(&config).unwrap();
            assert_eq!(policy.name(), algorithm.name());
        }
    }

    #[test]
    fn test_round_robin_policy_rejects_bad_quantum() {
        let config = SimulatorConfig::default().with_quantum(0);
        assert!(Algorithm::RoundRobin.policy(&config).is_err());
        assert!(Algorithm::Fcfs.policy(&config).is_ok());
    }

    #[test]
    fn test_empty_input_all_policies() {
        let config = SimulatorConfig::default();
        for algorithm in Algorithm::ALL {
            let schedule = algorithm.policy(&config).unwrap().schedule(&[]);
            assert!(schedule.is_empty());
            assert!(schedule.timeline.is_empty());
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Algorithm::RoundRobin).unwrap(), "\"RR\"");
        assert_eq!(serde_json::to_string(&Algorithm::Priority).unwrap(), "\"Priority\"");
    }
}
