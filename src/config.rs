//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::SimError;

/// Default Round Robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Settings shared by all scheduling runs.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use u_cpusched::config::SimulatorConfig;
/// use u_cpusched::dispatching::TieBreaker;
///
/// let config = SimulatorConfig::from_json(r#"{"quantum": 4, "tieBreaker": "by_id"}"#).unwrap();
/// assert_eq!(config.quantum, 4);
/// assert_eq!(config.tie_breaker, TieBreaker::ById);
/// assert!(!config.measure_overhead);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulatorConfig {
    /// Round Robin time quantum (must be positive).
    pub quantum: i64,
    /// Ordering of processes with equal sort keys.
    pub tie_breaker: TieBreaker,
    /// Whether to time the scheduling call.
    pub measure_overhead: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            tie_breaker: TieBreaker::InputOrder,
            measure_overhead: false,
        }
    }
}

impl SimulatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the tie-breaking policy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Enables or disables wall-clock timing of the scheduling call.
    pub fn with_overhead_measurement(mut self, enabled: bool) -> Self {
        self.measure_overhead = enabled;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.quantum <= 0 {
            return Err(SimError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }
}
