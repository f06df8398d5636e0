//! Built-in dispatching rules.
//!
//! All rules return lower keys for processes that should run first.

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

/// First In, First Out.
///
/// Ranks processes by arrival time. Used by FCFS.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleKey {
        process.arrival_time
    }
}

/// Shortest Processing Time.
///
/// Ranks processes by burst time. Used by SJF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleKey {
        process.burst_time
    }
}

/// Ranks processes by priority value (lower value runs first).
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl DispatchingRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }
}
