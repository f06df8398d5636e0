//! Dispatching rules and the rule engine that orders ready processes.
//!
//! The non-preemptive policies differ only in how they rank processes:
//! FCFS by arrival time, SJF by burst time, Priority by priority value.
//! Each ranking is a [`DispatchingRule`]; the [`RuleEngine`] applies rules
//! in sequence and resolves remaining ties with a [`TieBreaker`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine, TieBreaker};
//! use u_cpusched::models::Process;
//!
//! let processes = vec![Process::new(2, 0, 8), Process::new(1, 0, 3)];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Sort key returned by a dispatching rule.
///
/// Lower keys = dispatched first.
pub type RuleKey = i64;

/// A dispatching rule that ranks processes.
///
/// # Key Convention
/// **Lower key = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Computes the sort key of a process.
    fn evaluate(&self, process: &Process) -> RuleKey;
}
