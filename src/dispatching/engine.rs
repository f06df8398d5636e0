//! Rule engine for sequential multi-key ordering.
//!
//! Rules are applied in order; the next rule is consulted only when the
//! previous one ties. The final tie-breaker decides what happens when all
//! rules tie.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::DispatchingRule;
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep the original input order (stable sort).
    #[default]
    InputOrder,
    /// Ascending process ID.
    ById,
}

impl FromStr for TieBreaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" | "input_order" => Ok(TieBreaker::InputOrder),
            "id" | "by_id" => Ok(TieBreaker::ById),
            other => Err(format!("unknown tie-breaker '{other}' (expected 'input' or 'id')")),
        }
    }
}

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PriorityValue)
///     .with_rule(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `processes`, ordered for dispatch.
    ///
    /// The sort is stable, so with [`TieBreaker::InputOrder`] fully tied
    /// processes keep their relative input order.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_shortest_burst_ordering() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 1),
            Process::new(3, 0, 3),
        ];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.sort_indices(&processes), vec![1, 2, 0]);
    }

    #[test]
    fn test_input_order_tie_breaker_is_stable() {
        let processes = vec![
            Process::new(9, 0, 2),
            Process::new(3, 0, 2),
            Process::new(5, 0, 2),
        ];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.sort_indices(&processes), vec![0, 1, 2]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let processes = vec![
            Process::new(9, 0, 2),
            Process::new(3, 0, 2),
            Process::new(5, 0, 2),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_final_tie_breaker(TieBreaker::ById);
        assert_eq!(engine.sort_indices(&processes), vec![1, 2, 0]);
    }

    #[test]
    fn test_sequential_rules() {
        let processes = vec![
            Process::new(1, 4, 2).with_priority(1),
            Process::new(2, 1, 2).with_priority(1),
            Process::new(3, 0, 2).with_priority(2),
        ];
        // Priority ties between 1 and 2 → arrival decides
        let engine = RuleEngine::new()
            .with_rule(rules::PriorityValue)
            .with_rule(rules::Fifo);
        assert_eq!(engine.sort_indices(&processes), vec![1, 0, 2]);
    }

    #[test]
    fn test_empty_processes() {
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_tie_breaker_parse() {
        assert_eq!("input".parse::<TieBreaker>(), Ok(TieBreaker::InputOrder));
        assert_eq!("ID".parse::<TieBreaker>(), Ok(TieBreaker::ById));
        assert_eq!("by_id".parse::<TieBreaker>(), Ok(TieBreaker::ById));
        assert!("random".parse::<TieBreaker>().is_err());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        let text = format!("{engine:?}");
        assert!(text.contains("FIFO"));
        assert!(text.contains("InputOrder"));
    }
}
