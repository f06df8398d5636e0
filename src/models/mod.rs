//! Simulation domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Process` | One schedulable unit with arrival, burst, priority and computed timings |
//! | `Schedule` | Computed processes plus the execution timeline |
//! | `ExecutionSlice` | One contiguous CPU interval held by a process |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{ExecutionSlice, Schedule};
