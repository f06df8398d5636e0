//! CPU process-scheduling simulator.
//!
//! Computes the timeline a classic uniprocessor scheduler would produce
//! for a fixed list of processes, and reports per-process completion,
//! waiting and turnaround times plus aggregate metrics. Nothing is
//! executed: this is timeline arithmetic only.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `Schedule`, `ExecutionSlice`
//! - **`dispatching`**: ordering rules (FIFO, SPT, priority) and tie-breaking
//! - **`scheduler`**: FCFS, Round Robin, SJF, Priority policies; metrics; `Simulator`
//! - **`parse`**: `id,arrival,burst,priority;...` input format
//! - **`validation`**: input integrity checks (duplicate IDs, negative times)
//! - **`generator`**: seeded random workloads
//! - **`config`**: `SimulatorConfig`
//!
//! # Example
//!
//! ```
//! use u_cpusched::parse::parse_processes;
//! use u_cpusched::scheduler::Simulator;
//!
//! let processes = parse_processes("1,0,4,1;2,1,3,2").unwrap();
//! let report = Simulator::default().run_named("FCFS", &processes).unwrap();
//!
//! assert_eq!(report.processes[1].completion_time, 7);
//! assert!((report.metrics.average_waiting_time - 1.5).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod parse;
pub mod scheduler;
pub mod validation;

pub use error::SimError;
