//! Command-line entry point.
//!
//! ```text
//! u-cpusched FCFS "1,0,4,1;2,1,3,2"
//! u-cpusched RR --quantum 3 --metrics --format pretty "1,0,5,1;2,0,3,1"
//! u-cpusched SJF --generate 8 --seed 42 --format table
//! ```

mod logger;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info};

use u_cpusched::config::SimulatorConfig;
use u_cpusched::dispatching::TieBreaker;
use u_cpusched::generator::WorkloadGenerator;
use u_cpusched::models::Process;
use u_cpusched::parse::parse_processes;
use u_cpusched::scheduler::{Algorithm, SimulationReport, Simulator};
use u_cpusched::validation::validate_processes;
use u_cpusched::SimError;

#[derive(Debug, Parser)]
#[command(name = "u-cpusched", version, about = "Simulate CPU scheduling algorithms")]
struct Cli {
    /// Scheduling algorithm: FCFS, RR, SJF or Priority
    algorithm: String,

    /// Processes as "id,arrival,burst,priority;..." (read from stdin if omitted)
    input: Option<String>,

    /// Round Robin time quantum
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Ordering of processes with equal sort keys: input or id
    #[arg(long, value_name = "POLICY")]
    tie_break: Option<TieBreaker>,

    /// Emit averages and scheduling overhead alongside the processes
    #[arg(short, long)]
    metrics: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Generate COUNT random processes instead of reading input
    #[arg(long, value_name = "COUNT", conflicts_with = "input")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// Human-readable table
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("warning: logger unavailable: {e}");
    }

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let algorithm: Algorithm = cli.algorithm.parse()?;
    let config = load_config(&cli)?;
    let simulator = Simulator::new(config)?;

    let processes = load_processes(&cli)?;
    validate_processes(&processes).map_err(SimError::from)?;
    debug!("loaded {} processes", processes.len());

    let report = simulator.run(algorithm, &processes)?;
    render(&report, cli.format, cli.metrics)
}

fn load_config(cli: &Cli) -> Result<SimulatorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimulatorConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimulatorConfig::default(),
    };

    if let Some(quantum) = cli.quantum {
        config.quantum = quantum;
    }
    if let Some(tie_break) = cli.tie_break {
        config.tie_breaker = tie_break;
    }
    if cli.metrics {
        config.measure_overhead = true;
    }
    Ok(config)
}

fn load_processes(cli: &Cli) -> Result<Vec<Process>> {
    if let Some(count) = cli.generate {
        let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
        info!("generating {count} processes with seed {seed}");
        return Ok(WorkloadGenerator::new(seed).generate(count));
    }

    let input = match &cli.input {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading processes from stdin")?;
            buf
        }
    };
    Ok(parse_processes(&input)?)
}

fn render(report: &SimulationReport, format: Format, metrics: bool) -> Result<String> {
    let text = match (format, metrics) {
        (Format::Table, _) => report.to_string(),
        (Format::Json, true) => report.to_json()?,
        (Format::Pretty, true) => report.to_json_pretty()?,
        (Format::Json, false) => report.processes_json()?,
        (Format::Pretty, false) => serde_json::to_string_pretty(&report.processes)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("u-cpusched").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_bare_array_output() {
        let output = run(cli(&["FCFS", "1,0,5,1"])).unwrap();
        assert_eq!(
            output,
            r#"[{"id":1,"arrivalTime":0,"burstTime":5,"priority":1,"completionTime":5,"waitingTime":0,"turnAroundTime":5}]"#
        );
    }

    #[test]
    fn test_metrics_output_has_overhead() {
        let output = run(cli(&["SJF", "--metrics", "1,0,4,1;2,1,3,2"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["averageWaitingTime"], 1.5);
        assert!(value["overheadMs"].is_f64());
    }

    #[test]
    fn test_unknown_algorithm_reported() {
        let err = run(cli(&["LOTTERY", "1,0,5,1"])).unwrap_err();
        assert!(err.to_string().contains("unknown algorithm"));
    }

    #[test]
    fn test_malformed_input_reported() {
        let err = run(cli(&["FCFS", "1,0,x,1"])).unwrap_err();
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(run(cli(&["RR", "1,0,5,1;1,0,2,1"])).is_err());
    }

    #[test]
    fn test_bad_quantum_rejected() {
        assert!(run(cli(&["RR", "--quantum", "0", "1,0,5,1"])).is_err());
    }

    #[test]
    fn test_generated_table() {
        let output = run(cli(&["Priority", "--generate", "4", "--seed", "1", "-f", "table"])).unwrap();
        assert!(output.starts_with("Algorithm: Priority"));
    }

    #[test]
    fn test_seed_requires_generate() {
        let parsed =
            Cli::try_parse_from(["u-cpusched", "FCFS", "1,0,1,1", "--seed", "3"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_time_beyond_i32_exits_with_error() {
        let err = run(cli(&["FCFS", "1,0,9223372036854775807,1;2,0,1,1"])).unwrap_err();
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn test_unknown_tie_break_rejected() {
        let parsed = Cli::try_parse_from(["u-cpusched", "FCFS", "--tie-break", "random", "1,0,1,1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tie_break_flag() {
        let output = run(cli(&["FCFS", "--tie-break", "id", "5,0,1,1;2,0,1,1"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], 2);
    }
}
