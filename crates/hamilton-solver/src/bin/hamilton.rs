// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # hamilton
//!
//! Command-line front end: solves the built-in sample instance or a seeded
//! random complete instance and prints the report and search statistics.

use clap::Parser;
use hamilton_bnb::monitor::{composite::CompositeTreeSearchMonitor, log::LogTreeSearchMonitor};
use hamilton_model::{graph::Graph, sample::vietnam_cities};
use hamilton_solver::{
    instance::random_complete_graph,
    solver::{SolveReport, TspSolver},
};
use log::error;
use std::io::Write;
use std::time::{Duration, Instant};

/// Command-line interface for the hamilton TSP solver
#[derive(Parser, Debug)]
#[command(name = "hamilton")]
#[command(version)]
#[command(about = "Exact branch-and-bound solver for the symmetric travelling salesman problem")]
#[command(long_about = "Finds a shortest round trip visiting every city exactly once:
  hamilton                             # Solve the built-in Vietnamese sample
  hamilton --random 10                 # Solve 10 random cities (seed 42)
  hamilton --random 12 --seed 7 -v     # Another instance, with progress logging")]
struct Cli {
    /// Solve the built-in sample instance (the default)
    #[arg(long, conflicts_with = "random")]
    sample: bool,

    /// Solve a random complete instance with this many cities
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for the random instance
    #[arg(long, default_value_t = 42, requires = "random")]
    seed: u64,

    /// Largest road length of the random instance
    #[arg(
        long,
        default_value_t = 100,
        requires = "random",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_weight: u32,

    /// Enable verbose logging and search progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.target(env_logger::Target::Stderr).init();

    if let Err(e) = run(&cli) {
        error!("Failed to write the result: {e}");
        std::process::exit(1);
    }
}

fn build_graph(cli: &Cli) -> Graph<f64> {
    match (cli.sample, cli.random) {
        (false, Some(num_cities)) => {
            log::info!(
                "Generating {num_cities} random cities (seed {}, max weight {})",
                cli.seed,
                cli.max_weight
            );
            random_complete_graph(num_cities, cli.max_weight, cli.seed)
        }
        _ => {
            log::info!("Using the built-in sample instance");
            vietnam_cities()
        }
    }
}

fn run(cli: &Cli) -> std::io::Result<()> {
    let graph = build_graph(cli);

    let mut monitor = CompositeTreeSearchMonitor::new();
    if cli.verbose {
        monitor.add_monitor(LogTreeSearchMonitor::new(Duration::from_secs(1), 4095));
    }

    let mut solver = TspSolver::preallocated(graph.vertex_count());
    let start = Instant::now();
    let outcome = solver.solve_detailed(&graph, monitor);
    let report = SolveReport::from_outcome(&graph, &outcome, start.elapsed());

    let mut out = std::io::stdout().lock();
    writeln!(out, "{graph}")?;
    writeln!(out, "{report}")?;
    writeln!(out)?;
    write!(out, "{}", outcome.statistics())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_sample() {
        let cli = Cli::try_parse_from(["hamilton"]).unwrap();
        assert!(cli.random.is_none());
        assert!(!cli.verbose);
        assert_eq!(build_graph(&cli).vertex_count(), 8);
    }

    #[test]
    fn test_random_instance_arguments() {
        let cli =
            Cli::try_parse_from(["hamilton", "--random", "5", "--seed", "3", "--max-weight", "9"])
                .unwrap();
        assert_eq!(cli.seed, 3);
        assert_eq!(cli.max_weight, 9);
        assert_eq!(build_graph(&cli).vertex_count(), 5);
    }

    #[test]
    fn test_rejects_zero_max_weight() {
        assert!(Cli::try_parse_from(["hamilton", "--random", "5", "--max-weight", "0"]).is_err());
    }

    #[test]
    fn test_sample_conflicts_with_random() {
        assert!(Cli::try_parse_from(["hamilton", "--sample", "--random", "4"]).is_err());
    }
}
