//! Runs the LCG benchmarks under hardware counters.
//!
//! Usage:
//!   lcg-bench                  # Measure every variant of every algorithm
//!   lcg-bench lcg_mod          # Measure one algorithm
//!   lcg-bench --list           # List algorithms and variants
//!   lcg-bench --verify         # Check variants agree, measure nothing
//!
//! Reports go to stderr, computed values to stdout.

use std::io::IsTerminal;

use clap::Parser;
use perf_measure::measure::CounterSet;
use perf_measure::random::DEFAULT_ITERATIONS;
use perf_measure::registry::{build_registry, AlgorithmRunner};
use perf_measure::utils::{locale, run_algorithm, tui, RunOptions};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List available algorithms and their variants
    #[arg(short, long)]
    list: bool,

    /// Verify every variant against its reference instead of measuring
    #[arg(long)]
    verify: bool,

    /// Loop count passed to each variant
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Untimed runs before the measured one
    #[arg(short, long, default_value_t = 0)]
    warmups: u64,

    /// Count retired instructions only, without the cycle counter
    #[arg(long)]
    single: bool,

    /// Pin the thread to its current core while measuring
    #[arg(long)]
    pin: bool,

    /// Measure variants in random order
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn run_options(&self) -> RunOptions {
        RunOptions {
            iterations: self.iterations,
            warmups: self.warmups,
            counters: if self.single {
                CounterSet::Instructions
            } else {
                CounterSet::InstructionsAndCycles
            },
            pin: self.pin,
            shuffle: self.shuffle,
            seed: self.seed,
        }
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(args.log_level())
        .init();
    locale::init();

    let registry = build_registry();

    if args.list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let selected: Vec<&dyn AlgorithmRunner> = match &args.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    if args.verify {
        let mut failed = false;
        for algo in &selected {
            match algo.verify() {
                Ok(()) => println!("{}: ok", algo.name()),
                Err(e) => {
                    println!("{}: FAILED - {}", algo.name(), e);
                    failed = true;
                }
            }
        }
        if failed {
            std::process::exit(1);
        }
        return;
    }

    let opts = args.run_options();
    tracing::debug!(?opts, "starting benchmark run");

    tui::print_header();
    for algo in selected {
        tui::print_algo_info_box(algo);
        let outcomes = run_algorithm(algo, &opts);
        tui::print_outcomes(algo, &outcomes);
    }
}
