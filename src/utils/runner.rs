//! Drives registered algorithms through the measurement harness.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::measure::{measure, CounterSet, MeasureConfig};
use crate::random::DEFAULT_ITERATIONS;
use crate::registry::{AlgorithmRunner, BenchFn};
use crate::utils::{CpuPinGuard, VariantInfo};

/// Knobs for one benchmark run, filled in from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Loop count handed to every variant
    pub iterations: u32,
    /// Untimed calls before the measured one
    pub warmups: u64,
    pub counters: CounterSet,
    /// Keep the thread on one core for the whole algorithm
    pub pin: bool,
    /// Measure variants in random order
    pub shuffle: bool,
    /// Seed for the shuffle; drawn from the thread RNG when absent
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmups: 0,
            counters: CounterSet::default(),
            pin: false,
            shuffle: false,
            seed: None,
        }
    }
}

/// What one variant returned under measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOutcome {
    pub name: &'static str,
    pub description: &'static str,
    pub value: u64,
}

/// Report name for a variant: `"<algorithm> / <variant>"`.
pub fn measurement_name(algo: &str, variant: &str) -> String {
    format!("{} / {}", algo, variant)
}

/// Variants in the order they will be measured.
///
/// Registry order unless `opts.shuffle` is set, in which case the order is a
/// permutation fixed by `opts.seed`.
pub fn plan(algo: &dyn AlgorithmRunner, opts: &RunOptions) -> Vec<VariantInfo<BenchFn>> {
    let mut variants = algo.variants();
    if opts.shuffle {
        let seed = opts.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(algorithm = algo.name(), seed, "shuffling variants");
        variants.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    variants
}

/// Measure every variant of `algo` once, printing a report per variant.
///
/// Aborts the process if the counters cannot be used, like
/// [`measure`](crate::measure::measure).
pub fn run_algorithm(algo: &dyn AlgorithmRunner, opts: &RunOptions) -> Vec<VariantOutcome> {
    let _pin = opts.pin.then(CpuPinGuard::new);

    plan(algo, opts)
        .into_iter()
        .map(|variant| {
            let config = MeasureConfig::named(measurement_name(algo.name(), variant.name))
                .with_warmups(opts.warmups)
                .with_counters(opts.counters);
            let function = variant.function;
            let iterations = opts.iterations;
            let value = measure(|| function(black_box(iterations)), &config);

            VariantOutcome {
                name: variant.name,
                description: variant.description,
                value,
            }
        })
        .collect()
}
