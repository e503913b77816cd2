//! # perf-measure
//!
//! Measure a closure with the CPU's hardware performance counters and get a
//! small human-readable report on stderr: retired instructions, cycles,
//! time running and the ratios between them.
//!
//! The [`random`] module carries the LCG micro-benchmarks that the
//! `lcg-bench` binary runs through the harness.

#[cfg(not(target_os = "linux"))]
compile_error!("perf-measure relies on perf_event_open(2) and only builds on Linux");

pub mod measure;
pub mod random;
pub mod registry;
pub mod utils;

pub use measure::{measure, try_measure, MeasureConfig};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::measure::{measure, try_measure, CounterSet, MeasureConfig, MeasureError};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();

        println!("Verifying {} algorithms...", algorithms.len());

        for algo in algorithms {
            println!("Verifying algorithm: {}", algo.name());
            match algo.verify() {
                Ok(_) => println!("  ✅ Algorithm '{}' passed verification", algo.name()),
                Err(e) => panic!(
                    "  ❌ Algorithm '{}' failed verification: {}",
                    algo.name(),
                    e
                ),
            }
        }
    }
}
