//! Hardware counter measurement harness.
//!
//! [`measure`] opens a counter group on the calling thread (retired
//! instructions as the leader, CPU cycles as a member), runs the work once
//! with the group enabled, reads every counter back in a single group read and
//! prints a report to stderr. The work's own return value is passed through.
//!
//! The leader counts instructions rather than cycles so that a single group
//! read yields both sides of the instructions-per-cycle ratio. Reports taken
//! with a cycles-only group are therefore not line-for-line comparable.
//!
//! ```no_run
//! use perf_measure::measure::{measure, MeasureConfig};
//!
//! let sum = measure(
//!     || (0..1_000_000u64).fold(0u64, |acc, i| acc.wrapping_add(i)),
//!     &MeasureConfig::named("sum").with_warmups(2),
//! );
//! println!("{}", sum);
//! ```
//!
//! # Failures
//!
//! A measurement whose instrumentation failed is worthless, so [`measure`]
//! prints the error and aborts. [`try_measure`] returns the same failures as
//! [`MeasureError`] values instead.
//!
//! # Permissions
//!
//! `perf_event_open` for user-space-only hardware events needs
//! `kernel.perf_event_paranoid <= 2`, `CAP_PERFMON`, or root.

mod buffer;
mod config;
mod error;
mod group;
mod report;
mod stats;
mod sys;

pub use buffer::ResultBuffer;
pub use config::{CounterSet, Event, MeasureConfig};
pub use error::{fatal, MeasureError, Result};
pub use group::{CounterGroup, CounterSource};
pub use report::Report;
pub use stats::Stats;
pub use sys::CounterFd;

use std::hint::black_box;

/// The work's return value together with the report for its measured run.
#[derive(Debug)]
pub struct Measured<T> {
    pub value: T,
    pub report: Report,
}

/// Measure one invocation of `work` and print the report to stderr.
///
/// `work` runs `config.warmups` times untimed, then once with counters
/// enabled; that last return value is handed back unchanged.
///
/// Aborts the process if any counter operation fails or the group read is
/// inconsistent.
pub fn measure<T, F>(work: F, config: &MeasureConfig) -> T
where
    F: FnMut() -> T,
{
    report_or_abort(try_measure(work, config))
}

/// Emit the report and hand back the value, or abort on a failed measurement.
fn report_or_abort<T>(result: Result<Measured<T>>) -> T {
    match result {
        Ok(Measured { value, report }) => {
            if let Err(e) = report.emit() {
                tracing::warn!(error = %e, "failed to write measurement report");
            }
            value
        }
        Err(e) => fatal(&e),
    }
}

/// Like [`measure`] but returns failures and the report instead of printing.
///
/// The counter group is opened for the calling thread and closed before
/// this returns, on success and on error.
pub fn try_measure<T, F>(work: F, config: &MeasureConfig) -> Result<Measured<T>>
where
    F: FnMut() -> T,
{
    let mut group = CounterGroup::open(config.counters)?;
    measure_with(&mut group, work, config)
}

/// Run the execution protocol against an already opened counter source.
///
/// 1. `config.warmups` untimed calls, counters disabled
/// 2. enable, call `work` once, disable
/// 3. one read of the full result buffer
pub fn measure_with<S, T, F>(source: &mut S, mut work: F, config: &MeasureConfig) -> Result<Measured<T>>
where
    S: CounterSource + ?Sized,
    F: FnMut() -> T,
{
    if config.warmups > 0 {
        tracing::trace!(warmups = config.warmups, "running warm-up iterations");
        for _ in 0..config.warmups {
            black_box(work());
        }
    }

    source.enable()?;
    let value = work();
    source.disable()?;

    let buffer = source.read()?;
    let stats = Stats::from_buffer(source.counters(), &buffer);
    tracing::debug!(
        name = config.name.as_deref().unwrap_or(""),
        time_running = stats.time_running,
        instructions = stats.instructions,
        cycles = stats.cycles,
        "measurement complete"
    );

    Ok(Measured {
        value,
        report: Report::new(config.name.clone(), stats),
    })
}
