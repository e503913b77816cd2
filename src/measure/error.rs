//! Error kinds raised by the measurement harness.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while driving the counters.
///
/// [`measure`](super::measure) treats every variant as fatal. The kinds stay
/// distinguishable for [`try_measure`](super::try_measure) callers and tests.
#[derive(Error, Debug)]
pub enum MeasureError {
    /// A `perf_event_open`, `ioctl`, `read` or `close` call reported failure.
    #[error("{op}(2) failed: {source}")]
    Host {
        op: &'static str,
        #[source]
        source: io::Error,
    },
    /// The leader returned a different number of bytes than the result buffer holds.
    #[error("read {actual} bytes from the counter group, expected {expected}")]
    ShortRead { expected: usize, actual: usize },
    /// The count field of the result buffer disagrees with the counters opened.
    #[error("counter group reported {actual} values, expected {expected}")]
    CountMismatch { expected: u64, actual: u64 },
}

impl MeasureError {
    /// Capture `errno` for the host call named `op`.
    pub fn last_os_error(op: &'static str) -> Self {
        MeasureError::Host {
            op,
            source: io::Error::last_os_error(),
        }
    }

    /// True for host-facility failures, false for consistency violations.
    pub fn is_host_failure(&self) -> bool {
        matches!(self, MeasureError::Host { .. })
    }
}

pub type Result<T> = std::result::Result<T, MeasureError>;

/// Print the error to stderr and abort the process.
///
/// A broken measurement must never be reported as a valid one, so there is no
/// unwinding and no partial report.
pub fn fatal(err: &MeasureError) -> ! {
    tracing::debug!(error = %err, "measurement failed, aborting");
    eprintln!("{}", err);
    std::process::abort()
}

/// Check a raw syscall return value, mapping `-1` to [`MeasureError::Host`].
pub(crate) fn check_syscall<T>(op: &'static str, result: T) -> Result<T>
where
    T: PartialEq + From<i8>,
{
    if result == T::from(-1) {
        Err(MeasureError::last_os_error(op))
    } else {
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_display() {
        let err = MeasureError::Host {
            op: "perf_event_open",
            source: io::Error::from_raw_os_error(libc::EACCES),
        };
        let text = err.to_string();
        assert!(text.starts_with("perf_event_open(2) failed: "), "{}", text);
        assert!(err.is_host_failure());
    }

    #[test]
    fn test_consistency_errors_are_not_host_failures() {
        let short = MeasureError::ShortRead {
            expected: 32,
            actual: 24,
        };
        let count = MeasureError::CountMismatch {
            expected: 2,
            actual: 1,
        };
        assert!(!short.is_host_failure());
        assert!(!count.is_host_failure());
        assert_eq!(
            count.to_string(),
            "counter group reported 1 values, expected 2"
        );
    }

    #[test]
    fn test_check_syscall() {
        assert_eq!(check_syscall("read", 16isize).unwrap(), 16);
        assert_eq!(check_syscall("ioctl", 0i32).unwrap(), 0);
        let err = check_syscall("close", -1i32).unwrap_err();
        assert!(matches!(err, MeasureError::Host { op: "close", .. }));
    }
}
