//! Group-format read buffer.
//!
//! With `PERF_FORMAT_GROUP | PERF_FORMAT_TOTAL_TIME_RUNNING` the leader returns
//! `{ nr, time_running, value[0], ..., value[nr - 1] }` as native u64 words,
//! values in the order the counters were opened.

use std::mem;

use super::error::{MeasureError, Result};

/// Words preceding the counter values: `nr` and `time_running`.
const HEADER_WORDS: usize = 2;

/// Decoded result of one group read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBuffer {
    /// Nanoseconds the group was actually on the PMU
    pub time_running: u64,
    /// One value per counter, leader first
    pub values: Vec<u64>,
}

impl ResultBuffer {
    /// Number of u64 words a read of `counters` values occupies.
    pub const fn word_len(counters: usize) -> usize {
        HEADER_WORDS + counters
    }

    /// Exact byte size of a read of `counters` values.
    pub const fn byte_len(counters: usize) -> usize {
        Self::word_len(counters) * mem::size_of::<u64>()
    }

    /// Zeroed storage sized for a read of `counters` values.
    pub fn storage(counters: usize) -> Vec<u64> {
        vec![0; Self::word_len(counters)]
    }

    /// Validate and decode raw words read from the group leader.
    ///
    /// `bytes_read` must equal the full buffer size and the `nr` field must
    /// equal `counters`.
    pub fn parse(words: &[u64], bytes_read: usize, counters: usize) -> Result<Self> {
        let expected = Self::byte_len(counters);
        if bytes_read != expected || words.len() != Self::word_len(counters) {
            return Err(MeasureError::ShortRead {
                expected,
                actual: bytes_read,
            });
        }

        let nr = words[0];
        if nr != counters as u64 {
            return Err(MeasureError::CountMismatch {
                expected: counters as u64,
                actual: nr,
            });
        }

        Ok(Self {
            time_running: words[1],
            values: words[HEADER_WORDS..].to_vec(),
        })
    }
}
