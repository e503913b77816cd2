//! Statistics derived from a single group read.

use super::buffer::ResultBuffer;
use super::config::{CounterSet, Event};

/// Raw counters from one measurement plus the ratios computed from them.
///
/// Ratios are plain `f64` divisions. A zero counter yields `inf` or `NaN`,
/// which is reported as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    /// Nanoseconds the group was running
    pub time_running: u64,
    /// Retired instructions, when counted
    pub instructions: Option<u64>,
    /// CPU cycles, when counted
    pub cycles: Option<u64>,
}

impl Stats {
    pub fn from_buffer(counters: CounterSet, buffer: &ResultBuffer) -> Self {
        let value = |event| {
            counters
                .position(event)
                .and_then(|idx| buffer.values.get(idx).copied())
        };

        Self {
            time_running: buffer.time_running,
            instructions: value(Event::Instructions),
            cycles: value(Event::Cycles),
        }
    }

    /// Average nanoseconds per retired instruction.
    pub fn avg_instruction_time(&self) -> Option<f64> {
        self.instructions
            .map(|instrs| self.time_running as f64 / instrs as f64)
    }

    /// Average nanoseconds per cycle.
    pub fn avg_cycle_time(&self) -> Option<f64> {
        self.cycles
            .map(|cycles| self.time_running as f64 / cycles as f64)
    }

    /// Instructions per cycle; only available when both counters ran.
    pub fn instructions_per_cycle(&self) -> Option<f64> {
        match (self.instructions, self.cycles) {
            (Some(instrs), Some(cycles)) => Some(instrs as f64 / cycles as f64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual(time_running: u64, instrs: u64, cycles: u64) -> Stats {
        let buffer = ResultBuffer {
            time_running,
            values: vec![instrs, cycles],
        };
        Stats::from_buffer(CounterSet::InstructionsAndCycles, &buffer)
    }

    #[test]
    fn test_dual_ratios() {
        let stats = dual(1_000_000, 4_000_000, 2_000_000);
        assert_eq!(stats.instructions, Some(4_000_000));
        assert_eq!(stats.cycles, Some(2_000_000));
        assert_eq!(stats.avg_instruction_time(), Some(0.25));
        assert_eq!(stats.avg_cycle_time(), Some(0.5));
        assert_eq!(stats.instructions_per_cycle(), Some(2.0));
    }

    #[test]
    fn test_single_counter_has_no_cycle_stats() {
        let buffer = ResultBuffer {
            time_running: 500,
            values: vec![1_000],
        };
        let stats = Stats::from_buffer(CounterSet::Instructions, &buffer);
        assert_eq!(stats.instructions, Some(1_000));
        assert_eq!(stats.cycles, None);
        assert_eq!(stats.avg_instruction_time(), Some(0.5));
        assert_eq!(stats.avg_cycle_time(), None);
        assert_eq!(stats.instructions_per_cycle(), None);
    }

    #[test]
    fn test_zero_counters_are_not_guarded() {
        let stats = dual(1_000, 0, 0);
        assert_eq!(stats.avg_instruction_time(), Some(f64::INFINITY));
        assert!(stats.instructions_per_cycle().unwrap().is_nan());
    }
}
