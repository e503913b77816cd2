//! Caller-facing configuration for a single measurement.

use perf_event_open_sys::bindings;

/// A hardware event that can be placed in the counter group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Retired instructions
    Instructions,
    /// CPU cycles
    Cycles,
}

impl Event {
    /// `perf_event_attr.config` value for this event under `PERF_TYPE_HARDWARE`.
    pub fn hw_id(self) -> u64 {
        match self {
            Event::Instructions => bindings::PERF_COUNT_HW_INSTRUCTIONS as u64,
            Event::Cycles => bindings::PERF_COUNT_HW_CPU_CYCLES as u64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Event::Instructions => "instructions",
            Event::Cycles => "cycles",
        }
    }
}

/// Which counters the group is made of.
///
/// The first event is the group leader; the result buffer lists values in
/// this order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterSet {
    /// Instructions (leader) then cycles
    #[default]
    InstructionsAndCycles,
    /// Instructions only
    Instructions,
}

impl CounterSet {
    pub fn events(self) -> &'static [Event] {
        match self {
            CounterSet::InstructionsAndCycles => &[Event::Instructions, Event::Cycles],
            CounterSet::Instructions => &[Event::Instructions],
        }
    }

    /// Event opened as the group leader.
    pub fn leader(self) -> Event {
        match self {
            CounterSet::InstructionsAndCycles | CounterSet::Instructions => Event::Instructions,
        }
    }

    /// Events opened against the leader.
    pub fn members(self) -> &'static [Event] {
        match self {
            CounterSet::InstructionsAndCycles => &[Event::Cycles],
            CounterSet::Instructions => &[],
        }
    }

    /// Number of values the leader reports in a group read.
    pub fn len(self) -> usize {
        self.events().len()
    }

    pub fn is_empty(self) -> bool {
        self.events().is_empty()
    }

    /// Position of `event` in the result buffer, if it is part of the group.
    pub fn position(self, event: Event) -> Option<usize> {
        self.events().iter().position(|&e| e == event)
    }
}

/// Configuration for one [`measure`](super::measure) call.
///
/// # Example
///
/// ```
/// use perf_measure::measure::{CounterSet, MeasureConfig};
///
/// let config = MeasureConfig::named("32-bit integers, overflow").with_warmups(3);
/// assert_eq!(config.warmups, 3);
/// assert_eq!(config.counters, CounterSet::InstructionsAndCycles);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasureConfig {
    /// Label printed at the top of the report
    pub name: Option<String>,
    /// Untimed executions of the work before the measured one (default: 0)
    pub warmups: u64,
    /// Counter layout (default: instructions and cycles)
    pub counters: CounterSet,
}

impl MeasureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_warmups(mut self, warmups: u64) -> Self {
        self.warmups = warmups;
        self
    }

    pub fn with_counters(mut self, counters: CounterSet) -> Self {
        self.counters = counters;
        self
    }
}
