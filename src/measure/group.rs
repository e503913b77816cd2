//! Counter groups and the seam the execution protocol runs against.

use super::buffer::ResultBuffer;
use super::config::CounterSet;
use super::error::Result;
use super::sys::CounterFd;

/// Something that can be switched on around the measured region and read back.
///
/// [`CounterGroup`] is the real implementation; the harness only talks to
/// this trait so the protocol can run against a fake in tests.
pub trait CounterSource {
    /// Layout of the values `read` returns.
    fn counters(&self) -> CounterSet;

    fn enable(&mut self) -> Result<()>;

    fn disable(&mut self) -> Result<()>;

    /// Read and validate the full result buffer.
    fn read(&mut self) -> Result<ResultBuffer>;
}

/// A leader counter plus the members opened against it.
///
/// Descriptors are closed when the group is dropped.
#[derive(Debug)]
pub struct CounterGroup {
    counters: CounterSet,
    // Field order is drop order: members close before the leader.
    members: Vec<CounterFd>,
    leader: CounterFd,
}

impl CounterGroup {
    /// Open every event of `counters` for the calling thread.
    ///
    /// The first event becomes the disabled group leader, the rest join it.
    pub fn open(counters: CounterSet) -> Result<Self> {
        let leader = CounterFd::open(counters.leader(), None)?;
        let members = counters
            .members()
            .iter()
            .map(|&event| CounterFd::open(event, Some(&leader)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            counters,
            members,
            leader,
        })
    }
}

impl CounterSource for CounterGroup {
    fn counters(&self) -> CounterSet {
        self.counters
    }

    fn enable(&mut self) -> Result<()> {
        self.leader.enable()
    }

    fn disable(&mut self) -> Result<()> {
        self.leader.disable()
    }

    fn read(&mut self) -> Result<ResultBuffer> {
        let counters = self.counters.len();
        let mut words = ResultBuffer::storage(counters);
        let bytes_read = self.leader.read_into(&mut words)?;
        tracing::debug!(bytes_read, counters, "read counter group");
        ResultBuffer::parse(&words, bytes_read, counters)
    }
}
