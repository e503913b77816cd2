//! Thin layer over the host counter facility.
//!
//! Every call here maps one-to-one onto a syscall: `perf_event_open(2)`,
//! `ioctl(2)` with `PERF_EVENT_IOC_ENABLE`/`PERF_EVENT_IOC_DISABLE`, `read(2)`
//! and `close(2)`. A `-1` return becomes [`MeasureError::Host`](super::MeasureError::Host).

use std::mem;
use std::os::fd::{AsRawFd, RawFd};

use libc::c_void;
use perf_event_open_sys::bindings::{self, perf_event_attr};
use perf_event_open_sys::{ioctls, perf_event_open};

use super::config::Event;
use super::error::{check_syscall, fatal, MeasureError, Result};

/// One open hardware counter.
///
/// Owns the descriptor and closes it on drop. Not `Clone`: a copy would close
/// the same descriptor twice. Moving the value moves ownership.
#[derive(Debug)]
pub struct CounterFd {
    fd: RawFd,
}

impl CounterFd {
    /// Open `event` for the calling thread on any CPU.
    ///
    /// `group` is `None` for a group leader. The leader is created disabled and
    /// reports group-format reads with total running time; members inherit
    /// enable/disable from it.
    pub fn open(event: Event, group: Option<&CounterFd>) -> Result<Self> {
        let mut attr = event_attr(event, group.is_none());
        let group_fd = group.map_or(-1, |leader| leader.fd);

        // pid = 0: calling thread, cpu = -1: whichever CPU it runs on
        let fd = unsafe { perf_event_open(&mut attr, 0, -1, group_fd, 0) };
        if fd < 0 {
            return Err(MeasureError::last_os_error("perf_event_open"));
        }

        tracing::debug!(event = event.name(), fd, group_fd, "opened performance counter");
        Ok(Self { fd })
    }

    pub fn enable(&self) -> Result<()> {
        check_syscall("ioctl", unsafe { ioctls::ENABLE(self.fd, 0) })?;
        Ok(())
    }

    pub fn disable(&self) -> Result<()> {
        check_syscall("ioctl", unsafe { ioctls::DISABLE(self.fd, 0) })?;
        Ok(())
    }

    /// Fill `buf` with one `read(2)` and return the number of bytes read.
    pub fn read_into(&self, buf: &mut [u64]) -> Result<usize> {
        let len = mem::size_of_val(buf);
        let read = unsafe { libc::read(self.fd, buf.as_mut_ptr() as *mut c_void, len) };
        let read = check_syscall("read", read)?;
        Ok(read as usize)
    }

    /// Give up ownership without closing the descriptor.
    pub fn into_raw_fd(self) -> RawFd {
        let fd = self.fd;
        mem::forget(self);
        fd
    }

    fn close(&mut self) -> Result<()> {
        check_syscall("close", unsafe { libc::close(self.fd) })?;
        tracing::trace!(fd = self.fd, "closed performance counter");
        Ok(())
    }
}

impl AsRawFd for CounterFd {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for CounterFd {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            fatal(&e);
        }
    }
}

/// Build the `perf_event_attr` for `event`.
///
/// Kernel and hypervisor activity is always excluded. Only the leader carries
/// `disabled` and the group read format.
pub(crate) fn event_attr(event: Event, leader: bool) -> perf_event_attr {
    let mut attr = perf_event_attr {
        type_: bindings::PERF_TYPE_HARDWARE,
        size: mem::size_of::<perf_event_attr>() as u32,
        config: event.hw_id(),
        ..perf_event_attr::default()
    };
    if leader {
        attr.read_format =
            (bindings::PERF_FORMAT_TOTAL_TIME_RUNNING | bindings::PERF_FORMAT_GROUP) as u64;
        attr.set_disabled(1);
    }
    attr.set_exclude_kernel(1);
    attr.set_exclude_hv(1);
    attr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_attr() {
        let attr = event_attr(Event::Instructions, true);
        assert_eq!(attr.type_, bindings::PERF_TYPE_HARDWARE);
        assert_eq!(attr.size as usize, mem::size_of::<perf_event_attr>());
        assert_eq!(attr.config, bindings::PERF_COUNT_HW_INSTRUCTIONS as u64);
        assert_eq!(
            attr.read_format,
            (bindings::PERF_FORMAT_TOTAL_TIME_RUNNING | bindings::PERF_FORMAT_GROUP) as u64
        );
        assert_eq!(attr.disabled(), 1);
        assert_eq!(attr.exclude_kernel(), 1);
        assert_eq!(attr.exclude_hv(), 1);
    }

    #[test]
    fn test_member_attr() {
        let attr = event_attr(Event::Cycles, false);
        assert_eq!(attr.config, bindings::PERF_COUNT_HW_CPU_CYCLES as u64);
        assert_eq!(attr.read_format, 0);
        assert_eq!(attr.disabled(), 0);
        assert_eq!(attr.exclude_kernel(), 1);
        assert_eq!(attr.exclude_hv(), 1);
    }

    fn is_open(fd: RawFd) -> bool {
        unsafe { libc::fcntl(fd, libc::F_GETFD) != -1 }
    }

    #[test]
    fn test_drop_closes_descriptor() {
        let mut fds = [0; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);

        // Dup onto a high slot so a parallel test cannot reuse the number.
        let fd = unsafe { libc::fcntl(fds[0], libc::F_DUPFD_CLOEXEC, 256) };
        assert!(fd >= 256);
        assert_eq!(unsafe { libc::close(fds[0]) }, 0);

        let owned = CounterFd { fd };
        assert!(is_open(fd));
        drop(owned);
        assert!(!is_open(fd));

        assert_eq!(unsafe { libc::close(fds[1]) }, 0);
    }

    #[test]
    fn test_into_raw_fd_skips_close() {
        // A pipe end stands in for a counter descriptor.
        let mut fds = [0; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);

        let owned = CounterFd { fd: fds[0] };
        let raw = owned.into_raw_fd();
        assert_eq!(raw, fds[0]);

        // Still open, so closing here succeeds exactly once.
        assert_eq!(unsafe { libc::close(raw) }, 0);
        assert_eq!(unsafe { libc::close(fds[1]) }, 0);
    }
}
