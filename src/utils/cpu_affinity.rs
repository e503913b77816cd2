//! Thread pinning for benchmark runs.
//!
//! Counters are opened for the calling thread on whichever CPU it runs on.
//! Pinning the thread to its current core for the duration of a run keeps the
//! scheduler from migrating it between the warm-ups and the measured call.
//!
//! Implemented directly on `sched_getaffinity`/`sched_setaffinity` from libc.

use std::mem;

/// The CPU the calling thread is running on right now.
pub fn current_cpu() -> Option<usize> {
    let cpu = unsafe { libc::sched_getcpu() };
    (cpu >= 0).then_some(cpu as usize)
}

fn get_affinity() -> Option<libc::cpu_set_t> {
    unsafe {
        let mut set: libc::cpu_set_t = mem::zeroed();
        (libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
            .then_some(set)
    }
}

fn set_affinity(set: &libc::cpu_set_t) -> bool {
    unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), set) == 0 }
}

fn single_core_set(core_id: usize) -> libc::cpu_set_t {
    unsafe {
        let mut set: libc::cpu_set_t = mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(core_id, &mut set);
        set
    }
}

/// RAII guard that pins the calling thread and restores its affinity on drop.
///
/// Pinning is best effort: when it fails the guard is inert and
/// [`is_pinned`](Self::is_pinned) reports `false`.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // pinned to the current core
///     // ... measure ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    original: Option<libc::cpu_set_t>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on.
    pub fn new() -> Self {
        match current_cpu() {
            Some(core_id) => Self::with_core(core_id),
            None => Self {
                pinned_core: None,
                original: None,
            },
        }
    }

    /// Pin to a specific core.
    pub fn with_core(core_id: usize) -> Self {
        let original = get_affinity();
        let pinned = original.is_some() && set_affinity(&single_core_set(core_id));
        if pinned {
            tracing::debug!(core_id, "pinned thread");
        } else {
            tracing::warn!(core_id, "could not pin thread, continuing unpinned");
        }
        Self {
            pinned_core: pinned.then_some(core_id),
            original: if pinned { original } else { None },
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            if !set_affinity(&original) {
                tracing::warn!("failed to restore thread affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard_restores_affinity() {
        let before = get_affinity().map(|set| unsafe { libc::CPU_COUNT(&set) });

        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert_eq!(current_cpu(), guard.core_id());
            let during = get_affinity().map(|set| unsafe { libc::CPU_COUNT(&set) });
            assert_eq!(during, Some(1));
        }
        drop(guard);

        let after = get_affinity().map(|set| unsafe { libc::CPU_COUNT(&set) });
        assert_eq!(before, after);
    }
}
