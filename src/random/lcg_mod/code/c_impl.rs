//! FFI bindings for the C implementations of the modular LCG loops.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn lcg_u32_overflow_c(iterations: u32) -> u32;
        pub fn lcg_u64_overflow_c(iterations: u32) -> u64;
        pub fn lcg_u32_division_c(iterations: u32) -> u32;
        pub fn lcg_u64_division_c(iterations: u32) -> u64;
        pub fn lcg_u32_if_c(iterations: u32) -> u32;
        pub fn lcg_u64_if_c(iterations: u32) -> u64;
    }
}

#[cfg(c_implementation_active)]
pub fn u32_overflow_c(iterations: u32) -> u32 {
    unsafe { ffi::lcg_u32_overflow_c(iterations) }
}

#[cfg(c_implementation_active)]
pub fn u64_overflow_c(iterations: u32) -> u64 {
    unsafe { ffi::lcg_u64_overflow_c(iterations) }
}

#[cfg(c_implementation_active)]
pub fn u32_division_c(iterations: u32) -> u32 {
    unsafe { ffi::lcg_u32_division_c(iterations) }
}

#[cfg(c_implementation_active)]
pub fn u64_division_c(iterations: u32) -> u64 {
    unsafe { ffi::lcg_u64_division_c(iterations) }
}

#[cfg(c_implementation_active)]
pub fn u32_if_c(iterations: u32) -> u32 {
    unsafe { ffi::lcg_u32_if_c(iterations) }
}

#[cfg(c_implementation_active)]
pub fn u64_if_c(iterations: u32) -> u64 {
    unsafe { ffi::lcg_u64_if_c(iterations) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stubs for missing C compiler
#[cfg(not(c_implementation_active))]
mod stubs {
    fn missing() -> ! {
        panic!("C implementation not compiled (requires GCC/Clang)")
    }

    pub fn u32_overflow_c(_iterations: u32) -> u32 {
        missing()
    }

    pub fn u64_overflow_c(_iterations: u32) -> u64 {
        missing()
    }

    pub fn u32_division_c(_iterations: u32) -> u32 {
        missing()
    }

    pub fn u64_division_c(_iterations: u32) -> u64 {
        missing()
    }

    pub fn u32_if_c(_iterations: u32) -> u32 {
        missing()
    }

    pub fn u64_if_c(_iterations: u32) -> u64 {
        missing()
    }
}

#[cfg(not(c_implementation_active))]
pub use stubs::*;
