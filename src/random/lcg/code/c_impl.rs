//! FFI bindings for the C implementation of the wrapping LCG.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn lcg_wrapping_c(iterations: u32) -> u64;
    }
}

/// C implementation wrapper
#[cfg(c_implementation_active)]
pub fn lcg_c_wrapper(iterations: u32) -> u64 {
    unsafe { ffi::lcg_wrapping_c(iterations) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn lcg_c_wrapper(_iterations: u32) -> u64 {
    panic!("C implementation not compiled (requires GCC/Clang)")
}
