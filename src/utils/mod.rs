//! Utility modules for formatting, pinning and running benchmarks.

pub mod cpu_affinity;
pub mod format;
pub mod locale;
pub mod runner;
pub mod tui;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use format::format_time_with;
pub use locale::NumericLocale;
pub use runner::{run_algorithm, RunOptions, VariantOutcome};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "c-original")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
