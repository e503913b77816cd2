//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every benchmark registers an [`AlgorithmRunner`] here so the CLI can list,
//! verify and measure it without knowing about it at compile time.

use crate::utils::VariantInfo;

/// Signature shared by every benchmark variant: loop count in, checksum out.
pub type BenchFn = fn(u32) -> u64;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "lcg_mod")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "random")
    fn category(&self) -> &'static str;

    /// Variants ready to be measured, reference implementation first.
    fn variants(&self) -> Vec<VariantInfo<BenchFn>>;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str> {
        self.variants().iter().map(|v| v.name).collect()
    }

    /// Variant whose result `variant` must reproduce, if any.
    ///
    /// By default a `c-X` variant must match its Rust variant `X`.
    fn reference_of(&self, variant: &str) -> Option<&'static str> {
        rust_counterpart(&self.available_variants(), variant)
    }

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// The Rust variant `X` among `names` for a C variant `c-X`.
pub fn rust_counterpart(names: &[&'static str], variant: &str) -> Option<&'static str> {
    let base = variant.strip_prefix("c-")?;
    names.iter().copied().find(|&name| name == base)
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::random::lcg::LcgRunner);
    registry.register(crate::random::lcg_mod::LcgModRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["lcg", "lcg_mod"]);
        assert!(registry.find("lcg_mod").is_some());
        assert!(registry.find("no_such_algo").is_none());
        assert_eq!(registry.by_category("random").len(), 2);
    }

    #[test]
    fn test_reference_of_c_variants() {
        let registry = build_registry();
        let lcg = registry.find("lcg").unwrap();
        assert_eq!(lcg.reference_of("original"), None);
        assert_eq!(lcg.reference_of("c-unknown"), None);
        if lcg.available_variants().contains(&"c-original") {
            assert_eq!(lcg.reference_of("c-original"), Some("original"));
        }
    }

    #[test]
    fn test_reference_variant_comes_first() {
        for algo in build_registry().all() {
            let names = algo.available_variants();
            assert!(!names.is_empty(), "{} has no variants", algo.name());
            assert!(
                !names[0].starts_with("c-"),
                "{} should list a Rust variant first",
                algo.name()
            );
        }
    }
}
