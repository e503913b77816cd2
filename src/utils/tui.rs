//! Text User Interface (TUI) utilities.
//!
//! Everything here goes to stdout. Measurement reports go to stderr, so the
//! two streams can be separated.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::runner::VariantOutcome;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Variant name with the C compiler appended for C variants.
pub fn display_name(name: &str) -> String {
    if name.starts_with("c-") {
        match crate::utils::C_COMPILER_NAME {
            Some(c) => format!("{} ({})", name, c),
            None => name.to_string(),
        }
    } else {
        name.to_string()
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " LCG Hardware Counter Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", algo.available_variants().join(", "));

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |text: &str| {
        println!(
            "│ {:<width$} │",
            truncate(text, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    row(&name_line);
    row(&cat_line);
    row(desc_line);
    println!("├{}┤", border);
    row(&var_line);
    println!("└{}┘", border);
    println!();
}

/// For each outcome, the reference variant it should reproduce but does not.
///
/// Variants without a reference, or whose reference was not run, are never
/// flagged.
pub fn mismatches(algo: &dyn AlgorithmRunner, outcomes: &[VariantOutcome]) -> Vec<Option<&'static str>> {
    outcomes
        .iter()
        .map(|outcome| {
            let reference = algo.reference_of(outcome.name)?;
            let expected = outcomes.iter().find(|o| o.name == reference)?;
            (expected.value != outcome.value).then_some(reference)
        })
        .collect()
}

/// Print the values each variant returned, flagging any that disagree with
/// their reference variant.
pub fn print_outcomes(algo: &dyn AlgorithmRunner, outcomes: &[VariantOutcome]) {
    if outcomes.is_empty() {
        return;
    }

    let name_width = outcomes
        .iter()
        .map(|o| display_name(o.name).chars().count())
        .max()
        .unwrap_or(0)
        .max("Variant".len());

    println!("  {:<width$}  {:>20}", "Variant", "Result", width = name_width);
    println!("  {}", "─".repeat(name_width + 22));
    for (outcome, mismatch) in outcomes.iter().zip(mismatches(algo, outcomes)) {
        let marker = match mismatch {
            Some(reference) => format!("  (differs from {})", reference),
            None => String::new(),
        };
        println!(
            "  {:<width$}  {:>20}{}",
            display_name(outcome.name),
            outcome.value,
            marker,
            width = name_width
        );
    }
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        for variant in algo.variants() {
            println!("      {:<22} {}", display_name(variant.name), variant.description);
        }
    }
}
