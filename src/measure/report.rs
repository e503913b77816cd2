//! The bordered text block written to stderr after each measurement.

use std::fmt;
use std::io::{self, Write};

use super::stats::Stats;
use crate::utils::format::format_time_with;
use crate::utils::locale::{self, NumericLocale};

const HEADER: &str = "=========== MEASURE REPORT ===========";
const FOOTER: &str = "======================================";

/// Digits after the decimal point for the instructions-per-cycle ratio.
const IPC_PRECISION: usize = 3;

/// One measurement's report: the optional label and the derived statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub name: Option<String>,
    pub stats: Stats,
}

impl Report {
    pub fn new(name: Option<String>, stats: Stats) -> Self {
        Self { name, stats }
    }

    /// Render the report, numbers formatted with `locale`.
    ///
    /// Instruction and cycle counts are the raw counter values, printed with
    /// the locale's digit grouping. Under the "C" locale that is the plain
    /// integer.
    pub fn render(&self, locale: &NumericLocale) -> String {
        let stats = &self.stats;
        let mut lines = vec![HEADER.to_owned()];

        if let Some(name) = &self.name {
            lines.push(format!("Name: {}", name));
        }
        lines.push(format!(
            "Time running: {}",
            format_time_with(stats.time_running as f64, locale)
        ));
        if let Some(instrs) = stats.instructions {
            lines.push(format!("CPU instructions: {}", locale.format_count(instrs)));
        }
        if let Some(cycles) = stats.cycles {
            lines.push(format!("CPU cycles: {}", locale.format_count(cycles)));
        }
        if let Some(avg) = stats.avg_instruction_time() {
            lines.push(format!("Avg instruction time: {}", format_time_with(avg, locale)));
        }
        if let Some(avg) = stats.avg_cycle_time() {
            lines.push(format!("Avg cycle time: {}", format_time_with(avg, locale)));
        }
        if let Some(ipc) = stats.instructions_per_cycle() {
            lines.push(format!(
                "Avg instructions per cycle: {}",
                locale.format_fixed(ipc, IPC_PRECISION)
            ));
        }
        lines.push(FOOTER.to_owned());

        let mut out = lines.join("\n");
        out.push_str("\n\n");
        out
    }

    /// Write the report to stderr in one piece, using the process locale.
    pub fn emit(&self) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{}", self)?;
        stderr.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(locale::current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(instructions: Option<u64>, cycles: Option<u64>) -> Stats {
        Stats {
            time_running: 2_500_000,
            instructions,
            cycles,
        }
    }

    #[test]
    fn test_dual_report_layout() {
        let report = Report::new(
            Some("64-bit integers, if".to_owned()),
            stats(Some(5_000_000), Some(2_000_000)),
        );
        let text = report.render(&NumericLocale::C);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                HEADER,
                "Name: 64-bit integers, if",
                "Time running: 2.500 ms",
                "CPU instructions: 5000000",
                "CPU cycles: 2000000",
                "Avg instruction time: 0.500 μs",
                "Avg cycle time: 1.250 μs",
                "Avg instructions per cycle: 2.500",
                FOOTER,
                "",
            ]
        );
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_unnamed_single_counter_report() {
        let report = Report::new(None, stats(Some(1_000_000), None));
        let text = report.render(&NumericLocale::C);

        assert!(!text.contains("Name:"));
        assert!(text.contains("CPU instructions: 1000000"));
        assert!(!text.contains("CPU cycles"));
        assert!(!text.contains("Avg cycle time"));
        assert!(!text.contains("per cycle"));
    }

    #[test]
    fn test_report_uses_locale_grouping() {
        let report = Report::new(None, stats(Some(5_000_000), Some(2_000_000)));
        let text = report.render(&NumericLocale::new(".", ",", &[3]));
        assert!(text.contains("CPU instructions: 5,000,000"));
        assert!(text.contains("CPU cycles: 2,000,000"));
    }

    #[test]
    fn test_ipc_matches_ratio_to_three_digits() {
        let report = Report::new(None, stats(Some(7_000_001), Some(3_000_000)));
        let text = report.render(&NumericLocale::C);
        let expected = format!("{:.3}", 7_000_001f64 / 3_000_000f64);
        assert!(text.contains(&format!("Avg instructions per cycle: {}", expected)));
    }

    #[test]
    fn test_zero_cycles_reported_as_is() {
        let report = Report::new(None, stats(Some(0), Some(0)));
        let text = report.render(&NumericLocale::C);
        assert!(text.contains("Avg instruction time: inf s"));
        assert!(text.contains("Avg instructions per cycle: nan"));
    }

    #[test]
    fn test_display_matches_process_locale_render() {
        let report = Report::new(Some("lcg".to_owned()), stats(Some(1_234_567), Some(654_321)));
        assert_eq!(report.to_string(), report.render(locale::current()));
    }
}
