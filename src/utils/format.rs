//! Human-readable rendering of durations for reports.

use super::locale::NumericLocale;

/// Fractional digits used for every rendered time.
pub const TIME_PRECISION: usize = 3;

/// Pick the unit tier for `ns` and return `(scaled value, unit)`.
///
/// Below 1 000 ns the raw nanosecond value is kept with a `μs` label; the
/// report has always looked like this and readers compare against it.
pub fn time_unit(ns: f64) -> (f64, &'static str) {
    if ns < 1_000.0 {
        (ns, "μs")
    } else if ns < 1_000_000.0 {
        (ns / 1_000.0, "μs")
    } else if ns < 1_000_000_000.0 {
        (ns / 1_000_000.0, "ms")
    } else {
        (ns / 1_000_000_000.0, "s")
    }
}

/// Format a nanosecond count with the given locale.
pub fn format_time_with(ns: f64, locale: &NumericLocale) -> String {
    let (value, unit) = time_unit(ns);
    format!("{} {}", locale.format_fixed(value, TIME_PRECISION), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(ns: f64) -> String {
        format_time_with(ns, &NumericLocale::C)
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(fmt(999.0), "999.000 μs");
        assert_eq!(fmt(1_000.0), "1.000 μs");
        assert_eq!(fmt(999_999.0), "999.999 μs");
        assert_eq!(fmt(1_000_000.0), "1.000 ms");
        // 999.999999 ms rounds up at three digits but stays in the ms tier
        assert_eq!(fmt(999_999_999.0), "1000.000 ms");
        assert_eq!(fmt(1_000_000_000.0), "1.000 s");
    }

    #[test]
    fn test_sub_nanosecond_averages() {
        assert_eq!(fmt(0.25), "0.250 μs");
        assert_eq!(fmt(0.0), "0.000 μs");
    }

    #[test]
    fn test_large_values_stay_in_seconds() {
        assert_eq!(fmt(90_500_000_000.0), "90.500 s");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::INFINITY), "inf s");
        assert_eq!(fmt(f64::NAN), "nan s");
    }

    #[test]
    fn test_locale_applies() {
        let de = NumericLocale::new(",", ".", &[3]);
        assert_eq!(format_time_with(1_234_567_890_000.0, &de), "1.234,568 s");
        assert_eq!(format_time_with(1_500.0, &de), "1,500 μs");
    }
}
