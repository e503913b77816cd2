//! Process-wide numeric locale.
//!
//! Numbers in reports follow the user's `LC_NUMERIC` (digit grouping and
//! decimal point). The locale is selected once by [`init`], which the binary
//! calls at startup; until then everything renders with the "C" locale.
//!
//! `setlocale` mutates process state, so it is never called from the
//! measurement path.

use std::borrow::Cow;
use std::ffi::CStr;
use std::sync::OnceLock;

static LOCALE: OnceLock<NumericLocale> = OnceLock::new();

static C_LOCALE: NumericLocale = NumericLocale::C;

/// Numeric punctuation taken from `localeconv(3)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericLocale {
    pub decimal_point: Cow<'static, str>,
    pub thousands_sep: Cow<'static, str>,
    /// Group sizes from the right; the last one repeats
    pub grouping: Cow<'static, [u8]>,
}

impl NumericLocale {
    /// The "C" locale: `.` decimal point, no grouping.
    pub const C: NumericLocale = NumericLocale {
        decimal_point: Cow::Borrowed("."),
        thousands_sep: Cow::Borrowed(""),
        grouping: Cow::Borrowed(&[]),
    };

    pub fn new(decimal_point: &str, thousands_sep: &str, grouping: &[u8]) -> Self {
        Self {
            decimal_point: Cow::Owned(decimal_point.to_owned()),
            thousands_sep: Cow::Owned(thousands_sep.to_owned()),
            grouping: Cow::Owned(grouping.to_vec()),
        }
    }

    /// Snapshot the current C library numeric locale.
    fn from_localeconv() -> Self {
        // SAFETY: localeconv returns a pointer to static storage that stays
        // valid until the next setlocale/localeconv call; it is copied out
        // immediately and only ever called from `init`.
        unsafe {
            let conv = libc::localeconv();
            if conv.is_null() {
                return Self::C;
            }
            let conv = &*conv;
            let text = |ptr: *mut libc::c_char| -> Option<String> {
                (!ptr.is_null()).then(|| CStr::from_ptr(ptr).to_string_lossy().into_owned())
            };

            let decimal_point = text(conv.decimal_point)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| ".".to_owned());
            let thousands_sep = text(conv.thousands_sep).unwrap_or_default();
            let grouping = if conv.grouping.is_null() {
                Vec::new()
            } else {
                CStr::from_ptr(conv.grouping).to_bytes().to_vec()
            };

            Self::new(&decimal_point, &thousands_sep, &grouping)
        }
    }

    /// Insert the thousands separator into a plain run of ASCII digits.
    pub fn group_digits(&self, digits: &str) -> String {
        if self.thousands_sep.is_empty() || self.grouping.is_empty() {
            return digits.to_owned();
        }

        // Cut positions, counted from the left, collected right to left
        let mut cuts = Vec::new();
        let mut remaining = digits.len();
        let mut sizes = self.grouping.iter().copied();
        let mut size = 0u8;
        loop {
            if let Some(next) = sizes.next() {
                size = next;
            }
            // 0 or CHAR_MAX (or a negative c_char) ends grouping
            if size == 0 || size >= i8::MAX as u8 {
                break;
            }
            let size = size as usize;
            if remaining <= size {
                break;
            }
            remaining -= size;
            cuts.push(remaining);
        }

        let mut out = String::with_capacity(digits.len() + cuts.len() * self.thousands_sep.len());
        let mut start = 0;
        for &cut in cuts.iter().rev() {
            out.push_str(&digits[start..cut]);
            out.push_str(&self.thousands_sep);
            start = cut;
        }
        out.push_str(&digits[start..]);
        out
    }

    /// Render an integer with digit grouping.
    pub fn format_count(&self, value: u64) -> String {
        self.group_digits(&value.to_string())
    }

    /// Render `value` fixed-point with `precision` fractional digits.
    ///
    /// Non-finite values come out as `inf`, `-inf` or `nan`.
    pub fn format_fixed(&self, value: f64, precision: usize) -> String {
        if value.is_nan() {
            return "nan".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
        }

        let plain = format!("{:.*}", precision, value.abs());
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain.as_str(), None),
        };

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&self.group_digits(int_part));
        if let Some(frac_part) = frac_part {
            out.push_str(&self.decimal_point);
            out.push_str(frac_part);
        }
        out
    }
}

impl Default for NumericLocale {
    fn default() -> Self {
        Self::C
    }
}

/// Adopt the environment's `LC_NUMERIC` for the rest of the process.
///
/// Only the first call touches the C library; later calls return the cached
/// locale.
pub fn init() -> &'static NumericLocale {
    LOCALE.get_or_init(|| {
        // SAFETY: called once, guarded by the OnceLock, with a valid C string.
        let selected = unsafe { libc::setlocale(libc::LC_NUMERIC, c"".as_ptr()) };
        if selected.is_null() {
            tracing::warn!("LC_NUMERIC from the environment is not available, using C");
            return NumericLocale::C;
        }
        let locale = NumericLocale::from_localeconv();
        tracing::debug!(?locale, "numeric locale initialised");
        locale
    })
}

/// The locale selected by [`init`], or "C" when `init` was never called.
pub fn current() -> &'static NumericLocale {
    LOCALE.get().unwrap_or(&C_LOCALE)
}
