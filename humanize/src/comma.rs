//! Integer grouping.

/// Separator inserted between groups of three digits.
pub(crate) const SEPARATOR: char = ',';

/// `i64::MIN` has no positive counterpart in `i64`, so its rendering is fixed.
const MIN_I64_GROUPED: &str = "-9,223,372,036,854,775,808";

/// Render `v` in base 10 with a comma every three digits.
///
/// ```
/// assert_eq!(humanize::comma(834142), "834,142");
/// assert_eq!(humanize::comma(-834142), "-834,142");
/// assert_eq!(humanize::comma(999), "999");
/// ```
pub fn comma(v: i64) -> String {
    if v == i64::MIN {
        return MIN_I64_GROUPED.to_string();
    }

    let grouped = group_digits(&v.abs().to_string());
    if v < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Unsigned variant of [`comma`] for counters that may exceed `i64::MAX`.
pub fn comma_u64(v: u64) -> String {
    group_digits(&v.to_string())
}

/// Insert [`SEPARATOR`] into a run of ASCII digits, counting from the right.
///
/// The input must not carry a sign or a fractional part.
pub(crate) fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(ch);
    }
    out
}
