//! Float grouping with optional fraction truncation.

use crate::comma::group_digits;

/// Render `v` with a comma every three digits in its integer part.
///
/// The fraction keeps the shortest representation that round-trips to `v`.
/// When `decimals` is `Some(n)` the fraction is cut to at most `n` digits
/// without rounding; `Some(0)` drops the decimal point as well. A fraction
/// shorter than `n` is left as is.
///
/// ```
/// assert_eq!(humanize::commaf(834142.32, None), "834,142.32");
/// assert_eq!(humanize::commaf(834142.325, Some(2)), "834,142.32");
/// assert_eq!(humanize::commaf(834142.32, Some(0)), "834,142");
/// ```
pub fn commaf(v: f64, decimals: Option<usize>) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-Inf" } else { "Inf" }.to_string();
    }

    // Display for f64 never switches to exponent notation.
    let magnitude = v.abs().to_string();
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (magnitude.as_str(), None),
    };

    let mut out = String::with_capacity(magnitude.len() + magnitude.len() / 3 + 1);
    if v < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));

    if let Some(frac) = frac_part {
        let frac = match decimals {
            Some(limit) => &frac[..frac.len().min(limit)],
            None => frac,
        };
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
    }
    out
}
