//! Presentation rounding.
//!
//! These helpers shape numbers for display only; nothing upstream is
//! recomputed from their output.

/// Round to two decimal places, half away from zero. Non-finite input yields `0.0`.
#[inline]
pub fn round_2dp(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    (x * 100.0).round() / 100.0
}

/// Clamp a score into the percent range `[0, 100]`. Non-finite input yields `0.0`.
#[inline]
pub fn clamp_percent(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    x.clamp(0.0, 100.0)
}

/// Keep at most `max` characters (Unicode scalar values) of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
