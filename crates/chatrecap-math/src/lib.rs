//! Deterministic numeric helpers shared by the analysis passes.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// The stored binary value is rounded, not a scaled copy of it, so `4.35`
/// (stored just below the half) rounds to `4.3`. Exact halves go to the
/// even neighbour, so `0.125` rounds to `0.12`.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let prec = decimals as usize;
    format!("{value:.prec$}").parse().unwrap_or(value)
}

/// Return `numer / denom` rounded to `decimals`, or `0.0` when `denom` is zero.
#[must_use]
pub fn safe_ratio(numer: usize, denom: usize, decimals: u32) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64, decimals)
    }
}

/// Return `numer / denom * 100` rounded to `decimals`, or `0.0` when `denom` is zero.
#[must_use]
pub fn percentage(numer: usize, denom: usize, decimals: u32) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64 * 100.0, decimals)
    }
}

/// Arithmetic mean rounded to `decimals`; an empty slice yields `0.0`.
#[must_use]
pub fn mean(values: &[usize], decimals: u32) -> f64 {
    let sum: usize = values.iter().sum();
    safe_ratio(sum, values.len(), decimals)
}
