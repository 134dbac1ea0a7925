//! Deterministic numeric helpers shared by the stats engines.

#![forbid(unsafe_code)]

/// Divide `numer` by `denom`, substituting `default` when the denominator
/// is zero.
///
/// Every metric in the diversity and basic engines that can hit a zero
/// denominator (empty window, singleton vocabulary, `log10(1)` and
/// friends) routes its division through here instead of producing
/// infinities or NaN.
#[must_use]
pub fn safe_divide(numer: f64, denom: f64, default: f64) -> f64 {
    if denom == 0.0 { default } else { numer / denom }
}

/// Binomial coefficient C(n, k) as a float, `0.0` when `k > n`.
///
/// Computed multiplicatively so intermediate products stay bounded; the
/// result is approximate for large arguments, which is all the
/// hypergeometric estimator needs (its reference implementation also
/// works in floating point).
#[must_use]
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 0..k {
        result *= (n - i) as f64 / (i + 1) as f64;
    }
    result
}
