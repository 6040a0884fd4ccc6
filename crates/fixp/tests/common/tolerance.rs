//! Tolerance helpers.
//!
//! Fixed-point results are compared in raw units (ULPs) against either an
//! exact raw value or a real reference converted with the format's scale.

use fixp_core::{QFormat, Storage};

/// Absolute difference of two raw values, in ULPs.
pub fn ulps<S: Storage>(a: S, b: S) -> i128 {
    (a.to_wide() - b.to_wide()).abs()
}

/// Asserts `actual` is within `tolerance` (a real number) of `expected`.
#[track_caller]
pub fn assert_close<S: Storage>(q: &QFormat<S>, actual: S, expected: f64, tolerance: f64) {
    let value = q.to_real(actual);
    assert!(
        (value - expected).abs() <= tolerance,
        "{} (raw {actual}) is not within {tolerance} of {expected}",
        value
    );
}

/// Asserts two raw values differ by at most `max_ulps`.
#[track_caller]
pub fn assert_ulps<S: Storage>(actual: S, expected: S, max_ulps: i128) {
    let diff = ulps(actual, expected);
    assert!(
        diff <= max_ulps,
        "raw {actual} differs from {expected} by {diff} ULPs (limit {max_ulps})"
    );
}
