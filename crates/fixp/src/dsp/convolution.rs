//! Linear convolution and cross-correlation.
//!
//! Both produce the full-length result, `x.len() + h.len() - 1` samples, each
//! summed in an [`Accumulator`](crate::units::Accumulator).

use crate::common::{DspError, Storage};
use crate::format::QFormat;

/// Checks both inputs are non-empty and `out` has the full output length.
fn check_lengths(a: usize, b: usize, out: usize) -> Result<(), DspError> {
    if a == 0 || b == 0 {
        return Err(DspError::EmptyInput);
    }
    let expected = a + b - 1;
    if out != expected {
        return Err(DspError::LengthMismatch {
            expected,
            actual: out,
        });
    }
    Ok(())
}

/// `out[n] = Σ x[n-k]·h[k]`.
pub fn convolve<S: Storage>(
    q: &QFormat<S>,
    x: &[S],
    h: &[S],
    out: &mut [S],
) -> Result<(), DspError> {
    check_lengths(x.len(), h.len(), out.len())?;
    for (n, slot) in out.iter_mut().enumerate() {
        let mut acc = q.accumulator();
        let first = n.saturating_sub(x.len() - 1);
        let last = n.min(h.len() - 1);
        for k in first..=last {
            acc.mac(x[n - k], h[k]);
        }
        *slot = acc.finish();
    }
    Ok(())
}

/// Full cross-correlation, `out[lag] = Σ x[i]·y[i + (y.len() - 1) - lag]`.
///
/// `out[y.len() - 1]` is the zero-lag product of the aligned sequences;
/// `out[0]` overlaps only `x[0]` with the last sample of `y`.
pub fn correlate<S: Storage>(
    q: &QFormat<S>,
    x: &[S],
    y: &[S],
    out: &mut [S],
) -> Result<(), DspError> {
    check_lengths(x.len(), y.len(), out.len())?;
    let offset = y.len() - 1;
    for (lag, slot) in out.iter_mut().enumerate() {
        let mut acc = q.accumulator();
        for (i, &sample) in x.iter().enumerate() {
            let Some(j) = (i + offset).checked_sub(lag) else {
                continue;
            };
            if let Some(&other) = y.get(j) {
                acc.mac(sample, other);
            }
        }
        *slot = acc.finish();
    }
    Ok(())
}
