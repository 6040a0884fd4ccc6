//! Spectral-analysis windows.
//!
//! Each function fills a caller slice of length `N` with the symmetric window
//! `w[k]`, `θ = 2πk / (N - 1)`. The cosines are taken at the working width,
//! so the window is exact to the CORDIC resolution even where `ONE` itself
//! does not fit the storage; the peak value 1.0 wraps in such formats.

use crate::common::{DspError, Storage};
use crate::format::QFormat;

/// Hann window, `w = 0.5 - 0.5·cos θ`.
pub fn hann<S: Storage>(q: &QFormat<S>, out: &mut [S]) -> Result<(), DspError> {
    fill_cosine_window(q, out, [0.5, 0.5, 0.0])
}

/// Hamming window, `w = 0.54 - 0.46·cos θ`.
pub fn hamming<S: Storage>(q: &QFormat<S>, out: &mut [S]) -> Result<(), DspError> {
    fill_cosine_window(q, out, [0.54, 0.46, 0.0])
}

/// Blackman window, `w = 0.42 - 0.5·cos θ + 0.08·cos 2θ`.
pub fn blackman<S: Storage>(q: &QFormat<S>, out: &mut [S]) -> Result<(), DspError> {
    fill_cosine_window(q, out, [0.42, 0.5, 0.08])
}

/// `w = c0 - c1·cos θ + c2·cos 2θ`; a single-point window is `[1.0]`.
fn fill_cosine_window<S: Storage>(
    q: &QFormat<S>,
    out: &mut [S],
    coefficients: [f64; 3],
) -> Result<(), DspError> {
    let len = out.len();
    if len == 0 {
        return Err(DspError::EmptyInput);
    }
    if len == 1 {
        out[0] = q.one();
        return Ok(());
    }

    let [c0, c1, c2] = coefficients.map(|c| q.from_real_wide(c));
    let two_pi = q.constants().two_pi();
    let last = (len - 1) as i128;
    for (k, slot) in out.iter_mut().enumerate() {
        let theta = two_pi * k as i128 / last;
        let (_, cos) = q.sincos_wide(theta);
        let (_, cos2) = q.sincos_wide(2 * theta);
        *slot = S::wrap(c0 - q.mul_wide(c1, cos) + q.mul_wide(c2, cos2));
    }
    Ok(())
}
