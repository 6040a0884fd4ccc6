//! Radix-2 decimation-in-time FFT.
//!
//! Cooley-Tukey over a caller slice, in place:
//! 1. **Permutation:** Reorders the input by bit-reversed index.
//! 2. **Butterflies:** `log2(N)` passes of `u ± w·t`, with each twiddle `w`
//!    computed directly by the CORDIC engine at the working width.
//! 3. **Scaling:** The inverse transform divides by `N` (rounding shift).
//!
//! The forward transform is unscaled, so bin magnitudes grow by up to `N`
//! and wrap once they leave the storage range.

use crate::common::{DspError, Storage};
use crate::dsp::Complex;
use crate::format::QFormat;

/// Transforms `data` in place; `inverse` selects the inverse transform.
///
/// # Returns
///
/// [`DspError::NotPowerOfTwo`] unless `data.len()` is a power of two ≥ 2.
pub fn fft_radix2<S: Storage>(
    q: &QFormat<S>,
    data: &mut [Complex<S>],
    inverse: bool,
) -> Result<(), DspError> {
    let len = data.len();
    if len < 2 || !len.is_power_of_two() {
        return Err(DspError::NotPowerOfTwo(len));
    }

    bit_reverse_permute(data);

    let two_pi = q.constants().two_pi();
    let mut span = 2;
    while span <= len {
        let half_span = span / 2;
        for k in 0..half_span {
            // w = e^(∓2πik/span)
            let angle = two_pi * k as i128 / span as i128;
            let (sin, cos) = q.sincos_wide(if inverse { angle } else { -angle });
            for start in (0..len).step_by(span) {
                let (top, bottom) = (start + k, start + k + half_span);
                let (tr, ti) = q.complex_mul_wide(
                    (cos, sin),
                    (data[bottom].re.to_wide(), data[bottom].im.to_wide()),
                );
                let (ur, ui) = (data[top].re.to_wide(), data[top].im.to_wide());
                data[top] = Complex::new(S::wrap(ur.wrapping_add(tr)), S::wrap(ui.wrapping_add(ti)));
                data[bottom] =
                    Complex::new(S::wrap(ur.wrapping_sub(tr)), S::wrap(ui.wrapping_sub(ti)));
            }
        }
        span <<= 1;
    }

    if inverse {
        let shift = len.trailing_zeros();
        for value in data.iter_mut() {
            value.re = rounding_shift(value.re, shift);
            value.im = rounding_shift(value.im, shift);
        }
    }
    Ok(())
}

/// Swaps every element with the one at its bit-reversed index.
fn bit_reverse_permute<T>(data: &mut [T]) {
    let len = data.len();
    let bits = len.trailing_zeros();
    for i in 0..len {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            data.swap(i, j);
        }
    }
}

/// `x / 2^shift`, rounded half up. `shift` must be at least 1.
fn rounding_shift<S: Storage>(x: S, shift: u32) -> S {
    S::wrap((x.to_wide() + (1i128 << (shift - 1))) >> shift)
}
