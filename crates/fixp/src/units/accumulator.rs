//! Multiply-accumulate register.
//!
//! Sums full-precision products at the format's accumulator width (twice the
//! storage, at most 128 bits) and rounds once at the end. Dot products and
//! filter taps computed this way lose precision only in [`Accumulator::finish`],
//! where the multiply rounding bias is applied and the result saturates.

use crate::common::Storage;
use crate::format::QFormat;

/// Running sum of products with `2n` fractional bits.
///
/// The sum wraps at the accumulator width, like a hardware MAC register;
/// only the final narrowing saturates.
#[derive(Debug, Clone)]
pub struct Accumulator<'a, S: Storage> {
    format: &'a QFormat<S>,
    sum: i128,
}

impl<S: Storage> QFormat<S> {
    /// Returns an empty accumulator bound to this format.
    pub const fn accumulator(&self) -> Accumulator<'_, S> {
        Accumulator {
            format: self,
            sum: 0,
        }
    }

    /// `Σ a[i] * b[i]` over the common prefix of both slices, rounded once.
    pub fn dot(&self, a: &[S], b: &[S]) -> S {
        let mut acc = self.accumulator();
        for (&x, &y) in a.iter().zip(b) {
            acc.mac(x, y);
        }
        acc.finish()
    }
}

impl<S: Storage> Accumulator<'_, S> {
    /// Sign-extends `value` from the accumulator width.
    fn wrap_to_width(&self, value: i128) -> i128 {
        let shift = 128 - self.format.format().accumulator_bits();
        (value << shift) >> shift
    }

    /// Adds `a * b`.
    pub fn mac(&mut self, a: S, b: S) {
        let product = a.to_wide() * b.to_wide();
        self.sum = self.wrap_to_width(self.sum.wrapping_add(product));
    }

    /// Subtracts `a * b`.
    pub fn msub(&mut self, a: S, b: S) {
        let product = a.to_wide() * b.to_wide();
        self.sum = self.wrap_to_width(self.sum.wrapping_sub(product));
    }

    /// Adds a value already in the format, aligning it to `2n` fractional bits.
    pub fn add(&mut self, x: S) {
        let aligned = x.to_wide() << self.format.frac_bits();
        self.sum = self.wrap_to_width(self.sum.wrapping_add(aligned));
    }

    /// Resets the sum to zero.
    pub fn clear(&mut self) {
        self.sum = 0;
    }

    /// Current sum, with `2n` fractional bits.
    pub const fn raw(&self) -> i128 {
        self.sum
    }

    /// Rounds the sum to `n` fractional bits and saturates to `[MIN, MAX]`.
    pub fn finish(&self) -> S {
        let half = self.format.constants().half();
        S::saturate(self.sum.wrapping_add(half) >> self.format.frac_bits())
    }
}
