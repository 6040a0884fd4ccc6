//! Arithmetic core.
//!
//! Implements add, subtract, multiply and divide over the storage integer,
//! conversion to and from real numbers, and the comparison helpers.
//!
//! Overflow policy differs per operation and is part of the contract:
//! - `add`/`sub`/`mul`/`neg`/`abs` **wrap** modulo `2^BITS`.
//! - `div` by zero **saturates** to `MAX` (dividend ≥ 0) or `MIN`.
//! - The `*_sat` variants clamp to `[MIN, MAX]`.

use crate::common::Storage;
use crate::format::QFormat;

impl<S: Storage> QFormat<S> {
    /// Wrapping addition.
    #[inline]
    pub fn add(&self, a: S, b: S) -> S {
        S::wrap(a.to_wide() + b.to_wide())
    }

    /// Wrapping subtraction.
    #[inline]
    pub fn sub(&self, a: S, b: S) -> S {
        S::wrap(a.to_wide() - b.to_wide())
    }

    /// Fixed-point multiply: `(a * b + HALF) >> n`, wrapped.
    ///
    /// The bias is added regardless of sign, so a negative product whose
    /// discarded bits are exactly one half rounds toward +∞.
    #[inline]
    pub fn mul(&self, a: S, b: S) -> S {
        S::wrap(self.mul_wide(a.to_wide(), b.to_wide()))
    }

    /// Multiply at the working width without narrowing.
    #[inline]
    pub(crate) fn mul_wide(&self, a: i128, b: i128) -> i128 {
        (a * b + self.constants().half()) >> self.frac_bits()
    }

    /// Fixed-point divide: `(a << n) / b`, truncated toward zero.
    ///
    /// # Returns
    ///
    /// `MAX` when `b == 0` and `a >= 0`, `MIN` when `b == 0` and `a < 0`.
    /// Other quotients that do not fit the storage wrap.
    pub fn div(&self, a: S, b: S) -> S {
        if b == S::ZERO {
            return if a >= S::ZERO { S::MAX } else { S::MIN };
        }
        S::wrap(self.div_wide(a.to_wide(), b.to_wide()))
    }

    /// `(a << n) / b` at the working width. `b` must be non-zero.
    #[inline]
    pub(crate) fn div_wide(&self, a: i128, b: i128) -> i128 {
        (a << self.frac_bits()) / b
    }

    /// Converts a real number, rounding half away from zero.
    ///
    /// Values outside the storage range wrap; NaN converts to 0 and
    /// infinities to the wrapped image of the `i128` bounds.
    pub fn from_real(&self, value: f64) -> S {
        S::wrap(self.from_real_wide(value))
    }

    /// `round(value * 2^n)` at the working width; saturates at the `i128` bounds.
    pub(crate) fn from_real_wide(&self, value: f64) -> i128 {
        let scaled = value * self.scale();
        let biased = if value >= 0.0 { scaled + 0.5 } else { scaled - 0.5 };
        biased as i128
    }

    /// Converts to a real number, `raw / 2^n`.
    ///
    /// Exact while the raw value fits the 53-bit `f64` mantissa.
    pub fn to_real(&self, value: S) -> f64 {
        value.to_wide() as f64 / self.scale()
    }

    /// Wrapping negation (`-MIN == MIN`).
    #[inline]
    pub fn neg(&self, a: S) -> S {
        S::wrap(-a.to_wide())
    }

    /// Absolute value; wraps for `MIN`.
    #[inline]
    pub fn abs(&self, a: S) -> S {
        if a < S::ZERO { self.neg(a) } else { a }
    }

    /// Smaller of two values.
    #[inline]
    pub fn min(&self, a: S, b: S) -> S {
        a.min(b)
    }

    /// Larger of two values.
    #[inline]
    pub fn max(&self, a: S, b: S) -> S {
        a.max(b)
    }

    /// Restricts `x` to `[lo, hi]`.
    ///
    /// Never panics: with `lo > hi` the result is `hi`.
    #[inline]
    pub fn clamp(&self, x: S, lo: S, hi: S) -> S {
        x.max(lo).min(hi)
    }

    /// Saturating addition.
    #[inline]
    pub fn add_sat(&self, a: S, b: S) -> S {
        S::saturate(a.to_wide() + b.to_wide())
    }

    /// Saturating subtraction.
    #[inline]
    pub fn sub_sat(&self, a: S, b: S) -> S {
        S::saturate(a.to_wide() - b.to_wide())
    }

    /// Multiply with the same rounding as [`QFormat::mul`], clamped instead of wrapped.
    #[inline]
    pub fn mul_sat(&self, a: S, b: S) -> S {
        S::saturate(self.mul_wide(a.to_wide(), b.to_wide()))
    }

    /// Saturating negation (`-MIN == MAX`).
    #[inline]
    pub fn neg_sat(&self, a: S) -> S {
        S::saturate(-a.to_wide())
    }

    /// Saturating absolute value (`|MIN| == MAX`).
    #[inline]
    pub fn abs_sat(&self, a: S) -> S {
        S::saturate(a.to_wide().abs())
    }

    /// `i << n`, wrapped.
    pub fn from_int(&self, i: i64) -> S {
        S::wrap(i128::from(i) << self.frac_bits())
    }

    /// Converts a real number like [`QFormat::from_real`], clamped to `[MIN, MAX]`.
    ///
    /// NaN converts to 0.
    pub fn from_real_sat(&self, value: f64) -> S {
        S::saturate(self.from_real_wide(value))
    }

    /// Multiplies by a plain integer, wrapped.
    pub fn mul_int(&self, a: S, i: i64) -> S {
        S::wrap(a.to_wide() * i128::from(i))
    }

    /// Divides by a plain integer, truncating toward zero.
    ///
    /// Division by zero returns `MAX` for `a >= 0` and `MIN` otherwise.
    pub fn div_int(&self, a: S, i: i64) -> S {
        if i == 0 {
            return if a >= S::ZERO { S::MAX } else { S::MIN };
        }
        S::wrap(a.to_wide() / i128::from(i))
    }

    /// Left shift of the raw value, wrapped; 0 once `shift` reaches the storage width.
    pub fn shl(&self, a: S, shift: u32) -> S {
        if shift >= S::BITS {
            return S::ZERO;
        }
        S::wrap(a.to_wide() << shift)
    }

    /// Arithmetic right shift of the raw value; the sign fills in past the storage width.
    pub fn shr(&self, a: S, shift: u32) -> S {
        S::wrap(a.to_wide() >> shift.min(S::BITS))
    }

    /// Integer part, rounded toward −∞.
    pub fn to_int(&self, x: S) -> i64 {
        (x.to_wide() >> self.frac_bits()) as i64
    }

    /// `-ONE`, `0` or `ONE` according to the sign of `x`.
    pub fn sign(&self, x: S) -> S {
        match x.cmp(&S::ZERO) {
            std::cmp::Ordering::Less => S::wrap(-self.constants().one()),
            std::cmp::Ordering::Equal => S::ZERO,
            std::cmp::Ordering::Greater => self.one(),
        }
    }

    /// Linear interpolation `a + (b - a) * t`, wrapped.
    ///
    /// The difference is taken at the working width, so only the final sum wraps.
    pub fn lerp(&self, a: S, b: S, t: S) -> S {
        let a = a.to_wide();
        // (b - a) * t can pass 2^127 for 64-bit storage; the low 128 bits
        // still hold every bit the narrowing keeps.
        let scaled = (b.to_wide() - a)
            .wrapping_mul(t.to_wide())
            .wrapping_add(self.constants().half());
        S::wrap(a.wrapping_add(scaled >> self.frac_bits()))
    }
}
