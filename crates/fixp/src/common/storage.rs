//! Storage-width abstraction.
//!
//! A Qm.n value lives in the smallest signed integer of 8, 16, 32 or 64 bits
//! that holds `m + n + 1` bits. This module provides:
//! 1. **`Storage`:** The trait implemented by `i8`, `i16`, `i32` and `i64`.
//! 2. **Widening:** Lossless conversion of a raw value into the `i128` working width.
//! 3. **Wrapping:** Two's-complement truncation of a working value back to storage.
//!
//! Every operation in [`crate::units`] computes in `i128` and narrows with
//! [`Storage::wrap`]; that narrowing *is* the wraparound overflow policy.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Signed integer type that can hold the raw bits of a fixed-point value.
///
/// Implemented for `i8`, `i16`, `i32` and `i64` only. The accumulator used by
/// multiply/divide is twice [`Storage::BITS`] wide; all of them fit in `i128`.
pub trait Storage:
    Copy + Clone + Debug + Display + Default + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Width of the storage integer in bits.
    const BITS: u32;
    /// Most negative raw value.
    const MIN: Self;
    /// Most positive raw value.
    const MAX: Self;
    /// Raw zero.
    const ZERO: Self;

    /// Sign-extends the raw value into the `i128` working width.
    fn to_wide(self) -> i128;

    /// Truncates a working value to the storage width (two's-complement wrap).
    fn wrap(wide: i128) -> Self;

    /// Clamps a working value into `[MIN, MAX]`.
    #[inline]
    fn saturate(wide: i128) -> Self {
        if wide > Self::MAX.to_wide() {
            Self::MAX
        } else if wide < Self::MIN.to_wide() {
            Self::MIN
        } else {
            Self::wrap(wide)
        }
    }

    /// Reinterprets the raw value as an `i64` (sign-extended).
    #[inline]
    fn to_i64(self) -> i64 {
        self.to_wide() as i64
    }
}

macro_rules! impl_storage {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Storage for $ty {
                const BITS: u32 = <$ty>::BITS;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const ZERO: Self = 0;

                #[inline(always)]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn wrap(wide: i128) -> Self {
                    wide as $ty
                }
            }
        )*
    };
}

impl_storage!(i8, i16, i32, i64);
