//! Typed operation set.
//!
//! [`QFormat<S>`] is the single generic implementation of a Qm.n format: one
//! code path serves every (m, n) pair, with the storage integer `S` fixed at
//! the type level and (m, n) fixed at construction time. The operations
//! themselves are implemented in [`crate::units`]; this module provides:
//! 1. **Construction:** Validation of (m, n) against the storage integer.
//! 2. **Constants:** Typed accessors narrowing the [`ConstantTable`] to `S`.
//! 3. **Dispatch:** [`AnyQFormat`] for callers that only know (m, n) at runtime.
//!
//! Raw values are plain `S` integers, copied by value; the real number they
//! represent is `raw / 2^n`.

use std::marker::PhantomData;

use tracing::debug;

use super::{ConstantTable, Format, StorageWidth};
use crate::common::{FormatError, Storage};

/// Operation set and constants of one Qm.n format stored in `S`.
///
/// `QFormat` holds no mutable state; it can be shared by reference across threads.
///
/// # Examples
///
/// ```
/// use fixp_core::QFormat;
///
/// let q = QFormat::<i16>::new(7, 8).unwrap();
/// let a = q.from_real(1.5);
/// assert_eq!(a, 384);
/// assert_eq!(q.to_real(q.mul(a, a)), 2.25);
/// assert_eq!(q.add(q.max_value(), 1), q.min_value()); // wraps
/// assert_eq!(q.div(a, 0), q.max_value());       // saturates
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QFormat<S: Storage> {
    format: Format,
    table: ConstantTable,
    _storage: PhantomData<S>,
}

impl<S: Storage> QFormat<S> {
    /// Selects Qm.n and binds it to `S`.
    ///
    /// # Returns
    ///
    /// [`FormatError::FormatTooWide`] when `m + n + 1 > 64`, or
    /// [`FormatError::StorageMismatch`] when Qm.n is not stored in `S`.
    pub fn new(m: u32, n: u32) -> Result<Self, FormatError> {
        Self::from_format(Format::select(m, n)?)
    }

    /// Binds an already selected format to `S`.
    pub fn from_format(format: Format) -> Result<Self, FormatError> {
        if format.storage_bits() != S::BITS {
            return Err(FormatError::StorageMismatch {
                m: format.m(),
                n: format.n(),
                expected: format.storage_bits(),
                actual: S::BITS,
            });
        }
        Ok(Self::build(format))
    }

    fn build(format: Format) -> Self {
        let table = ConstantTable::generate(&format);
        debug!(
            m = format.m(),
            n = format.n(),
            storage_bits = format.storage_bits(),
            iterations = table.iterations(),
            "built constant table"
        );
        Self {
            format,
            table,
            _storage: PhantomData,
        }
    }

    /// The validated format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The format's constant table.
    pub const fn constants(&self) -> &ConstantTable {
        &self.table
    }

    /// Fractional bits `n`.
    #[inline]
    pub const fn frac_bits(&self) -> u32 {
        self.format.n()
    }

    /// `2^n` as a real number.
    #[inline]
    pub(crate) fn scale(&self) -> f64 {
        (1u128 << self.frac_bits()) as f64
    }

    /// Raw 0.
    pub const fn zero(&self) -> S {
        S::ZERO
    }

    /// Raw 1: the smallest positive value.
    pub fn epsilon(&self) -> S {
        S::wrap(1)
    }

    /// 1.0
    pub fn one(&self) -> S {
        S::wrap(self.table.one())
    }

    /// 0.5 (raw 0 when `n == 0`).
    pub fn half(&self) -> S {
        S::wrap(self.table.half())
    }

    /// Largest storage value.
    pub const fn max_value(&self) -> S {
        S::MAX
    }

    /// Smallest storage value.
    pub const fn min_value(&self) -> S {
        S::MIN
    }

    /// π
    pub fn pi(&self) -> S {
        S::wrap(self.table.pi())
    }

    /// π/2
    pub fn pi_over_2(&self) -> S {
        S::wrap(self.table.pi_over_2())
    }

    /// π/4
    pub fn pi_over_4(&self) -> S {
        S::wrap(self.table.pi_over_4())
    }

    /// 2π
    pub fn two_pi(&self) -> S {
        S::wrap(self.table.two_pi())
    }

    /// e
    pub fn e(&self) -> S {
        S::wrap(self.table.e())
    }

    /// ln 2
    pub fn ln2(&self) -> S {
        S::wrap(self.table.ln2())
    }

    /// log2 e
    pub fn log2e(&self) -> S {
        S::wrap(self.table.log2e())
    }
}

/// A format instantiated with whichever storage integer it selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyQFormat {
    /// Formats of at most 8 bits.
    Q8(QFormat<i8>),
    /// Formats of 9 to 16 bits.
    Q16(QFormat<i16>),
    /// Formats of 17 to 32 bits.
    Q32(QFormat<i32>),
    /// Formats of 33 to 64 bits.
    Q64(QFormat<i64>),
}

impl AnyQFormat {
    /// Instantiates `format` with its selected storage integer.
    pub fn from_format(format: Format) -> Self {
        match format.storage() {
            StorageWidth::W8 => Self::Q8(QFormat::build(format)),
            StorageWidth::W16 => Self::Q16(QFormat::build(format)),
            StorageWidth::W32 => Self::Q32(QFormat::build(format)),
            StorageWidth::W64 => Self::Q64(QFormat::build(format)),
        }
    }

    /// Selects and instantiates Qm.n.
    pub fn new(m: u32, n: u32) -> Result<Self, FormatError> {
        Ok(Self::from_format(Format::select(m, n)?))
    }

    /// The validated format.
    pub const fn format(&self) -> Format {
        match self {
            Self::Q8(q) => q.format(),
            Self::Q16(q) => q.format(),
            Self::Q32(q) => q.format(),
            Self::Q64(q) => q.format(),
        }
    }

    /// The format's constant table.
    pub const fn constants(&self) -> &ConstantTable {
        match self {
            Self::Q8(q) => q.constants(),
            Self::Q16(q) => q.constants(),
            Self::Q32(q) => q.constants(),
            Self::Q64(q) => q.constants(),
        }
    }
}
