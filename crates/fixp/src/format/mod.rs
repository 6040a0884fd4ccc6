//! Qm.n format selection.
//!
//! A format is fixed once, at construction time, and everything else hangs off it:
//! 1. **Selector:** [`Format::select`] maps (m, n) to a storage and accumulator width.
//! 2. **Constants:** [`ConstantTable`] holds the scaled constants and the CORDIC table.
//! 3. **Operation set:** [`QFormat`] binds a format to its storage integer and exposes
//!    every arithmetic, rounding, trigonometric and transcendental operation.

/// Scaled constants and the CORDIC arctangent table.
pub mod constants;

/// Typed operation set bound to a storage integer.
pub mod qformat;

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::FormatError;

pub use constants::{ConstantTable, MAX_CORDIC_ITERATIONS};
pub use qformat::{AnyQFormat, QFormat};

/// Widest supported format, in bits (sign included).
pub const MAX_TOTAL_BITS: u32 = 64;

/// Widest accumulator used by multiply and divide.
const MAX_ACCUMULATOR_BITS: u32 = 128;

/// Signed storage integer selected for a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StorageWidth {
    /// `i8`
    W8,
    /// `i16`
    W16,
    /// `i32`
    W32,
    /// `i64`
    W64,
}

impl StorageWidth {
    /// Returns the smallest width that holds `total_bits`, or `None` above 64.
    pub const fn for_total_bits(total_bits: u32) -> Option<Self> {
        match total_bits {
            0..=8 => Some(Self::W8),
            9..=16 => Some(Self::W16),
            17..=32 => Some(Self::W32),
            33..=64 => Some(Self::W64),
            _ => None,
        }
    }

    /// Width of the storage integer in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Width of the multiply/divide accumulator (twice the storage, at most 128).
    pub const fn accumulator_bits(self) -> u32 {
        let doubled = self.bits() * 2;
        if doubled > MAX_ACCUMULATOR_BITS {
            MAX_ACCUMULATOR_BITS
        } else {
            doubled
        }
    }
}

/// A validated Qm.n layout: 1 sign bit, `m` integer bits, `n` fractional bits.
///
/// Construct with [`Format::select`]; an invalid (m, n) never produces a `Format`.
///
/// # Examples
///
/// ```
/// use fixp_core::format::{Format, StorageWidth};
///
/// let q = Format::select(7, 8).unwrap();
/// assert_eq!(q.total_bits(), 16);
/// assert_eq!(q.storage(), StorageWidth::W16);
/// assert_eq!(q.accumulator_bits(), 32);
/// assert!(Format::select(40, 24).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    m: u32,
    n: u32,
    storage: StorageWidth,
}

impl Format {
    /// Selects the storage layout for Qm.n.
    ///
    /// # Arguments
    ///
    /// * `m` - Integer bits (excluding the sign bit).
    /// * `n` - Fractional bits.
    ///
    /// # Returns
    ///
    /// The format, or [`FormatError::FormatTooWide`] when `m + n + 1 > 64`.
    pub fn select(m: u32, n: u32) -> Result<Self, FormatError> {
        let total_bits = m.saturating_add(n).saturating_add(1);
        let Some(storage) = StorageWidth::for_total_bits(total_bits) else {
            warn!(m, n, total_bits, "rejecting format wider than 64 bits");
            return Err(FormatError::FormatTooWide { m, n, total_bits });
        };
        debug!(m, n, storage_bits = storage.bits(), "selected format");
        Ok(Self { m, n, storage })
    }

    /// Integer bits.
    pub const fn m(&self) -> u32 {
        self.m
    }

    /// Fractional bits.
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// `m + n + 1`.
    pub const fn total_bits(&self) -> u32 {
        self.m + self.n + 1
    }

    /// Selected storage integer.
    pub const fn storage(&self) -> StorageWidth {
        self.storage
    }

    /// Width of the storage integer in bits.
    pub const fn storage_bits(&self) -> u32 {
        self.storage.bits()
    }

    /// Width of the multiply/divide accumulator in bits.
    pub const fn accumulator_bits(&self) -> u32 {
        self.storage.accumulator_bits()
    }

    /// Lower-case type name used by emitted declarations, e.g. `q7_8`.
    pub fn type_name(&self) -> String {
        format!("q{}_{}", self.m, self.n)
    }

    /// Builds the constant table and operation set for this format.
    ///
    /// The storage integer is chosen from [`Format::storage`], so this cannot fail.
    pub fn instantiate(self) -> AnyQFormat {
        AnyQFormat::from_format(self)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}.{}", self.m, self.n)
    }
}
