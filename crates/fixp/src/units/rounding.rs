//! Rounding core.
//!
//! Rounds to the integer grid (multiples of `ONE`) by masking the `n`
//! fractional bits. Masking is applied to the magnitude, so the modes act on
//! the real value and not on its two's-complement encoding:
//!
//! | Mode    | Direction                   | −1.5 | −1.25 | 1.25 | 1.5 |
//! |---------|-----------------------------|------|-------|------|-----|
//! | `trunc` | toward zero                 | −1   | −1    | 1    | 1   |
//! | `floor` | toward −∞                   | −2   | −2    | 1    | 1   |
//! | `ceil`  | toward +∞                   | −1   | −1    | 2    | 2   |
//! | `round` | nearest, ties away from zero | −2   | −1    | 1    | 2   |
//!
//! Results that leave the storage range (e.g. `ceil` just below `MAX`) wrap.

use serde::{Deserialize, Serialize};

use crate::common::Storage;
use crate::format::QFormat;

/// Rounding direction for [`QFormat::round_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Toward zero.
    Trunc,
    /// Toward −∞.
    Floor,
    /// Toward +∞.
    Ceil,
    /// To nearest, ties away from zero.
    Round,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 4] = [Self::Trunc, Self::Floor, Self::Ceil, Self::Round];
}

impl<S: Storage> QFormat<S> {
    /// Rounds `x` to the integer grid in the given direction.
    pub fn round_with(&self, mode: RoundingMode, x: S) -> S {
        match mode {
            RoundingMode::Trunc => self.trunc(x),
            RoundingMode::Floor => self.floor(x),
            RoundingMode::Ceil => self.ceil(x),
            RoundingMode::Round => self.round(x),
        }
    }

    /// Rounds toward zero.
    pub fn trunc(&self, x: S) -> S {
        S::wrap(self.trunc_wide(x.to_wide()))
    }

    fn trunc_wide(&self, x: i128) -> i128 {
        let keep = !self.constants().frac_mask();
        if x >= 0 { x & keep } else { -((-x) & keep) }
    }

    fn has_fraction(&self, x: i128) -> bool {
        x & self.constants().frac_mask() != 0
    }

    /// Rounds toward −∞.
    pub fn floor(&self, x: S) -> S {
        let x = x.to_wide();
        let t = self.trunc_wide(x);
        if x < 0 && self.has_fraction(x) {
            S::wrap(t - self.constants().one())
        } else {
            S::wrap(t)
        }
    }

    /// Rounds toward +∞.
    pub fn ceil(&self, x: S) -> S {
        let x = x.to_wide();
        let t = self.trunc_wide(x);
        if x >= 0 && self.has_fraction(x) {
            S::wrap(t + self.constants().one())
        } else {
            S::wrap(t)
        }
    }

    /// Rounds to nearest, ties away from zero.
    pub fn round(&self, x: S) -> S {
        S::wrap(self.round_wide(x.to_wide()))
    }

    fn round_wide(&self, x: i128) -> i128 {
        let table = self.constants();
        let keep = !table.frac_mask();
        if x >= 0 {
            (x + table.half()) & keep
        } else {
            -((-x + table.half()) & keep)
        }
    }

    /// Fractional part, `x - trunc(x)`; carries the sign of `x`.
    pub fn frac(&self, x: S) -> S {
        let x = x.to_wide();
        S::wrap(x - self.trunc_wide(x))
    }

    /// Nearest integer, ties away from zero.
    ///
    /// Computed before narrowing, so `to_int_round(MAX)` does not wrap.
    pub fn to_int_round(&self, x: S) -> i64 {
        (self.round_wide(x.to_wide()) >> self.frac_bits()) as i64
    }
}
