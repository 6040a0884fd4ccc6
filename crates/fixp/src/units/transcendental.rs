//! Transcendental core.
//!
//! Square root, base-2 logarithm and exponential, and the functions derived
//! from them by change of base:
//!
//! | Function  | Method                                           | Domain sentinel |
//! |-----------|--------------------------------------------------|-----------------|
//! | `sqrt`    | bit-scan seed + 4 Newton-Raphson steps           | `x ≤ 0 → 0`     |
//! | `log2`    | bit-scan exponent + linear mantissa              | `x ≤ 0 → MIN`   |
//! | `exp2`    | shifted integer part × quadratic fraction        | `0` / `MAX`     |
//! | `log`     | `log2(x) · ln 2`                                 | `x ≤ 0 → MIN`   |
//! | `exp`     | `exp2(x · log2 e)`                               | `0` / `MAX`     |
//! | `pow`     | `exp2(e · log2(b))`                              | `b ≤ 0 → 0`     |
//!
//! The approximations are exact at powers of two and degrade across each
//! octave (the linear `log2` mantissa `f · log2 e` is off by up to 0.443 as `f → 1`).

use crate::common::Storage;
use crate::format::QFormat;

/// Fixed number of Newton-Raphson steps taken by `sqrt`.
const SQRT_ITERATIONS: usize = 4;

/// Index of the highest set bit of a positive value.
#[inline]
fn highest_bit(x: i128) -> u32 {
    127 - x.leading_zeros()
}

impl<S: Storage> QFormat<S> {
    /// Square root; 0 for `x ≤ 0`.
    ///
    /// The seed `2^((p + n) / 2)`, where `p` is the highest set bit of `x`, lies
    /// within a factor of two of the root. Four steps leave a relative error
    /// below 1e-7: within 1 raw unit while the root stays under 2^24 (every
    /// 8-, 16- and 32-bit format with `n ≤ 16`), proportionally more above.
    pub fn sqrt(&self, x: S) -> S {
        S::wrap(self.sqrt_wide(x.to_wide()))
    }

    fn sqrt_wide(&self, x: i128) -> i128 {
        if x <= 0 {
            return 0;
        }
        let n = self.frac_bits();
        let target = x << n;
        let mut guess = 1i128 << ((highest_bit(x) + n) / 2);
        for _ in 0..SQRT_ITERATIONS {
            if guess == 0 {
                break;
            }
            guess = (guess + target / guess) >> 1;
        }
        guess
    }

    /// Reciprocal square root `ONE / sqrt(x)`; `MAX` when the root is 0.
    pub fn rsqrt(&self, x: S) -> S {
        let root = self.sqrt_wide(x.to_wide());
        if root == 0 {
            return S::MAX;
        }
        S::wrap(self.div_wide(self.constants().one(), root))
    }

    /// Base-2 logarithm; `MIN` for `x ≤ 0`.
    pub fn log2(&self, x: S) -> S {
        S::wrap(self.log2_wide(x.to_wide()))
    }

    fn log2_wide(&self, x: i128) -> i128 {
        let table = self.constants();
        if x <= 0 {
            return table.min();
        }
        let n = self.frac_bits();
        let top = highest_bit(x);
        let exponent = i128::from(top) - i128::from(n);
        // Normalise into [ONE, 2 * ONE).
        let normalized = if top >= n { x >> (top - n) } else { x << (n - top) };
        let mantissa = normalized - table.one();
        (exponent << n) + ((mantissa * table.log2e()) >> n)
    }

    /// Base-2 exponential.
    ///
    /// # Returns
    ///
    /// `MAX` when the integer part of `x` is at least `m`, 0 when it is below `-n`.
    pub fn exp2(&self, x: S) -> S {
        S::wrap(self.exp2_wide(x.to_wide()))
    }

    fn exp2_wide(&self, x: i128) -> i128 {
        let table = self.constants();
        let n = self.frac_bits();
        let whole = x >> n;
        let fraction = x & table.frac_mask();

        if whole >= i128::from(self.format().m()) {
            return table.max();
        }
        if whole < -i128::from(n) {
            return 0;
        }

        let int_result = if whole >= 0 {
            table.one() << whole as u32
        } else {
            table.one() >> (-whole) as u32
        };
        // 2^f ≈ 1 + f·ln2 + (f·ln2)² / 2
        let t = (fraction * table.ln2()) >> n;
        let frac_result = table.one() + t + ((t * t) >> (n + 1));
        (int_result * frac_result) >> n
    }

    /// Natural exponential, `exp2(x · log2 e)`.
    pub fn exp(&self, x: S) -> S {
        let n = self.frac_bits();
        S::wrap(self.exp2_wide((x.to_wide() * self.constants().log2e()) >> n))
    }

    /// Natural logarithm, `log2(x) · ln 2`; `MIN` for `x ≤ 0`.
    pub fn log(&self, x: S) -> S {
        let x = x.to_wide();
        if x <= 0 {
            return S::MIN;
        }
        let n = self.frac_bits();
        let scaled = self.log2_wide(x).wrapping_mul(self.constants().ln2());
        S::wrap(scaled >> n)
    }

    /// `base` raised to `exponent`, `exp2(exponent · log2(base))`; 0 for `base ≤ 0`.
    pub fn pow(&self, base: S, exponent: S) -> S {
        let base = base.to_wide();
        if base <= 0 {
            return S::ZERO;
        }
        let n = self.frac_bits();
        // Saturate so out-of-range products still land on exp2's MAX/0 branches.
        let scaled = exponent.to_wide().saturating_mul(self.log2_wide(base));
        S::wrap(self.exp2_wide(scaled >> n))
    }
}
