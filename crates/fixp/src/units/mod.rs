//! Execution units of the operation set.
//!
//! Each unit adds one `impl<S: Storage> QFormat<S>` block, so the whole surface
//! is reachable from a single [`QFormat`](crate::QFormat) handle:
//! - [`arithmetic`]:     add, sub, mul, div, real conversion, min/max/clamp, saturating variants
//! - [`rounding`]:       trunc, floor, ceil, round, frac
//! - [`cordic`]:         rotation/vectoring kernels, sin, cos, tan, atan, atan2
//! - [`transcendental`]: sqrt, rsqrt, log2, exp2, log, exp, pow
//! - [`accumulator`]:    multiply-accumulate at the accumulator width
//!
//! Every operation widens its operands to `i128`, computes there, and narrows
//! the result with [`Storage::wrap`](crate::Storage::wrap) unless it documents
//! a saturating or sentinel result instead.

/// Wide multiply-accumulate register.
pub mod accumulator;

/// Integer arithmetic and real-number conversion.
pub mod arithmetic;

/// CORDIC engine and the trigonometric functions built on it.
pub mod cordic;

/// Fractional-bit masking: trunc, floor, ceil, round.
pub mod rounding;

/// Square root, logarithms, exponentials and power.
pub mod transcendental;

pub use accumulator::Accumulator;
pub use rounding::RoundingMode;
