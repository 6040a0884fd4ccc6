//! Qm.n fixed-point arithmetic library.
//!
//! This crate implements signed fixed-point formats with `m` integer bits and `n`
//! fractional bits, stored in the smallest of `i8`/`i16`/`i32`/`i64` that fits:
//! 1. **Format:** Selection of storage and accumulator width, and the per-format constant table.
//! 2. **Units:** Arithmetic, rounding, CORDIC trigonometry and transcendental functions.
//! 3. **DSP:** FFT, FIR/biquad filters, windows, convolution and correlation.
//! 4. **Emission:** Declaration sets for artifact writers, driven by a JSON configuration.
//!
//! Every numeric operation is a pure function of its raw inputs and the format's
//! immutable constants: no allocation, no locking, no floating point outside
//! `from_real`/`to_real`.

/// Common types (storage abstraction, error types).
pub mod common;
/// Generator configuration (defaults, format list).
pub mod config;
/// Signal-processing helpers (complex values, FFT, filters, windows, convolution).
pub mod dsp;
/// Declaration sets, emitters and the generation driver.
pub mod emit;
/// Format selection, constant generation and the typed operation set.
pub mod format;
/// Execution units (arithmetic, rounding, CORDIC, transcendental, accumulator).
pub mod units;

/// Storage integer abstraction implemented by `i8`, `i16`, `i32` and `i64`.
pub use crate::common::Storage;
/// Generator configuration; use `GeneratorConfig::default()` or parse from JSON.
pub use crate::config::GeneratorConfig;
/// Validated Qm.n layout; construct with `Format::select`.
pub use crate::format::Format;
/// Operation set of one format; construct with `QFormat::<S>::new(m, n)`.
pub use crate::format::{AnyQFormat, QFormat};
