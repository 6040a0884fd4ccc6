//! Common types shared by every unit.
//!
//! This module provides:
//! 1. **Storage:** The [`Storage`] trait abstracting over the 8/16/32/64-bit raw integers.
//! 2. **Errors:** Format, DSP, emission, generation and configuration error types.

/// Error types.
pub mod error;

/// Storage-width abstraction over `i8`/`i16`/`i32`/`i64`.
pub mod storage;

pub use error::{ConfigError, DspError, EmitError, FormatError, GenerateError};
pub use storage::Storage;
