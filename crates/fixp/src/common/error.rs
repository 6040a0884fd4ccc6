//! Error definitions.
//!
//! Numeric operations never fail: they wrap or return a documented sentinel.
//! The only hard failures live at the boundaries of the crate:
//! 1. **Format construction:** `FormatTooWide` for layouts over 64 bits and
//!    `StorageMismatch` for a typed handle whose integer does not match the format.
//! 2. **Signal processing:** Buffer shape errors for the slice-based DSP helpers.
//! 3. **Generation:** Configuration parsing and emitter failures.

use thiserror::Error;

/// Failure to build a Qm.n format or its typed operation set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// `m + n + 1` exceeds 64 bits; no table or operation set is produced.
    #[error("Q{m}.{n} needs {total_bits} bits, more than the 64-bit maximum")]
    FormatTooWide {
        /// Requested integer bits.
        m: u32,
        /// Requested fractional bits.
        n: u32,
        /// `m + n + 1`.
        total_bits: u32,
    },

    /// The storage integer requested by the caller is not the one selected for (m, n).
    #[error("Q{m}.{n} is stored in {expected} bits, not {actual}")]
    StorageMismatch {
        /// Requested integer bits.
        m: u32,
        /// Requested fractional bits.
        n: u32,
        /// Storage width chosen by the format selector.
        expected: u32,
        /// Width of the integer type supplied by the caller.
        actual: u32,
    },
}

/// Shape errors raised by the slice-based DSP helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DspError {
    /// Two buffers that must agree in length do not.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Radix-2 transforms require a power-of-two length of at least 2.
    #[error("FFT length {0} is not a power of two >= 2")]
    NotPowerOfTwo(usize),

    /// An input that must contain at least one sample was empty.
    #[error("Input is empty")]
    EmptyInput,
}

/// Failure of an [`Emitter`](crate::emit::Emitter) to write a declaration set.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The underlying writer failed.
    #[error("I/O error while emitting: {0}")]
    Io(#[from] std::io::Error),

    /// The declarations could not be serialized.
    #[error("Serialization error while emitting: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The emitter refused the declaration set.
    #[error("Emitter rejected {type_name}: {reason}")]
    Rejected {
        /// Type name of the rejected format (e.g. `q7_8`).
        type_name: String,
        /// Emitter-specific reason.
        reason: String,
    },
}

/// Failure of a whole generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A configured format failed validation; nothing was emitted.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The emitter failed part-way through.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Malformed generator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document did not match the configuration schema.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
