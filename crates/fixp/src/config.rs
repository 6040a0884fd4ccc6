//! Generator configuration.
//!
//! This module defines the configuration consumed by [`generate`](crate::emit::generate). It provides:
//! 1. **Defaults:** The standard format list generated when none is configured.
//! 2. **Structures:** `GeneratorConfig` and its per-format `FormatSpec` entries.
//!
//! Configuration is supplied as JSON (`GeneratorConfig::from_json`) or built with
//! `GeneratorConfig::default()`. Formats are *not* validated here; validation is
//! the format selector's job and happens before anything is emitted.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default generator settings.
mod defaults {
    /// (m, n) pairs generated when the configuration names none.
    ///
    /// Q15.16 and Q23.8 (32-bit), Q8.8, Q7.8 and Q0.15 (16-bit), Q0.7 (8-bit),
    /// and the 32-bit integer format Q31.0.
    pub const FORMATS: [(u32, u32); 7] = [
        (15, 16),
        (8, 8),
        (7, 8),
        (0, 7),
        (0, 15),
        (23, 8),
        (31, 0),
    ];

    /// Emit the trigonometric and transcendental surface, not only arithmetic.
    pub const MATH: bool = true;
}

/// One requested Qm.n format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct FormatSpec {
    /// Integer bits (excluding the sign bit).
    pub m: u32,
    /// Fractional bits.
    pub n: u32,
}

impl FormatSpec {
    /// Requests Qm.n.
    pub const fn new(m: u32, n: u32) -> Self {
        Self { m, n }
    }
}

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Formats to generate, in order.
    #[serde(default = "GeneratorConfig::default_formats")]
    pub formats: Vec<FormatSpec>,

    /// Include sqrt, trigonometry, logarithms and exponentials in every declaration set.
    #[serde(default = "GeneratorConfig::default_math")]
    pub math: bool,
}

impl GeneratorConfig {
    fn default_formats() -> Vec<FormatSpec> {
        defaults::FORMATS
            .iter()
            .map(|&(m, n)| FormatSpec::new(m, n))
            .collect()
    }

    fn default_math() -> bool {
        defaults::MATH
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixp_core::config::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_json(r#"{ "formats": [{ "m": 1, "n": 14 }] }"#).unwrap();
    /// assert_eq!(config.formats.len(), 1);
    /// assert!(config.math);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            formats: Self::default_formats(),
            math: defaults::MATH,
        }
    }
}
