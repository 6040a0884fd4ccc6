//! Fixed-point signal processing.
//!
//! Slice-based building blocks that compute entirely in one [`QFormat`]:
//! - [`complex`]:     complex values and their arithmetic
//! - [`fft`]:         in-place radix-2 decimation-in-time FFT
//! - [`filter`]:      FIR and biquad (direct form I) filters
//! - [`window`]:      Hann, Hamming and Blackman windows
//! - [`convolution`]: full linear convolution and cross-correlation
//!
//! Sums of products go through the [`Accumulator`](crate::units::Accumulator),
//! so each output sample is rounded once and saturates instead of wrapping.
//!
//! [`QFormat`]: crate::QFormat

/// Complex values over a fixed-point format.
pub mod complex;

/// Full linear convolution and correlation.
pub mod convolution;

/// Radix-2 FFT.
pub mod fft;

/// FIR and biquad filters.
pub mod filter;

/// Spectral-analysis windows.
pub mod window;

pub use complex::Complex;
pub use convolution::{convolve, correlate};
pub use fft::fft_radix2;
pub use filter::{Biquad, FirFilter};
pub use window::{blackman, hamming, hann};
