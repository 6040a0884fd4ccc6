//! FIR and biquad filters.
//!
//! Both filters own a copy of their [`QFormat`] and their state, so a filter
//! can be moved into whatever thread feeds it samples.

use crate::common::{DspError, Storage};
use crate::format::QFormat;

/// Direct-form FIR filter, `y[n] = Σ b[k]·x[n-k]`.
///
/// The delay line is a ring buffer of `taps` samples, initially zero.
#[derive(Debug, Clone)]
pub struct FirFilter<S: Storage> {
    format: QFormat<S>,
    coefficients: Vec<S>,
    delay: Vec<S>,
    head: usize,
}

impl<S: Storage> FirFilter<S> {
    /// Creates a filter with the given taps `b[0..]`.
    ///
    /// # Returns
    ///
    /// [`DspError::EmptyInput`] when `coefficients` is empty.
    pub fn new(format: &QFormat<S>, coefficients: Vec<S>) -> Result<Self, DspError> {
        if coefficients.is_empty() {
            return Err(DspError::EmptyInput);
        }
        let taps = coefficients.len();
        Ok(Self {
            format: format.clone(),
            coefficients,
            delay: vec![S::ZERO; taps],
            head: 0,
        })
    }

    /// Number of taps.
    pub fn taps(&self) -> usize {
        self.coefficients.len()
    }

    /// Filter coefficients, `b[0]` first.
    pub fn coefficients(&self) -> &[S] {
        &self.coefficients
    }

    /// Pushes one sample and returns the filtered output.
    pub fn process(&mut self, input: S) -> S {
        let taps = self.taps();
        self.head = (self.head + taps - 1) % taps;
        self.delay[self.head] = input;

        let mut acc = self.format.accumulator();
        for (k, &coefficient) in self.coefficients.iter().enumerate() {
            acc.mac(coefficient, self.delay[(self.head + k) % taps]);
        }
        acc.finish()
    }

    /// Filters `input` into `output` sample by sample.
    ///
    /// # Returns
    ///
    /// [`DspError::LengthMismatch`] when the slices differ in length; the
    /// filter state is untouched in that case.
    pub fn process_block(&mut self, input: &[S], output: &mut [S]) -> Result<(), DspError> {
        if input.len() != output.len() {
            return Err(DspError::LengthMismatch {
                expected: input.len(),
                actual: output.len(),
            });
        }
        for (out, &sample) in output.iter_mut().zip(input) {
            *out = self.process(sample);
        }
        Ok(())
    }

    /// Clears the delay line.
    pub fn reset(&mut self) {
        self.delay.fill(S::ZERO);
        self.head = 0;
    }
}

/// Second-order IIR section, direct form I.
///
/// `H(z) = (b0 + b1·z⁻¹ + b2·z⁻²) / (1 + a1·z⁻¹ + a2·z⁻²)`. A new biquad
/// passes its input through unchanged (`b0 = ONE`, all others zero).
#[derive(Debug, Clone)]
pub struct Biquad<S: Storage> {
    format: QFormat<S>,
    b: [S; 3],
    a: [S; 2],
    x: [S; 2],
    y: [S; 2],
}

impl<S: Storage> Biquad<S> {
    /// Creates a pass-through section.
    pub fn new(format: &QFormat<S>) -> Self {
        Self {
            format: format.clone(),
            b: [format.one(), S::ZERO, S::ZERO],
            a: [S::ZERO; 2],
            x: [S::ZERO; 2],
            y: [S::ZERO; 2],
        }
    }

    /// Replaces the coefficients; the history is kept.
    pub fn set_coefficients(&mut self, b0: S, b1: S, b2: S, a1: S, a2: S) {
        self.b = [b0, b1, b2];
        self.a = [a1, a2];
    }

    /// Clears the input and output history.
    pub fn reset(&mut self) {
        self.x = [S::ZERO; 2];
        self.y = [S::ZERO; 2];
    }

    /// `y[n] = b0·x[n] + b1·x[n-1] + b2·x[n-2] - a1·y[n-1] - a2·y[n-2]`.
    pub fn process(&mut self, input: S) -> S {
        let mut acc = self.format.accumulator();
        acc.mac(self.b[0], input);
        acc.mac(self.b[1], self.x[0]);
        acc.mac(self.b[2], self.x[1]);
        acc.msub(self.a[0], self.y[0]);
        acc.msub(self.a[1], self.y[1]);
        let output = acc.finish();

        self.x = [input, self.x[0]];
        self.y = [output, self.y[0]];
        output
    }
}
