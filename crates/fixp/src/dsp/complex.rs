//! Complex values.

use crate::common::Storage;
use crate::format::QFormat;

/// A complex number with real and imaginary parts in the same format.
///
/// Arithmetic takes the [`QFormat`] the parts are encoded in and follows its
/// wrapping policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Complex<S: Storage> {
    /// Real part.
    pub re: S,
    /// Imaginary part.
    pub im: S,
}

impl<S: Storage> Complex<S> {
    /// Builds `re + im·i`.
    pub const fn new(re: S, im: S) -> Self {
        Self { re, im }
    }

    /// Builds a purely real value.
    pub const fn from_re(re: S) -> Self {
        Self { re, im: S::ZERO }
    }

    /// Component-wise wrapping sum.
    pub fn add(self, other: Self, q: &QFormat<S>) -> Self {
        Self::new(q.add(self.re, other.re), q.add(self.im, other.im))
    }

    /// Component-wise wrapping difference.
    pub fn sub(self, other: Self, q: &QFormat<S>) -> Self {
        Self::new(q.sub(self.re, other.re), q.sub(self.im, other.im))
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`, each part rounded once.
    pub fn mul(self, other: Self, q: &QFormat<S>) -> Self {
        let (re, im) = q.complex_mul_wide(
            (self.re.to_wide(), self.im.to_wide()),
            (other.re.to_wide(), other.im.to_wide()),
        );
        Self::new(S::wrap(re), S::wrap(im))
    }

    /// Complex conjugate, `re - im·i`.
    pub fn conj(self, q: &QFormat<S>) -> Self {
        Self::new(self.re, q.neg(self.im))
    }

    /// `re² + im²`, wrapping.
    pub fn magnitude_squared(self, q: &QFormat<S>) -> S {
        q.add(q.mul(self.re, self.re), q.mul(self.im, self.im))
    }

    /// `sqrt(re² + im²)`.
    pub fn magnitude(self, q: &QFormat<S>) -> S {
        q.sqrt(self.magnitude_squared(q))
    }
}

impl<S: Storage> QFormat<S> {
    /// Complex product at the working width, `(ac - bd, ad + bc)` with one rounding per part.
    ///
    /// The sums may pass `i128::MAX` for 64-bit storage; bits `n..n + 64`
    /// survive the wrap, which is all the narrowing keeps.
    pub(crate) fn complex_mul_wide(&self, a: (i128, i128), b: (i128, i128)) -> (i128, i128) {
        let half = self.constants().half();
        let n = self.frac_bits();
        let re = (a.0 * b.0).wrapping_sub(a.1 * b.1).wrapping_add(half);
        let im = (a.0 * b.1).wrapping_add(a.1 * b.0).wrapping_add(half);
        (re >> n, im >> n)
    }
}
