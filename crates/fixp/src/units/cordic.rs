//! CORDIC engine.
//!
//! Shift-and-add rotations driven by the format's arctangent table. Both
//! modes run exactly [`ConstantTable::iterations`] steps:
//! 1. **Rotation:** Starts at `(K, 0)` and rotates by the input angle, so the
//!    gain `K` cancels and `(x, y) ≈ (cos θ, sin θ)` in the format's units.
//! 2. **Vectoring:** Rotates `(x, y)` onto the positive x axis, accumulating
//!    the angle turned; the result approximates `atan2(y, x)` for `x > 0`.
//!
//! The trigonometric functions reduce their argument into `[-π, π]` with a
//! single division, then fold it into `[0, π/2]` where rotation converges.
//!
//! [`ConstantTable::iterations`]: crate::format::ConstantTable::iterations

use crate::common::Storage;
use crate::format::QFormat;

impl<S: Storage> QFormat<S> {
    /// Rotation mode: returns `(x, y) ≈ (cos(angle), sin(angle))`.
    ///
    /// Converges for `|angle|` up to about 1.74 rad (the sum of the table).
    pub fn rotate(&self, angle: S) -> (S, S) {
        let (x, y) = self.rotate_wide(angle.to_wide());
        (S::wrap(x), S::wrap(y))
    }

    pub(crate) fn rotate_wide(&self, angle: i128) -> (i128, i128) {
        let table = self.constants();
        let (mut x, mut y, mut z) = (table.cordic_gain(), 0i128, angle);
        for (i, &step) in table.atan_table().iter().enumerate() {
            let (dx, dy) = (y >> i, x >> i);
            if z >= 0 {
                x -= dx;
                y += dy;
                z -= step;
            } else {
                x += dx;
                y -= dy;
                z += step;
            }
        }
        (x, y)
    }

    /// Vectoring mode: returns the angle of `(x, y)`, valid for `x > 0`.
    pub fn vector(&self, x: S, y: S) -> S {
        S::wrap(self.vector_wide(x.to_wide(), y.to_wide()))
    }

    pub(crate) fn vector_wide(&self, mut x: i128, mut y: i128) -> i128 {
        let mut z = 0i128;
        for (i, &step) in self.constants().atan_table().iter().enumerate() {
            let (dx, dy) = (y >> i, x >> i);
            if y < 0 {
                x -= dx;
                y += dy;
                z -= step;
            } else {
                x += dx;
                y -= dy;
                z += step;
            }
        }
        z
    }

    /// Reduces an angle into `[-π, π]` by whole turns of `2 * PI`.
    ///
    /// Lands on the same value as repeatedly adding or subtracting `2 * PI`,
    /// in constant time.
    fn reduce_angle(&self, angle: i128) -> i128 {
        let pi = self.constants().pi();
        let turn = 2 * pi;
        if angle > pi {
            let turns = (angle - pi + turn - 1) / turn;
            angle - turns * turn
        } else if angle < -pi {
            let turns = (-pi - angle + turn - 1) / turn;
            angle + turns * turn
        } else {
            angle
        }
    }

    pub(crate) fn sincos_wide(&self, angle: i128) -> (i128, i128) {
        let pi = self.constants().pi();
        let reduced = self.reduce_angle(angle);
        let negative = reduced < 0;
        let mut magnitude = reduced.abs();

        // Second quadrant: sin(π - a) = sin(a), cos(π - a) = -cos(a).
        let reflected = magnitude > pi >> 1;
        if reflected {
            magnitude = pi - magnitude;
        }

        let (x, y) = if magnitude == 0 {
            (self.constants().one(), 0)
        } else {
            self.rotate_wide(magnitude)
        };
        (
            if negative { -y } else { y },
            if reflected { -x } else { x },
        )
    }

    /// Sine and cosine of `angle` (radians) from one reduction.
    pub fn sincos(&self, angle: S) -> (S, S) {
        let (sin, cos) = self.sincos_wide(angle.to_wide());
        (S::wrap(sin), S::wrap(cos))
    }

    /// Sine of `angle` (radians).
    pub fn sin(&self, angle: S) -> S {
        self.sincos(angle).0
    }

    /// Cosine of `angle` (radians).
    pub fn cos(&self, angle: S) -> S {
        self.sincos(angle).1
    }

    /// Tangent of `angle` (radians); `MAX` where the cosine is zero.
    pub fn tan(&self, angle: S) -> S {
        let (sin, cos) = self.sincos(angle);
        if cos == S::ZERO {
            return S::MAX;
        }
        S::wrap(self.div_wide(sin.to_wide(), cos.to_wide()))
    }

    /// Four-quadrant arctangent of `y / x`, in `[-π, π]`.
    ///
    /// `atan2(0, 0)` is exactly 0.
    pub fn atan2(&self, y: S, x: S) -> S {
        S::wrap(self.atan2_wide(y.to_wide(), x.to_wide()))
    }

    fn atan2_wide(&self, y: i128, x: i128) -> i128 {
        if x == 0 && y == 0 {
            return 0;
        }
        if x >= 0 {
            return self.vector_wide(x, y);
        }
        // Vector the mirror image in the first quadrant, then reflect.
        let pi = self.constants().pi();
        let angle = self.vector_wide(-x, y.abs());
        if y >= 0 { pi - angle } else { angle - pi }
    }

    /// Arctangent of `x`, `atan2(x, ONE)`.
    pub fn atan(&self, x: S) -> S {
        S::wrap(self.atan2_wide(x.to_wide(), self.constants().one()))
    }
}
