//! Randomised invariants.
//!
//! Q15.16 (32-bit) is the main subject; Q7.8 covers the narrow storage path.

use fixp_core::QFormat;
use proptest::prelude::*;

fn q16() -> QFormat<i32> {
    QFormat::new(15, 16).unwrap()
}

fn q8() -> QFormat<i16> {
    QFormat::new(7, 8).unwrap()
}

/// Q15.16 raw angles in `[-π, π]`.
fn angle() -> impl Strategy<Value = i32> {
    -205_887..=205_887i32
}

// Real conversion round-trips to within half an ULP.
proptest! {
    #[test]
    fn prop_real_round_trip(value in -32767.0f64..32767.0) {
        let q = q16();
        let back = q.to_real(q.from_real(value));
        prop_assert!((back - value).abs() <= 0.5 / 65536.0, "{} -> {}", value, back);
    }
}

// Addition wraps modulo the storage width and commutes.
proptest! {
    #[test]
    fn prop_add_wraps(a in any::<i32>(), b in any::<i32>()) {
        let q = q16();
        prop_assert_eq!(q.add(a, b), a.wrapping_add(b));
        prop_assert_eq!(q.add(a, b), q.add(b, a));
        prop_assert_eq!(q.sub(q.add(a, b), b), a);
    }
}

// Saturating arithmetic never leaves [MIN, MAX] and agrees with the
// wrapping form whenever the exact result fits.
proptest! {
    #[test]
    fn prop_saturating_matches_exact(a in any::<i16>(), b in any::<i16>()) {
        let q = q8();
        let exact = i32::from(a) + i32::from(b);
        let clamped = exact.clamp(i32::from(i16::MIN), i32::from(i16::MAX));
        prop_assert_eq!(i32::from(q.add_sat(a, b)), clamped);
        if clamped == exact {
            prop_assert_eq!(q.add(a, b), q.add_sat(a, b));
        }
    }
}

// Division by zero is MAX for non-negative dividends and MIN otherwise.
proptest! {
    #[test]
    fn prop_div_by_zero_saturates(x in any::<i32>()) {
        let q = q16();
        let expected = if x >= 0 { i32::MAX } else { i32::MIN };
        prop_assert_eq!(q.div(x, 0), expected);
    }
}

// ONE is the multiplicative identity, and dividing by it changes nothing.
proptest! {
    #[test]
    fn prop_mul_identity(x in any::<i32>()) {
        let q = q16();
        prop_assert_eq!(q.mul(x, q.one()), x);
        prop_assert_eq!(q.mul(q.one(), x), x);
        prop_assert_eq!(q.div(x, q.one()), x);
    }
}

// sin² + cos² stays within a few ULPs of ONE across [-π, π].
proptest! {
    #[test]
    fn prop_trig_identity(a in angle(), b in -804..=804i16) {
        let q = q16();
        let (sin, cos) = q.sincos(a);
        let sum = q.add(q.mul(sin, sin), q.mul(cos, cos));
        prop_assert!((sum - q.one()).abs() <= 16, "angle {}: {}", a, sum);

        let q = q8();
        let (sin, cos) = q.sincos(b);
        let sum = q.add(q.mul(sin, sin), q.mul(cos, cos));
        prop_assert!((sum - q.one()).abs() <= 6, "angle {}: {}", b, sum);
    }
}

// Whole turns never change sin or cos.
proptest! {
    #[test]
    fn prop_sincos_periodic(a in angle(), turns in -1000i32..1000) {
        let q = q16();
        let shifted = a + turns * q.two_pi();
        prop_assert_eq!(q.sincos(shifted), q.sincos(a));
    }
}

// sqrt(x)² is within the error carried by a ±1 root.
proptest! {
    #[test]
    fn prop_sqrt_squares_back(x in 1..=i32::MAX) {
        let q = q16();
        let root = q.sqrt(x);
        prop_assert!(root > 0);
        let error = (i64::from(q.mul(root, root)) - i64::from(x)).abs();
        let bound = (2 * i64::from(root) >> 16) + 2;
        prop_assert!(error <= bound, "sqrt({}) = {}, error {}", x, root, error);
    }

    #[test]
    fn prop_sqrt_of_non_positive_is_zero(x in i32::MIN..=0) {
        prop_assert_eq!(q16().sqrt(x), 0);
    }
}

// exp2 inverts log2 to within the linear mantissa approximation.
proptest! {
    #[test]
    fn prop_exp2_log2_round_trip(x in 4096..=i32::MAX) {
        let q = q16();
        let ratio = f64::from(q.exp2(q.log2(x))) / f64::from(x);
        prop_assert!((0.99..=1.36).contains(&ratio), "x {}: ratio {}", x, ratio);
    }
}

// Every rounding function is idempotent and brackets its input.
proptest! {
    #[test]
    fn prop_rounding_idempotent(x in any::<i32>()) {
        let q = q16();
        let functions: [fn(&QFormat<i32>, i32) -> i32; 4] =
            [QFormat::floor, QFormat::ceil, QFormat::round, QFormat::trunc];
        for f in functions {
            let once = f(&q, x);
            prop_assert_eq!(f(&q, once), once);
        }
    }

    #[test]
    fn prop_floor_le_x_le_ceil(x in -(1i32 << 30)..(1i32 << 30)) {
        let q = q16();
        prop_assert!(q.floor(x) <= x && x <= q.ceil(x));
        prop_assert!(q.ceil(x) - q.floor(x) <= q.one());
        prop_assert_eq!(q.add(q.trunc(x), q.frac(x)), x);
    }
}
