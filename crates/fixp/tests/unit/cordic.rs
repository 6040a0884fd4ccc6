//! CORDIC engine tests.
//!
//! Exact vectors for Q7.8 and Q15.16, accuracy bounds against `f64`, and the
//! defined edge cases (`sin(0)`, `cos(0)`, `atan2(0, 0)`, `tan` at π/2).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use fixp_core::QFormat;
use rstest::{fixture, rstest};

use crate::common::tolerance::{assert_close, assert_ulps};

#[fixture]
fn q8() -> QFormat<i16> {
    QFormat::new(7, 8).unwrap()
}

#[fixture]
fn q16() -> QFormat<i32> {
    QFormat::new(15, 16).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════════
//  ROTATION / VECTORING KERNELS
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
fn rotation_mode_is_pre_scaled_by_the_gain(q8: QFormat<i16>) {
    // Starting at (K, 0) cancels the gain: rotate(0) ≈ (1, 0).
    assert_eq!(q8.rotate(0), (255, 1));
    // π/4: cos ≈ sin ≈ 0.7071 × 256 = 181.02
    assert_eq!(q8.rotate(201), (178, 182));
}

#[rstest]
fn vectoring_mode_returns_the_angle(q8: QFormat<i16>) {
    assert_eq!(q8.vector(256, 256), 199);
    assert_eq!(q8.vector(256, -256), -203);
    assert_eq!(q8.vector(256, 0), 1);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SIN / COS
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
fn q7_8_reference_points(q8: QFormat<i16>) {
    assert_eq!(q8.sin(0), 0);
    assert_eq!(q8.cos(0), 256);
    assert_eq!(q8.sin(q8.pi()), 0);
    assert_eq!(q8.cos(q8.pi()), -256);
    assert_eq!(q8.sin(-q8.pi()), 0);
    assert_eq!(q8.cos(-q8.pi()), -256);
    assert_eq!(q8.sincos(402), (255, 1));
    assert_eq!(q8.sincos(-402), (-255, 1));
}

//        angle    sin    cos
#[rstest]
#[case(201, 182, 178)]
#[case(603, 182, -178)]
#[case(1000, -176, -184)]
#[case(5000, 160, 199)]
#[case(-5000, -160, 199)]
fn q7_8_vectors(q8: QFormat<i16>, #[case] angle: i16, #[case] sin: i16, #[case] cos: i16) {
    assert_eq!(q8.sin(angle), sin);
    assert_eq!(q8.cos(angle), cos);
    assert_eq!(q8.sincos(angle), (sin, cos));
}

#[rstest]
fn q15_16_reference_points(q16: QFormat<i32>) {
    assert_eq!(q16.sin(q16.pi_over_2()), 65535);
    assert_eq!(q16.cos(q16.pi_over_2()), 2);
    assert_eq!(q16.sin(65536), 55144); // sin(1) = 0.84147
    assert_eq!(q16.cos(65536), 35410); // cos(1) = 0.54030
    assert_eq!(q16.sin(-65536), -55144);
}

#[rstest]
fn sin_and_cos_track_f64_across_one_turn(q8: QFormat<i16>, q16: QFormat<i32>) {
    for step in -32..=32 {
        let radians = PI * f64::from(step) / 32.0;
        let a8 = q8.from_real(radians);
        assert_close(&q8, q8.sin(a8), q8.to_real(a8).sin(), 0.03);
        assert_close(&q8, q8.cos(a8), q8.to_real(a8).cos(), 0.03);
        let a16 = q16.from_real(radians);
        assert_close(&q16, q16.sin(a16), q16.to_real(a16).sin(), 2e-4);
        assert_close(&q16, q16.cos(a16), q16.to_real(a16).cos(), 2e-4);
    }
}

#[rstest]
fn reduction_is_periodic_in_two_pi(q16: QFormat<i32>) {
    let turn = 2 * q16.pi();
    for angle in [0, 12345, -54321, 100_000, -200_000] {
        for turns in [1, 7, -3, 500, -500] {
            let shifted = angle + turns * turn;
            assert_eq!(q16.sincos(shifted), q16.sincos(angle), "{angle} + {turns} turns");
        }
    }
}

#[rstest]
fn extreme_angles_terminate(q16: QFormat<i32>) {
    let (sin, cos) = q16.sincos(i32::MAX);
    assert!(sin.abs() <= 65536 && cos.abs() <= 65536);
    let (sin, cos) = q16.sincos(i32::MIN);
    assert!(sin.abs() <= 65536 && cos.abs() <= 65536);
}

#[test]
fn wide_format_sin_cos() {
    let q = QFormat::<i64>::new(15, 48).unwrap();
    let angle = q.from_real(FRAC_PI_4);
    // Sixteen CORDIC steps bound the precision, not the 48 fractional bits.
    assert_close(&q, q.sin(angle), FRAC_PI_4.sin(), 1e-4);
    assert_close(&q, q.cos(angle), FRAC_PI_4.cos(), 1e-4);
}

// ═════════════════════════════════════════════════════════════════════════════
//  TAN
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
fn tan_values(q8: QFormat<i16>, q16: QFormat<i32>) {
    assert_eq!(q8.tan(0), 0);
    assert_eq!(q8.tan(201), 261);
    assert_eq!(q8.tan(-201), -261);
    assert_eq!(q16.tan(q16.pi_over_4()), 65534);
    assert_eq!(q16.tan(65536), 102059); // tan(1) = 1.5574
}

#[test]
fn tan_saturates_where_cos_is_zero() {
    // Q1.6 rounds cos(1.5625) to exactly zero.
    let q = QFormat::<i8>::new(1, 6).unwrap();
    assert_eq!(q.cos(100), 0);
    assert_eq!(q.tan(100), i8::MAX);
    assert_eq!(q.tan(-100), i8::MAX);
}

// ═════════════════════════════════════════════════════════════════════════════
//  ATAN2 / ATAN
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
fn atan2_origin_is_zero(q8: QFormat<i16>, q16: QFormat<i32>) {
    assert_eq!(q8.atan2(0, 0), 0);
    assert_eq!(q16.atan2(0, 0), 0);
}

#[rstest]
fn atan2_quadrants_q7_8(q8: QFormat<i16>) {
    assert_eq!(q8.atan2(256, 256), 199);
    assert_eq!(q8.atan2(0, -256), 803);
    assert_eq!(q8.atan2(256, 0), 401);
    assert_eq!(q8.atan2(-256, 0), -401);
    assert_eq!(q8.atan2(-256, -256), -605);
}

#[rstest]
fn atan2_quadrants_q15_16(q16: QFormat<i32>) {
    let one = q16.one();
    assert_eq!(q16.atan2(one, one), 51473);
    assert_eq!(q16.atan2(0, -one), 205888);
    assert_eq!(q16.atan2(one, 0), 102945);
    assert_eq!(q16.atan2(-one, -one), -154414);
    assert_eq!(q16.atan2(one, -one), 154414);
    assert_ulps(q16.atan2(one, one), q16.pi_over_4(), 2);
    assert_ulps(q16.atan2(one, 0), q16.pi_over_2(), 2);
    assert_ulps(q16.atan2(0, -one), q16.pi(), 1);
}

#[rstest]
fn atan2_tracks_f64(q16: QFormat<i32>) {
    for y in [-3.0, -1.0, -0.25, 0.0, 0.5, 2.0, 7.5] {
        for x in [-4.0, -1.0, -0.125, 0.25, 1.0, 3.0] {
            let actual = q16.atan2(q16.from_real(y), q16.from_real(x));
            assert_close(&q16, actual, f64::atan2(y, x), 1e-4);
        }
    }
}

#[rstest]
fn atan_is_atan2_over_one(q8: QFormat<i16>, q16: QFormat<i32>) {
    assert_eq!(q8.atan(256), 199);
    assert_eq!(q8.atan(-256), -203);
    assert_eq!(q16.atan(65536), 51473);
    for x in [-5.0, -1.0, -0.5, 0.0, 0.3, 1.0, 10.0] {
        assert_close(&q8, q8.atan(q8.from_real(x)), x.atan(), 0.025);
        assert_close(&q16, q16.atan(q16.from_real(x)), x.atan(), 1e-4);
    }
    assert_close(&q16, q16.atan(q16.max_value()), FRAC_PI_2, 1e-4);
}
