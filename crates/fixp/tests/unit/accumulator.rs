//! Multiply-accumulate register tests.
//!
//! The accumulator keeps `2n` fractional bits, wraps at the format's
//! accumulator width and rounds once when finished.

use fixp_core::QFormat;
use rstest::{fixture, rstest};

#[fixture]
fn q() -> QFormat<i16> {
    QFormat::new(7, 8).unwrap()
}

#[rstest]
fn empty_accumulator_finishes_at_zero(q: QFormat<i16>) {
    let acc = q.accumulator();
    assert_eq!(acc.raw(), 0);
    assert_eq!(acc.finish(), 0);
}

#[rstest]
fn mac_keeps_full_precision_products(q: QFormat<i16>) {
    let mut acc = q.accumulator();
    acc.mac(256, 256);
    acc.mac(512, 256);
    assert_eq!(acc.raw(), 3 * 65536);
    assert_eq!(acc.finish(), 768);
}

#[rstest]
fn finish_rounds_once(q: QFormat<i16>) {
    // Each product is a quarter ULP: rounding per term gives 0, rounding the sum gives 1.
    let mut acc = q.accumulator();
    for _ in 0..3 {
        acc.mac(1, 64);
    }
    assert_eq!(acc.raw(), 192);
    assert_eq!(acc.finish(), 1);

    let mut acc = q.accumulator();
    acc.mac(1, 128);
    assert_eq!(acc.finish(), 1);
    acc.clear();
    acc.mac(1, 127);
    assert_eq!(acc.finish(), 0);
}

#[rstest]
fn msub_and_add(q: QFormat<i16>) {
    let mut acc = q.accumulator();
    acc.add(256);
    assert_eq!(acc.raw(), 65536);
    acc.msub(512, 128);
    assert_eq!(acc.raw(), 0);
    acc.msub(256, 256);
    assert_eq!(acc.finish(), -256);
}

#[rstest]
fn finish_saturates(q: QFormat<i16>) {
    let mut acc = q.accumulator();
    acc.mac(i16::MAX, 1024);
    assert_eq!(acc.finish(), i16::MAX);
    acc.clear();
    acc.mac(i16::MAX, -1024);
    assert_eq!(acc.finish(), i16::MIN);
}

#[rstest]
fn sum_wraps_at_the_accumulator_width(q: QFormat<i16>) {
    assert_eq!(q.format().accumulator_bits(), 32);
    let mut acc = q.accumulator();
    acc.mac(i16::MIN, i16::MIN);
    assert_eq!(acc.raw(), 1 << 30);
    acc.mac(i16::MIN, i16::MIN);
    assert_eq!(acc.raw(), -(1 << 31));
    assert_eq!(acc.finish(), i16::MIN);
}

#[rstest]
fn clear_resets(q: QFormat<i16>) {
    let mut acc = q.accumulator();
    acc.mac(300, 300);
    acc.clear();
    assert_eq!(acc.raw(), 0);
}

#[rstest]
fn dot_product(q: QFormat<i16>) {
    let a = [256, 512, -128];
    let b = [256, 256, 512];
    // 1 + 2 - 1
    assert_eq!(q.dot(&a, &b), 512);
    // Only the common prefix contributes.
    assert_eq!(q.dot(&a[..2], &b), 768);
    assert_eq!(q.dot(&[], &b), 0);
}

#[test]
fn integer_format_has_no_rounding_bias() {
    let q = QFormat::<i32>::new(31, 0).unwrap();
    let mut acc = q.accumulator();
    acc.mac(3, 4);
    acc.mac(-2, 5);
    assert_eq!(acc.finish(), 2);
}

#[test]
fn sixty_four_bit_format_uses_the_full_register() {
    let q = QFormat::<i64>::new(31, 32).unwrap();
    assert_eq!(q.format().accumulator_bits(), 128);
    let mut acc = q.accumulator();
    let big = q.from_real(1_000_000.0);
    acc.mac(big, big);
    acc.msub(big, big);
    acc.mac(q.one(), q.from_real(0.5));
    assert_eq!(acc.finish(), q.from_real(0.5));
}
