//! Format selector tests.
//!
//! Storage selection at every width boundary, rejection above 64 bits, and
//! binding a format to its storage integer.

use fixp_core::common::FormatError;
use fixp_core::format::{Format, MAX_TOTAL_BITS, StorageWidth};
use fixp_core::{AnyQFormat, QFormat};
use rstest::rstest;

#[rstest]
#[case(0, 0, 1, StorageWidth::W8)]
#[case(0, 7, 8, StorageWidth::W8)]
#[case(3, 4, 8, StorageWidth::W8)]
#[case(8, 0, 9, StorageWidth::W16)]
#[case(7, 8, 16, StorageWidth::W16)]
#[case(0, 16, 17, StorageWidth::W32)]
#[case(15, 16, 32, StorageWidth::W32)]
#[case(16, 16, 33, StorageWidth::W64)]
#[case(63, 0, 64, StorageWidth::W64)]
#[case(0, 63, 64, StorageWidth::W64)]
fn select_picks_smallest_storage(
    #[case] m: u32,
    #[case] n: u32,
    #[case] total_bits: u32,
    #[case] storage: StorageWidth,
) {
    let format = Format::select(m, n).unwrap();
    assert_eq!(format.m(), m);
    assert_eq!(format.n(), n);
    assert_eq!(format.total_bits(), total_bits);
    assert_eq!(format.storage(), storage);
    assert_eq!(format.storage_bits(), storage.bits());
}

#[rstest]
#[case(StorageWidth::W8, 16)]
#[case(StorageWidth::W16, 32)]
#[case(StorageWidth::W32, 64)]
#[case(StorageWidth::W64, 128)]
fn accumulator_is_double_width_capped_at_128(#[case] storage: StorageWidth, #[case] bits: u32) {
    assert_eq!(storage.accumulator_bits(), bits);
}

#[rstest]
#[case(64, 0, 65)]
#[case(0, 64, 65)]
#[case(40, 24, 65)]
#[case(100, 100, 201)]
fn select_rejects_formats_wider_than_64_bits(#[case] m: u32, #[case] n: u32, #[case] total_bits: u32) {
    assert_eq!(
        Format::select(m, n),
        Err(FormatError::FormatTooWide { m, n, total_bits })
    );
}

#[test]
fn select_does_not_overflow_on_huge_requests() {
    let err = Format::select(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, FormatError::FormatTooWide { total_bits: u32::MAX, .. }));
}

#[test]
fn max_total_bits_is_the_boundary() {
    assert!(Format::select(MAX_TOTAL_BITS - 1, 0).is_ok());
    assert!(Format::select(MAX_TOTAL_BITS, 0).is_err());
}

#[test]
fn type_name_and_display() {
    let format = Format::select(7, 8).unwrap();
    assert_eq!(format.type_name(), "q7_8");
    assert_eq!(format.to_string(), "Q7.8");
}

#[test]
fn instantiate_picks_matching_variant() {
    assert!(matches!(Format::select(0, 7).unwrap().instantiate(), AnyQFormat::Q8(_)));
    assert!(matches!(Format::select(7, 8).unwrap().instantiate(), AnyQFormat::Q16(_)));
    assert!(matches!(Format::select(15, 16).unwrap().instantiate(), AnyQFormat::Q32(_)));
    assert!(matches!(Format::select(16, 16).unwrap().instantiate(), AnyQFormat::Q64(_)));
}

#[test]
fn any_format_exposes_format_and_constants() {
    let any = AnyQFormat::new(15, 16).unwrap();
    assert_eq!(any.format(), Format::select(15, 16).unwrap());
    assert_eq!(any.constants().one(), 65536);
    assert!(AnyQFormat::new(64, 1).is_err());
}

#[test]
fn typed_format_requires_matching_storage() {
    assert!(QFormat::<i16>::new(7, 8).is_ok());
    assert_eq!(
        QFormat::<i32>::new(7, 8),
        Err(FormatError::StorageMismatch {
            m: 7,
            n: 8,
            expected: 16,
            actual: 32,
        })
    );
    assert!(matches!(
        QFormat::<i8>::new(64, 0),
        Err(FormatError::FormatTooWide { .. })
    ));
}

#[test]
fn typed_format_from_selected_format() {
    let format = Format::select(23, 8).unwrap();
    let q = QFormat::<i32>::from_format(format).unwrap();
    assert_eq!(q.format(), format);
    assert_eq!(q.frac_bits(), 8);
}
