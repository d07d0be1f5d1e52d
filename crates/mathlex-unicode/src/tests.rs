use expect_test::expect;

use crate::{InvalidCodePoint, LowRange, RangeCompressor, SurrogateGroup, SurrogatePair};
use crate::{format_pair, format_unit};

fn compress(scalars: &[u32]) -> String {
    let mut ranges = RangeCompressor::new();
    for &scalar in scalars {
        ranges.add(scalar).unwrap();
    }
    ranges.serialize()
}

#[test]
fn test_encode_bmp_boundaries() {
    for scalar in [0x0000u32, 0x0041, 0xD7FF, 0xE000, 0xFFFF] {
        let pair = SurrogatePair::encode(scalar).unwrap();
        assert_eq!(pair, SurrogatePair { high: 0, low: scalar as u16 });
        assert!(pair.is_bmp());
    }
}

#[test]
fn test_encode_supplementary_boundaries() {
    assert_eq!(
        SurrogatePair::encode(0x10000).unwrap(),
        SurrogatePair { high: 0xD800, low: 0xDC00 }
    );
    assert_eq!(
        SurrogatePair::encode(0x1D400).unwrap(),
        SurrogatePair { high: 0xD835, low: 0xDC00 }
    );
    assert_eq!(
        SurrogatePair::encode(0x10FFFF).unwrap(),
        SurrogatePair { high: 0xDBFF, low: 0xDFFF }
    );
}

#[test]
fn test_encode_rejects_invalid_scalars() {
    for value in [0xD800i64, 0xDBFF, 0xDC00, 0xDFFF, 0x110000, -1, i64::MAX] {
        assert_eq!(SurrogatePair::encode(value), Err(InvalidCodePoint(value)));
    }
}

#[test]
fn test_invalid_code_point_message() {
    assert_eq!(
        InvalidCodePoint(0x110000).to_string(),
        "invalid code point U+110000"
    );
    assert_eq!(InvalidCodePoint(0xD800).to_string(), "invalid code point U+D800");
    assert_eq!(InvalidCodePoint(-1).to_string(), "invalid code point -1");
}

#[test]
fn test_format_unit() {
    assert_eq!(format_unit(0x41), "\\u0041");
    assert_eq!(format_unit(0xabc), "\\u0ABC");
    assert_eq!(format_unit(0xDBFF), "\\uDBFF");
}

#[test]
fn test_format_pair_omits_zero_high() {
    let bmp = SurrogatePair::encode(0x221E).unwrap();
    assert_eq!(format_pair(&bmp), "\\u221E");

    let astral = SurrogatePair::encode(0x1D7CE).unwrap();
    assert_eq!(format_pair(&astral), "\\uD835\\uDFCE");
    assert_eq!(astral.to_string(), format_pair(&astral));
}

#[test]
fn test_from_char() {
    assert_eq!(SurrogatePair::from('A'), SurrogatePair { high: 0, low: 0x41 });
    assert_eq!(
        SurrogatePair::from('\u{1D400}'),
        SurrogatePair { high: 0xD835, low: 0xDC00 }
    );
}

#[test]
fn test_serialize_empty() {
    assert_eq!(RangeCompressor::new().serialize(), "");
    assert!(RangeCompressor::new().is_empty());
}

#[test]
fn test_serialize_single_unit_drops_brackets() {
    expect![[r#"\u0041"#]].assert_eq(&compress(&[0x41]));
    expect![[r#"\uD835\uDC00"#]].assert_eq(&compress(&[0x1D400]));
}

#[test]
fn test_serialize_contiguous_run() {
    expect![[r#"[\u0041-\u0043]"#]].assert_eq(&compress(&[0x41, 0x42, 0x43]));
}

#[test]
fn test_serialize_non_contiguous() {
    expect![[r#"[\u0041\u0043]"#]].assert_eq(&compress(&[0x41, 0x43]));
}

#[test]
fn test_serialize_width_two_lists_both_units() {
    expect![[r#"\uD800[\uDC00\uDC01]"#]].assert_eq(&compress(&[0x10000, 0x10001]));
    expect![[r#"[\u0061\u0062]"#]].assert_eq(&compress(&[0x61, 0x62]));
}

#[test]
fn test_serialize_width_three_uses_hyphen() {
    expect![[r#"\uD800[\uDC00-\uDC02]"#]].assert_eq(&compress(&[0x10000, 0x10001, 0x10002]));
}

/// Out-of-order input is not reordered into one run. This is intentional
/// non-optimal compression: output order follows input order.
#[test]
fn test_out_of_order_input_is_not_merged() {
    expect![[r#"[\u0045\u0043\u0044]"#]].assert_eq(&compress(&[0x45, 0x43, 0x44]));

    let mut ranges = RangeCompressor::new();
    for scalar in [0x45, 0x43, 0x44] {
        ranges.add(scalar).unwrap();
    }
    assert_eq!(
        ranges.close(),
        &[SurrogateGroup {
            high: 0,
            ranges: vec![
                LowRange { start: 0x45, end: 0x45 },
                LowRange { start: 0x43, end: 0x44 },
            ],
        }]
    );
}

#[test]
fn test_duplicates_are_kept() {
    expect![[r#"[\u0041\u0041]"#]].assert_eq(&compress(&[0x41, 0x41]));
}

#[test]
fn test_groups_keep_first_seen_order() {
    expect![[r#"\uD835\uDC00|[\u0041\u0042]"#]].assert_eq(&compress(&[0x1D400, 0x41, 0x42]));
    expect![[r#"[\u0041\u0042]|\uD835\uDC00"#]].assert_eq(&compress(&[0x41, 0x1D400, 0x42]));
}

#[test]
fn test_runs_do_not_cross_high_surrogates() {
    expect![[r#"\uD800\uDFFF|\uD801\uDC00"#]].assert_eq(&compress(&[0x103FF, 0x10400]));
    expect![[r#"\uFFFF|\uD800\uDC00"#]].assert_eq(&compress(&[0xFFFF, 0x10000]));
}

#[test]
fn test_mixed_groups() {
    let scalars = [
        0x41, 0x42, 0x43, 0x45, 0x61, 0x3B1, 0x3B2, 0x1D400, 0x1D401, 0x1D402, 0x1D404, 0x10000,
    ];
    expect![[r#"[\u0041-\u0043\u0045\u0061\u03B1\u03B2]|\uD835[\uDC00-\uDC02\uDC04]|\uD800\uDC00"#]]
        .assert_eq(&compress(&scalars));
}

#[test]
fn test_serialize_is_idempotent() {
    let mut ranges = RangeCompressor::new();
    for scalar in [0x41, 0x42, 0x43, 0x1D400] {
        ranges.add(scalar).unwrap();
    }
    let first = ranges.serialize();
    let second = ranges.serialize();
    assert_eq!(first, second);
}

#[test]
fn test_add_after_serialize_starts_new_interval() {
    let mut ranges = RangeCompressor::new();
    ranges.add(0x41).unwrap();
    assert_eq!(ranges.serialize(), "\\u0041");

    ranges.add(0x42).unwrap();
    assert_eq!(ranges.serialize(), "[\\u0041\\u0042]");
}

#[test]
fn test_failed_add_leaves_state_untouched() {
    let mut ranges = RangeCompressor::new();
    ranges.add(0x41).unwrap();
    let before = ranges.clone();

    assert_eq!(ranges.add(0xD800), Err(InvalidCodePoint(0xD800)));
    assert_eq!(ranges.add(-1), Err(InvalidCodePoint(-1)));
    assert_eq!(ranges, before);

    // The open interval is still extendable.
    ranges.add(0x42).unwrap();
    ranges.add(0x43).unwrap();
    assert_eq!(ranges.serialize(), "[\\u0041-\\u0043]");
}

#[test]
fn test_failed_first_add_keeps_compressor_empty() {
    let mut ranges = RangeCompressor::new();
    assert!(ranges.add(0x110000).is_err());
    assert!(ranges.is_empty());
    assert_eq!(ranges.serialize(), "");
}

#[test]
fn test_low_range_width() {
    assert_eq!(LowRange { start: 0x41, end: 0x41 }.width(), 1);
    assert_eq!(LowRange { start: 0xDC00, end: 0xDFFF }.width(), 0x400);
}
