//! Native value tests
//!
//! Covers the by-reference payload types:
//! - Identifier clipping and zero padding
//! - Varlena header construction
//! - Character input parsers against declared widths

use docbridge_types::input::{bpchar_in, varchar_in};
use docbridge_types::*;
use proptest::prelude::*;

// === Names ===

proptest! {
    #[test]
    fn name_never_splits_characters(input in "\\PC{0,80}") {
        let name = NameData::from_bytes_clipped(input.as_bytes());
        let kept = name.as_bytes();
        prop_assert!(kept.len() <= MAX_IDENTIFIER_LEN);
        prop_assert!(std::str::from_utf8(kept).is_ok());
        prop_assert!(input.as_bytes().starts_with(kept));
        prop_assert!(name.raw()[kept.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn varlena_header_matches_payload(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let value = Varlena::from_payload(&payload).unwrap();
        prop_assert_eq!(varsize_from_header(value.image()), Some(payload.len() + VARHDRSZ));
        prop_assert_eq!(value.payload(), payload.as_slice());
    }

    #[test]
    fn bpchar_in_always_fills_declared_width(input in "[a-z]{0,8}", width in 8u32..16) {
        let value = bpchar_in(&input, &TypeAttrs::with_char_length(width)).unwrap();
        let text = value.as_str().unwrap();
        prop_assert_eq!(text.chars().count(), width as usize);
        prop_assert_eq!(text.trim_end_matches(' '), input.as_str());
    }
}

// === Character widths ===

#[test]
fn test_varchar_accepts_exact_width() {
    let value = varchar_in("abcd", &TypeAttrs::with_char_length(4)).unwrap();
    assert_eq!(value.as_str(), Some("abcd"));
}

#[test]
fn test_varchar_rejects_non_space_overflow() {
    let err = varchar_in("abcd x", &TypeAttrs::with_char_length(4)).unwrap_err();
    assert_eq!(err.code(), docbridge_diagnostics::STRING_DATA_RIGHT_TRUNCATION);
}

// === System columns ===

#[test]
fn test_every_system_column_has_a_builtin_type() {
    for column in SystemColumn::ALL {
        assert!(column.type_oid().builtin_name().is_some(), "{}", column);
    }
}
