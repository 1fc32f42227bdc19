//! Length-prefixed strings and binaries, blank-padded characters, names and C strings

use super::{checked_payload_len, span};
use crate::codec::{Codec, datum_mismatch};
use docbridge_diagnostics::{DocError, Result};
use docbridge_types::input::{bpchar_in, cstring_in, varchar_in};
use docbridge_types::{Datum, NameData, StorageBytes, TypeAttrs};

/// Whitespace as the C locale classifies it
const fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Length of `data` once trailing whitespace is removed
pub fn trimmed_len(data: &[u8]) -> usize {
    data.iter()
        .rposition(|&b| !is_c_space(b))
        .map_or(0, |last| last + 1)
}

fn checked_span(data: &[u8], declared_len: i64) -> Result<&[u8]> {
    span(data, checked_payload_len(declared_len)?)
}

fn checked_str(data: &[u8], declared_len: i64) -> Result<&str> {
    let bytes = checked_span(data, declared_len)?;
    std::str::from_utf8(bytes)
        .map_err(|_| DocError::invalid_text("invalid byte sequence for encoding \"UTF8\""))
}

pub(crate) fn varlena_to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    match datum {
        Datum::Varlena(value) => Ok(StorageBytes::Borrowed(value.payload())),
        other => Err(datum_mismatch(codec, other)),
    }
}

pub(crate) fn bpchar_to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    match datum {
        Datum::Varlena(value) => {
            let payload = value.payload();
            Ok(StorageBytes::Borrowed(&payload[..trimmed_len(payload)]))
        }
        other => Err(datum_mismatch(codec, other)),
    }
}

pub(crate) fn name_to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    match datum {
        Datum::Name(name) => Ok(StorageBytes::Borrowed(name.as_bytes())),
        other => Err(datum_mismatch(codec, other)),
    }
}

pub(crate) fn cstring_to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    match datum {
        Datum::CString(value) => {
            let bytes = value.as_bytes();
            let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
            Ok(StorageBytes::Borrowed(&bytes[..end]))
        }
        other => Err(datum_mismatch(codec, other)),
    }
}

pub(crate) fn varlena_from_storage(data: &[u8], declared_len: i64) -> Result<Datum> {
    Datum::bytes(checked_span(data, declared_len)?)
}

pub(crate) fn bpchar_from_storage(data: &[u8], declared_len: i64, attrs: &TypeAttrs) -> Result<Datum> {
    bpchar_in(checked_str(data, declared_len)?, attrs).map(Datum::Varlena)
}

pub(crate) fn varchar_from_storage(data: &[u8], declared_len: i64, attrs: &TypeAttrs) -> Result<Datum> {
    varchar_in(checked_str(data, declared_len)?, attrs).map(Datum::Varlena)
}

pub(crate) fn name_from_storage(data: &[u8], declared_len: i64) -> Result<Datum> {
    let bytes = checked_span(data, declared_len)?;
    Ok(Datum::Name(NameData::from_bytes_clipped(bytes)))
}

pub(crate) fn cstring_from_storage(data: &[u8], declared_len: i64) -> Result<Datum> {
    cstring_in(checked_span(data, declared_len)?).map(Datum::CString)
}
