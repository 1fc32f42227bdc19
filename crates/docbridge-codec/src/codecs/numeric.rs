//! Arbitrary-precision decimals, carried across the boundary as canonical text

use super::{checked_payload_len, span};
use crate::codec::{Codec, datum_mismatch};
use docbridge_diagnostics::{DocError, Result};
use docbridge_types::{Datum, StorageBytes, TypeAttrs, numeric_in};

pub(crate) fn to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    let Datum::Numeric(value) = datum else {
        return Err(datum_mismatch(codec, datum));
    };
    // NaN has no decimal form in storage yet.
    let text = value
        .normalized_text()
        .ok_or_else(|| DocError::feature_not_supported("DECIMAL does not support NaN yet"))?;
    Ok(StorageBytes::Owned(text.into_bytes()))
}

pub(crate) fn from_storage(data: &[u8], declared_len: i64, attrs: &TypeAttrs) -> Result<Datum> {
    let bytes = span(data, checked_payload_len(declared_len)?)?;
    let text = std::str::from_utf8(bytes)
        .map_err(|_| DocError::invalid_text("invalid byte sequence for encoding \"UTF8\""))?;
    numeric_in(text, attrs).map(Datum::Numeric)
}
