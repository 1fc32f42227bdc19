//! Conversion family bodies
//!
//! `Codec::to_storage` and `Codec::from_storage` dispatch here by `CodecKind`.

pub mod enumeration;
pub mod numeric;
pub mod opaque;
pub mod scalar;
pub mod text;

use docbridge_diagnostics::{DocError, Result};
use docbridge_types::MAX_VARLENA_PAYLOAD;

/// Validate a declared length-prefixed payload size
pub(crate) fn checked_payload_len(declared_len: i64) -> Result<usize> {
    match usize::try_from(declared_len) {
        Ok(len) if len <= MAX_VARLENA_PAYLOAD => Ok(len),
        _ => Err(DocError::right_truncation("Invalid data size")),
    }
}

/// The first `len` bytes of a storage buffer
pub(crate) fn span(data: &[u8], len: usize) -> Result<&[u8]> {
    data.get(..len).ok_or_else(|| {
        DocError::data_corrupted(format!(
            "declared length {} exceeds the {} bytes returned by storage",
            len,
            data.len()
        ))
    })
}
