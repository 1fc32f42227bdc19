//! Fixed-width scalars
//!
//! The native bit pattern is copied verbatim in both directions; the declared byte length is
//! ignored.

use crate::codec::{Codec, CodecKind, datum_mismatch};
use docbridge_diagnostics::{DocError, Result};
use docbridge_types::{Datum, StorageBytes};

pub(crate) fn to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    let bytes = match (codec.kind, datum) {
        (CodecKind::Bool, Datum::Bool(value)) => StorageBytes::inline(&[u8::from(*value)]),
        (CodecKind::Char, Datum::Char(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::GinNull, Datum::UInt8(value)) => StorageBytes::inline(&[*value]),
        (CodecKind::Int16, Datum::Int16(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::Int32, Datum::Int32(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::Int64, Datum::Int64(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::UInt32, Datum::UInt32(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::UInt64, Datum::UInt64(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::Float4, Datum::Float4(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        (CodecKind::Float8, Datum::Float8(value)) => StorageBytes::inline(&value.to_ne_bytes()),
        _ => return Err(datum_mismatch(codec, datum)),
    };
    Ok(bytes)
}

pub(crate) fn from_storage(codec: &Codec, data: &[u8]) -> Result<Datum> {
    let datum = match codec.kind {
        CodecKind::Bool => Datum::Bool(read::<1>(codec, data)?[0] != 0),
        CodecKind::Char => Datum::Char(i8::from_ne_bytes(read(codec, data)?)),
        CodecKind::GinNull => Datum::UInt8(u8::from_ne_bytes(read(codec, data)?)),
        CodecKind::Int16 => Datum::Int16(i16::from_ne_bytes(read(codec, data)?)),
        CodecKind::Int32 => Datum::Int32(i32::from_ne_bytes(read(codec, data)?)),
        CodecKind::Int64 => Datum::Int64(i64::from_ne_bytes(read(codec, data)?)),
        CodecKind::UInt32 => Datum::UInt32(u32::from_ne_bytes(read(codec, data)?)),
        CodecKind::UInt64 => Datum::UInt64(u64::from_ne_bytes(read(codec, data)?)),
        CodecKind::Float4 => Datum::Float4(f32::from_ne_bytes(read(codec, data)?)),
        CodecKind::Float8 => Datum::Float8(f64::from_ne_bytes(read(codec, data)?)),
        other => {
            return Err(DocError::internal(format!(
                "{} is not a fixed-width scalar family",
                other
            )));
        }
    };
    Ok(datum)
}

/// Fixed-width bit pattern at the start of `data`
pub(crate) fn read<const N: usize>(codec: &Codec, data: &[u8]) -> Result<[u8; N]> {
    data.get(..N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            DocError::data_corrupted(format!(
                "{} needs {} bytes but storage returned {}",
                codec.type_name,
                N,
                data.len()
            ))
        })
}
