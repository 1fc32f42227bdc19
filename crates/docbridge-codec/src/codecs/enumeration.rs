//! Enumeration values
//!
//! An enumeration member is stored as an 8-byte value: the member identifier in the low 32 bits
//! and the bit pattern of its floating-point sort rank in the high 32 bits, so that storage
//! orders members by rank rather than by identifier.

use super::scalar::read;
use crate::codec::{Codec, ConvertContext, datum_mismatch};
use docbridge_diagnostics::{DocError, Result};
use docbridge_types::{Datum, StorageBytes};

const MEMBER_MASK: u64 = 0xFFFF_FFFF;

/// Pack a member identifier with its sort rank
pub const fn pack(member: u32, sort_order: f32) -> i64 {
    (((sort_order.to_bits() as u64) << 32) | member as u64) as i64
}

/// The member identifier held in the low 32 bits
pub const fn member_of(packed: i64) -> u32 {
    (packed as u64 & MEMBER_MASK) as u32
}

/// The sort rank bits held in the high 32 bits
pub const fn sort_bits_of(packed: i64) -> u32 {
    (packed as u64 >> 32) as u32
}

pub(crate) fn to_storage<'d>(
    codec: &Codec,
    datum: &'d Datum,
    ctx: &ConvertContext<'_>,
) -> Result<StorageBytes<'d>> {
    let raw = match datum {
        Datum::UInt32(member) => i64::from(*member),
        Datum::Int64(value) => *value,
        other => return Err(datum_mismatch(codec, other)),
    };

    if ctx.options.skip_enum_sort_order {
        log::trace!("enum: storing {:#x} without sort order", raw);
        return Ok(StorageBytes::inline(&raw.to_ne_bytes()));
    }

    // Whatever the high half held before is replaced by the current rank.
    let member = member_of(raw);
    let catalog = ctx
        .catalog
        .ok_or_else(|| DocError::internal("enum conversion requires a type catalog"))?;
    let sort_order = catalog.enum_sort_order(member)?;
    Ok(StorageBytes::inline(&pack(member, sort_order).to_ne_bytes()))
}

pub(crate) fn from_storage(codec: &Codec, data: &[u8]) -> Result<Datum> {
    let packed = i64::from_ne_bytes(read(codec, data)?);
    Ok(Datum::UInt32(member_of(packed)))
}
