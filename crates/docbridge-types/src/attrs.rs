//! Per-column type attributes

use crate::VARHDRSZ;
use serde::{Deserialize, Serialize};

/// Side-channel facts about a column that conversions may need
///
/// `typmod` follows the catalog convention: `-1` means "no modifier", character types store the
/// declared length plus the varlena header size, and numeric stores
/// `((precision << 16) | scale) + VARHDRSZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeAttrs {
    pub typmod: i32,
}

impl Default for TypeAttrs {
    fn default() -> Self {
        Self::UNMODIFIED
    }
}

impl TypeAttrs {
    /// Attributes of a column with no modifier
    pub const UNMODIFIED: TypeAttrs = TypeAttrs { typmod: -1 };

    pub const fn new(typmod: i32) -> Self {
        Self { typmod }
    }

    /// Attributes for `character(n)` / `character varying(n)`
    ///
    /// Lengths the modifier cannot hold saturate at the largest one it can.
    pub const fn with_char_length(length: u32) -> Self {
        const MAX_LENGTH: u32 = (i32::MAX - VARHDRSZ as i32) as u32;
        let length = if length > MAX_LENGTH { MAX_LENGTH } else { length };
        Self {
            typmod: length as i32 + VARHDRSZ as i32,
        }
    }

    /// Attributes for `numeric(precision, scale)`
    pub const fn with_numeric(precision: u16, scale: u16) -> Self {
        Self {
            typmod: (((precision as i32) << 16) | scale as i32) + VARHDRSZ as i32,
        }
    }

    /// Declared character length, if any
    pub const fn char_length(&self) -> Option<usize> {
        if self.typmod < VARHDRSZ as i32 {
            None
        } else {
            Some((self.typmod - VARHDRSZ as i32) as usize)
        }
    }

    /// Declared numeric precision and scale, if any
    pub const fn numeric_precision_scale(&self) -> Option<(u16, u16)> {
        if self.typmod < VARHDRSZ as i32 {
            return None;
        }
        let packed = self.typmod - VARHDRSZ as i32;
        Some((((packed >> 16) & 0xFFFF) as u16, (packed & 0xFFFF) as u16))
    }
}
