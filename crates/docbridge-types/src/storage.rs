//! Storage-side shapes
//!
//! The storage engine understands a much smaller type system than the relational layer. Every
//! relational type maps onto one `StorageTag`, and every converted value crosses the boundary
//! as a run of bytes (`StorageBytes`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Physical representation understood by the storage engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTag {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float,
    Double,
    /// Arbitrary-precision decimal carried as canonical text
    Decimal,
    /// Length-prefixed string
    String,
    /// Opaque binary
    Binary,
    /// Null-category marker used by inverted-index entries
    GinNull,
    /// Deprecated or legacy type; never converted
    NotSupported,
}

impl StorageTag {
    /// Name used in listings
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Binary => "binary",
            Self::GinNull => "gin_null",
            Self::NotSupported => "not_supported",
        }
    }

    /// Width in bytes of the fixed scalar tags
    pub const fn scalar_width(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::Int8 | Self::GinNull => Some(1),
            Self::Int16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float => Some(4),
            Self::Int64 | Self::UInt64 | Self::Double => Some(8),
            Self::Decimal | Self::String | Self::Binary | Self::NotSupported => None,
        }
    }
}

impl fmt::Display for StorageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width of a native value, mirroring the catalog's type length convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatumWidth {
    /// Fixed number of bytes
    Fixed(usize),
    /// Variable length with an explicit size
    VarLen,
    /// Null-terminated
    NullTerminated,
}

impl DatumWidth {
    /// Sentinel type length for variable-length values
    pub const VARLEN_TYPLEN: i16 = -1;
    /// Sentinel type length for null-terminated values
    pub const NULL_TERMINATED_TYPLEN: i16 = -2;

    /// Interpret a catalog type length
    pub const fn from_typlen(typlen: i16) -> Option<DatumWidth> {
        match typlen {
            Self::VARLEN_TYPLEN => Some(Self::VarLen),
            Self::NULL_TERMINATED_TYPLEN => Some(Self::NullTerminated),
            n if n > 0 => Some(Self::Fixed(n as usize)),
            _ => None,
        }
    }

    /// The catalog type length for this width
    pub const fn typlen(&self) -> i16 {
        match self {
            Self::Fixed(n) => *n as i16,
            Self::VarLen => Self::VARLEN_TYPLEN,
            Self::NullTerminated => Self::NULL_TERMINATED_TYPLEN,
        }
    }

    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    pub const fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Fixed(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for DatumWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{}", n),
            Self::VarLen => write!(f, "varlen"),
            Self::NullTerminated => write!(f, "cstring"),
        }
    }
}

/// Bytes handed to the storage engine
///
/// Scalars are copied inline; spans of a by-reference value are borrowed from it without
/// copying; derived text (canonical decimals, trimmed copies) is owned.
#[derive(Debug, Clone)]
pub enum StorageBytes<'a> {
    Inline(SmallVec<[u8; 16]>),
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
}

impl<'a> StorageBytes<'a> {
    /// Copy a fixed-width bit pattern inline
    pub fn inline(bytes: &[u8]) -> Self {
        Self::Inline(SmallVec::from_slice(bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Inline(bytes) => bytes.as_slice(),
            Self::Borrowed(bytes) => bytes,
            Self::Owned(bytes) => bytes.as_slice(),
        }
    }

    /// Whether the bytes alias the source value
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }

    pub fn into_owned(self) -> Vec<u8> {
        match self {
            Self::Inline(bytes) => bytes.into_vec(),
            Self::Borrowed(bytes) => bytes.to_vec(),
            Self::Owned(bytes) => bytes,
        }
    }
}

impl Deref for StorageBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for StorageBytes<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[u8]> for StorageBytes<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}
