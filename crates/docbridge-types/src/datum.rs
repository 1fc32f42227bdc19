//! Native in-memory values

use crate::{NameData, Numeric, Varlena};
use docbridge_diagnostics::Result;
use std::fmt;

/// A value in the relational engine's native representation
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Bool(bool),
    /// Single-byte `"char"`
    Char(i8),
    /// Null category of an inverted-index entry
    UInt8(u8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Float4(f32),
    Float8(f64),
    Numeric(Numeric),
    /// Length-prefixed text or binary
    Varlena(Varlena),
    CString(String),
    Name(NameData),
    /// Fixed-width by-reference bytes (uuid, interval, geometric primitives, ...)
    FixedRef(Box<[u8]>),
}

impl Datum {
    /// Length-prefixed text value
    pub fn text(value: &str) -> Result<Self> {
        Varlena::from_payload(value.as_bytes()).map(Self::Varlena)
    }

    /// Length-prefixed binary value
    pub fn bytes(value: &[u8]) -> Result<Self> {
        Varlena::from_payload(value).map(Self::Varlena)
    }

    pub fn fixed(value: &[u8]) -> Self {
        Self::FixedRef(value.into())
    }

    /// Variant name for error messages
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::UInt8(_) => "uint8",
            Self::Int16(_) => "int16",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::UInt32(_) => "uint32",
            Self::UInt64(_) => "uint64",
            Self::Float4(_) => "float4",
            Self::Float8(_) => "float8",
            Self::Numeric(_) => "numeric",
            Self::Varlena(_) => "varlena",
            Self::CString(_) => "cstring",
            Self::Name(_) => "name",
            Self::FixedRef(_) => "fixed",
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "\\x{}", hex::encode(bytes))
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => f.write_str(if *value { "t" } else { "f" }),
            Self::Char(value) => write!(f, "{}", *value as u8 as char),
            Self::UInt8(value) => write!(f, "{}", value),
            Self::Int16(value) => write!(f, "{}", value),
            Self::Int32(value) => write!(f, "{}", value),
            Self::Int64(value) => write!(f, "{}", value),
            Self::UInt32(value) => write!(f, "{}", value),
            Self::UInt64(value) => write!(f, "{}", value),
            Self::Float4(value) => write!(f, "{}", value),
            Self::Float8(value) => write!(f, "{}", value),
            Self::Numeric(value) => write!(f, "{}", value),
            Self::Varlena(value) => match value.as_str() {
                Some(text) => f.write_str(text),
                None => write_hex(f, value.payload()),
            },
            Self::CString(value) => f.write_str(value),
            Self::Name(value) => write!(f, "{}", String::from_utf8_lossy(value.as_bytes())),
            Self::FixedRef(value) => write_hex(f, value),
        }
    }
}
