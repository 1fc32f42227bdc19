//! Storage codecs
//!
//! A `Codec` describes how one relational type is stored: the storage tag, the native width,
//! whether its encoding is usable as a key, and the conversion family that moves values in both
//! directions. Families form a closed enum so every dispatch is an exhaustive match.

use crate::codecs::{enumeration, numeric, opaque, scalar, text};
use docbridge_catalog::TypeCatalog;
use docbridge_diagnostics::{DocError, Result};
use docbridge_types::{Datum, DatumWidth, StorageBytes, StorageTag, TypeAttrs, TypeOid};
use serde::Serialize;
use std::fmt;

/// Conversion family of a codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "family")]
pub enum CodecKind {
    Bool,
    /// Single-byte `"char"`
    Char,
    Int16,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float4,
    Float8,
    /// Length-prefixed binary
    Binary,
    /// Length-prefixed text
    Text,
    /// Blank-padded `character(n)`
    BpChar,
    VarChar,
    /// Fixed-width identifier
    Name,
    /// Null-terminated string
    CString,
    /// Enumeration member packed with its sort rank
    Enum,
    /// Decimal carried as canonical text
    Numeric,
    /// Fixed-size structure whose stored length must match exactly
    Structured { size: usize },
    /// Opaque value stored exactly as its in-memory image
    PassThrough,
    /// Inverted-index null category
    GinNull,
}

impl CodecKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float4 => "float4",
            Self::Float8 => "float8",
            Self::Binary => "binary",
            Self::Text => "text",
            Self::BpChar => "bpchar",
            Self::VarChar => "varchar",
            Self::Name => "name",
            Self::CString => "cstring",
            Self::Enum => "enum",
            Self::Numeric => "numeric",
            Self::Structured { .. } => "structured",
            Self::PassThrough => "pass_through",
            Self::GinNull => "gin_null",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured { size } => write!(f, "structured({})", size),
            other => f.write_str(other.name()),
        }
    }
}

/// Per-call conversion switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Store enumeration values without their sort rank
    ///
    /// Only tests should set this: the stored values then no longer sort by rank.
    pub skip_enum_sort_order: bool,
}

/// Collaborators available while converting a value into its storage form
#[derive(Clone, Copy, Default)]
pub struct ConvertContext<'a> {
    pub catalog: Option<&'a dyn TypeCatalog>,
    pub options: ConvertOptions,
}

impl<'a> ConvertContext<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self {
            catalog: Some(catalog),
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for ConvertContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertContext")
            .field("catalog", &self.catalog.is_some())
            .field("options", &self.options)
            .finish()
    }
}

/// Storage descriptor of one relational type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Codec {
    /// Relational type this entry belongs to; `None` for placeholder and synthesized codecs
    pub type_oid: Option<TypeOid>,
    pub type_name: &'static str,
    pub storage_tag: StorageTag,
    /// Whether the encoding orders values totally and may form part of a storage key
    pub allow_as_key: bool,
    pub width: DatumWidth,
    pub kind: CodecKind,
}

impl Codec {
    /// Entry for a built-in type
    pub const fn builtin(
        oid: TypeOid,
        storage_tag: StorageTag,
        allow_as_key: bool,
        width: DatumWidth,
        kind: CodecKind,
    ) -> Self {
        let type_name = match oid.builtin_name() {
            Some(name) => name,
            None => "?",
        };
        Self {
            type_oid: Some(oid),
            type_name,
            storage_tag,
            allow_as_key,
            width,
            kind,
        }
    }

    /// Entry with no relational type of its own
    pub const fn placeholder(
        type_name: &'static str,
        storage_tag: StorageTag,
        allow_as_key: bool,
        width: DatumWidth,
        kind: CodecKind,
    ) -> Self {
        Self {
            type_oid: None,
            type_name,
            storage_tag,
            allow_as_key,
            width,
            kind,
        }
    }

    /// Opaque fixed-width codec for a pass-by-reference type of `width` bytes
    pub const fn fixed_by_ref(width: usize) -> Self {
        Self::placeholder(
            "fixed_by_ref",
            StorageTag::Binary,
            false,
            DatumWidth::Fixed(width),
            CodecKind::PassThrough,
        )
    }

    pub const fn is_fixed_length(&self) -> bool {
        self.width.is_fixed()
    }

    /// Byte width, or -1 for variable length and -2 for null-terminated values
    pub const fn fixed_size(&self) -> i16 {
        self.width.typlen()
    }

    pub fn is_supported(&self) -> bool {
        self.storage_tag != StorageTag::NotSupported
    }

    fn ensure_supported(&self) -> Result<()> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(unsupported_type(self.type_oid, self.type_name))
        }
    }

    /// Convert a native value into the bytes handed to storage
    pub fn to_storage<'d>(&self, datum: &'d Datum, ctx: &ConvertContext<'_>) -> Result<StorageBytes<'d>> {
        self.ensure_supported()?;
        log::trace!("to_storage: {} via {}", self.type_name, self.kind);
        match self.kind {
            CodecKind::Bool
            | CodecKind::Char
            | CodecKind::Int16
            | CodecKind::Int32
            | CodecKind::Int64
            | CodecKind::UInt32
            | CodecKind::UInt64
            | CodecKind::Float4
            | CodecKind::Float8
            | CodecKind::GinNull => scalar::to_storage(self, datum),
            CodecKind::Binary | CodecKind::Text | CodecKind::VarChar => text::varlena_to_storage(self, datum),
            CodecKind::BpChar => text::bpchar_to_storage(self, datum),
            CodecKind::Name => text::name_to_storage(self, datum),
            CodecKind::CString => text::cstring_to_storage(self, datum),
            CodecKind::Enum => enumeration::to_storage(self, datum, ctx),
            CodecKind::Numeric => numeric::to_storage(self, datum),
            CodecKind::Structured { size } => opaque::structured_to_storage(self, datum, size),
            CodecKind::PassThrough => opaque::pass_through_to_storage(self, datum),
        }
    }

    /// Rebuild a native value from `declared_len` bytes returned by storage
    pub fn from_storage(&self, data: &[u8], declared_len: i64, attrs: &TypeAttrs) -> Result<Datum> {
        self.ensure_supported()?;
        log::trace!("from_storage: {} via {} ({} bytes)", self.type_name, self.kind, declared_len);
        match self.kind {
            CodecKind::Bool
            | CodecKind::Char
            | CodecKind::Int16
            | CodecKind::Int32
            | CodecKind::Int64
            | CodecKind::UInt32
            | CodecKind::UInt64
            | CodecKind::Float4
            | CodecKind::Float8
            | CodecKind::GinNull => scalar::from_storage(self, data),
            CodecKind::Binary | CodecKind::Text => text::varlena_from_storage(data, declared_len),
            CodecKind::BpChar => text::bpchar_from_storage(data, declared_len, attrs),
            CodecKind::VarChar => text::varchar_from_storage(data, declared_len, attrs),
            CodecKind::Name => text::name_from_storage(data, declared_len),
            CodecKind::CString => text::cstring_from_storage(data, declared_len),
            CodecKind::Enum => enumeration::from_storage(self, data),
            CodecKind::Numeric => numeric::from_storage(data, declared_len, attrs),
            CodecKind::Structured { size } => opaque::structured_from_storage(self, data, declared_len, size),
            CodecKind::PassThrough => opaque::pass_through_from_storage(self, data, declared_len),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} {} width={}{}]",
            self.type_name,
            self.storage_tag,
            self.kind,
            self.width,
            if self.allow_as_key { " key" } else { "" }
        )
    }
}

/// Error for a type that has no storage mapping
pub(crate) fn unsupported_type(oid: Option<TypeOid>, name: &str) -> DocError {
    match oid {
        Some(oid) => DocError::feature_not_supported(format!("Type not yet supported: {} ({})", name, oid)),
        None => DocError::feature_not_supported(format!("Type not yet supported: {}", name)),
    }
}

/// Error for a datum whose variant does not belong to the codec
pub(crate) fn datum_mismatch(codec: &Codec, datum: &Datum) -> DocError {
    DocError::internal(format!(
        "{} codec cannot convert a {} datum",
        codec.type_name,
        datum.variant_name()
    ))
}
