//! Type registry
//!
//! Maps relational type identifiers to codecs. The registry is built once, never changes
//! afterwards and is shared by any number of readers without locking. Placeholder codecs that
//! have no relational type are addressed through `ReservedCodec` so their keys can never
//! collide with a real type identifier.

use crate::codec::Codec;
use crate::table;
use docbridge_types::TypeOid;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;

/// Registry entries that exist for a physical shape rather than a relational type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservedCodec {
    /// Null categories of inverted-index entries
    GinNull,
    /// Fixed-length, pass-by-value user-defined types
    FixedLenByVal,
    /// Null-terminated, pass-by-reference user-defined types
    NullTermByRef,
    /// Variable-length, pass-by-reference user-defined types
    VarLenByRef,
}

impl ReservedCodec {
    pub const ALL: [ReservedCodec; 4] = [
        Self::GinNull,
        Self::FixedLenByVal,
        Self::NullTermByRef,
        Self::VarLenByRef,
    ];

    const fn codec(self) -> &'static Codec {
        match self {
            Self::GinNull => &table::GIN_NULL,
            Self::FixedLenByVal => &table::FIXED_LEN_BY_VAL,
            Self::NullTermByRef => &table::NULL_TERM_BY_REF,
            Self::VarLenByRef => &table::VAR_LEN_BY_REF,
        }
    }
}

impl fmt::Display for ReservedCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec().type_name)
    }
}

/// Result of a registry lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Codec),
    /// Not a built-in type; the catalog has to classify it
    NeedsClassification,
}

static GLOBAL: OnceCell<TypeRegistry> = OnceCell::new();

/// Immutable table of codecs
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: IndexMap<TypeOid, Codec>,
}

impl TypeRegistry {
    /// Build a registry holding the built-in table
    pub fn builtin() -> Self {
        Self::from_codecs(table::BUILTIN_CODECS.iter().copied())
    }

    /// Build a registry from arbitrary entries; codecs without a type identifier are skipped
    pub fn from_codecs(codecs: impl IntoIterator<Item = Codec>) -> Self {
        let mut entries = IndexMap::new();
        for codec in codecs {
            let Some(oid) = codec.type_oid else {
                log::warn!("registry: skipping {} without a type identifier", codec.type_name);
                continue;
            };
            if entries.insert(oid, codec).is_some() {
                log::warn!("registry: duplicate entry for type {}", oid);
            }
        }
        Self { entries }
    }

    /// Build the process-wide registry
    ///
    /// Call once during startup; later calls return the same instance.
    pub fn init() -> &'static TypeRegistry {
        GLOBAL.get_or_init(|| {
            let registry = Self::builtin();
            log::debug!("registry: initialized with {} entries", registry.len());
            registry
        })
    }

    /// The process-wide registry, building it on first use
    pub fn global() -> &'static TypeRegistry {
        Self::init()
    }

    pub fn lookup(&self, oid: TypeOid) -> Lookup<'_> {
        match self.entries.get(&oid) {
            Some(codec) => {
                log::trace!("registry: hit for {} ({})", codec.type_name, oid);
                Lookup::Found(codec)
            }
            None => Lookup::NeedsClassification,
        }
    }

    pub fn get(&self, oid: TypeOid) -> Option<&Codec> {
        self.entries.get(&oid)
    }

    /// A placeholder codec
    pub fn reserved(&self, key: ReservedCodec) -> &'static Codec {
        key.codec()
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (TypeOid, &Codec)> {
        self.entries.iter().map(|(oid, codec)| (*oid, codec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ConvertContext;
    use docbridge_diagnostics::DocError;
    use docbridge_types::{Datum, DatumWidth, StorageTag, TypeAttrs};
    use rstest::rstest;

    #[test]
    fn test_builtin_covers_table() {
        let registry = TypeRegistry::builtin();
        assert_eq!(registry.len(), table::BUILTIN_CODECS.len());
        let first = registry.iter().next().unwrap();
        assert_eq!(first.0, TypeOid::BOOL);
    }

    #[rstest]
    #[case(TypeOid::INT4, StorageTag::Int32)]
    #[case(TypeOid::TEXT, StorageTag::String)]
    #[case(TypeOid::NUMERIC, StorageTag::Decimal)]
    #[case(TypeOid::UUID, StorageTag::Binary)]
    #[case(TypeOid::CHAR, StorageTag::Int8)]
    #[case(TypeOid::ABSTIME, StorageTag::NotSupported)]
    fn test_lookup_hits(#[case] oid: TypeOid, #[case] tag: StorageTag) {
        let registry = TypeRegistry::builtin();
        match registry.lookup(oid) {
            Lookup::Found(codec) => assert_eq!(codec.storage_tag, tag),
            Lookup::NeedsClassification => panic!("{} missing", oid),
        }
    }

    #[test]
    fn test_unknown_needs_classification() {
        let registry = TypeRegistry::builtin();
        assert_eq!(registry.lookup(TypeOid(16_384)), Lookup::NeedsClassification);
        assert_eq!(registry.lookup(TypeOid::INVALID), Lookup::NeedsClassification);
    }

    #[test]
    fn test_reserved_codecs() {
        let registry = TypeRegistry::builtin();
        let gin = registry.reserved(ReservedCodec::GinNull);
        assert_eq!(gin.storage_tag, StorageTag::GinNull);
        assert!(gin.allow_as_key);
        for key in ReservedCodec::ALL {
            assert_eq!(registry.reserved(key).type_oid, None, "{}", key);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(0xFF)]
    fn test_gin_null_roundtrip(#[case] category: u8) {
        let registry = TypeRegistry::builtin();
        let gin = registry.reserved(ReservedCodec::GinNull);
        assert_eq!(gin.width, DatumWidth::Fixed(1));

        let datum = Datum::UInt8(category);
        let stored = gin.to_storage(&datum, &ConvertContext::default()).unwrap();
        assert_eq!(stored.as_slice(), &[category]);
        let back = gin
            .from_storage(&stored, stored.len() as i64, &TypeAttrs::UNMODIFIED)
            .unwrap();
        assert_eq!(back, datum);
    }

    #[test]
    fn test_gin_null_rejects_signed_char() {
        let gin = TypeRegistry::builtin().reserved(ReservedCodec::GinNull);
        let err = gin
            .to_storage(&Datum::Char(1), &ConvertContext::default())
            .unwrap_err();
        assert!(matches!(err, DocError::Internal { .. }));
    }

    #[test]
    fn test_from_codecs_skips_placeholders() {
        let registry = TypeRegistry::from_codecs([table::INT4, table::GIN_NULL, table::INT4]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        let a = TypeRegistry::init();
        let b = TypeRegistry::global();
        assert!(std::ptr::eq(a, b));
    }
}
