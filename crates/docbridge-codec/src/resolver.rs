//! Type resolution
//!
//! Types present in the registry resolve directly. Everything else is classified through the
//! catalog and reduced, one category at a time, to a registered type: domains to their base
//! type, composites to `record`, enums to `anyenum` and ranges to `anyrange`. Base types the
//! registry does not know get one of the reserved placeholder codecs, or a synthesized
//! fixed-width codec when they are passed by reference with a positive width.

use crate::codec::{Codec, unsupported_type};
use crate::config::ResolverConfig;
use crate::registry::{Lookup, ReservedCodec, TypeRegistry};
use docbridge_catalog::{CatalogError, TypeCatalog, TypeCategory, TypeDefinition};
use docbridge_diagnostics::{DocError, INTERNAL_ERROR, Result, UNDEFINED_OBJECT};
use docbridge_types::{AttrNumber, SystemColumn, TypeOid};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Codec returned by `TypeResolver::resolve`
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedCodec<'r> {
    /// Entry of the registry
    Registered(&'r Codec),
    /// Codec built for a type the registry does not hold
    Synthesized(Arc<Codec>),
}

impl ResolvedCodec<'_> {
    pub fn is_synthesized(&self) -> bool {
        matches!(self, Self::Synthesized(_))
    }
}

impl Deref for ResolvedCodec<'_> {
    type Target = Codec;

    fn deref(&self) -> &Codec {
        match self {
            Self::Registered(codec) => codec,
            Self::Synthesized(codec) => codec,
        }
    }
}

impl fmt::Display for ResolvedCodec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

/// One step of category reduction
enum Step<'r> {
    Done(ResolvedCodec<'r>),
    Substitute(TypeOid),
}

/// Resolves columns and types to codecs
///
/// A resolver borrows the registry and the catalog; it may be shared across threads and used
/// for any number of statements.
pub struct TypeResolver<'a> {
    registry: &'a TypeRegistry,
    catalog: &'a dyn TypeCatalog,
    config: ResolverConfig,
    width_cache: RwLock<HashMap<usize, Arc<Codec>>>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(registry: &'a TypeRegistry, catalog: &'a dyn TypeCatalog) -> Self {
        Self::with_config(registry, catalog, ResolverConfig::default())
    }

    pub fn with_config(registry: &'a TypeRegistry, catalog: &'a dyn TypeCatalog, config: ResolverConfig) -> Self {
        Self {
            registry,
            catalog,
            config,
            width_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'a dyn TypeCatalog {
        self.catalog
    }

    /// Codec of the column at `attnum` declared with type `oid`
    ///
    /// System columns (negative `attnum`) are stored with a fixed type and ignore `oid`.
    pub fn resolve(&self, attnum: AttrNumber, oid: TypeOid) -> Result<ResolvedCodec<'a>> {
        let oid = if attnum < 0 {
            let column = SystemColumn::from_attnum(attnum).ok_or_else(|| {
                DocError::feature_not_supported(format!("System column not yet supported: {}", attnum))
            })?;
            log::debug!("resolver: system column {} stored as {}", column, column.type_oid());
            column.type_oid()
        } else {
            oid
        };
        self.resolve_type(oid)
    }

    /// Codec of a type, independent of any column
    pub fn resolve_type(&self, oid: TypeOid) -> Result<ResolvedCodec<'a>> {
        let mut current = oid;
        for _ in 0..=self.config.max_category_hops {
            let step = match self.registry.lookup(current) {
                Lookup::Found(codec) => Step::Done(ResolvedCodec::Registered(codec)),
                Lookup::NeedsClassification => self.classify(current)?,
            };
            match step {
                Step::Done(codec) => {
                    if !codec.is_supported() {
                        return Err(unsupported_type(codec.type_oid.or(Some(current)), codec.type_name));
                    }
                    return Ok(codec);
                }
                Step::Substitute(next) => current = next,
            }
        }
        Err(DocError::catalog(
            INTERNAL_ERROR,
            format!(
                "type {} did not reduce to a base type within {} category hops",
                oid, self.config.max_category_hops
            ),
        ))
    }

    /// Codec of a type given by name
    pub fn resolve_type_name(&self, name: &str) -> Result<ResolvedCodec<'a>> {
        let oid = self
            .catalog
            .lookup_type_name(name)?
            .ok_or_else(|| DocError::catalog(UNDEFINED_OBJECT, format!("type \"{}\" does not exist", name)))?;
        self.resolve_type(oid)
    }

    /// Whether values of the type may form part of a storage key
    pub fn is_key_eligible(&self, oid: TypeOid) -> Result<bool> {
        self.resolve_type(oid).map(|codec| codec.allow_as_key)
    }

    fn classify(&self, oid: TypeOid) -> Result<Step<'a>> {
        let definition = self.catalog.type_definition(oid)?;
        log::debug!("resolver: {} ({}) is a {} type", definition.name, oid, definition.category);
        let step = match definition.category {
            TypeCategory::Base => Step::Done(self.base_codec(&definition)?),
            TypeCategory::Composite => Step::Substitute(TypeOid::RECORD),
            TypeCategory::Domain => {
                Step::Substitute(definition.base_type.ok_or(CatalogError::MissingBaseType(oid))?)
            }
            TypeCategory::Enum => Step::Substitute(TypeOid::ANYENUM),
            TypeCategory::Range => Step::Substitute(TypeOid::ANYRANGE),
            TypeCategory::Pseudo => {
                return Err(DocError::feature_not_supported(format!(
                    "Type category not yet supported: {} ({}) is a {} type",
                    definition.name, oid, definition.category
                )));
            }
        };
        Ok(step)
    }

    fn base_codec(&self, definition: &TypeDefinition) -> Result<ResolvedCodec<'a>> {
        let reserved = |key| ResolvedCodec::Registered(self.registry.reserved(key));
        if definition.by_value {
            return Ok(reserved(ReservedCodec::FixedLenByVal));
        }
        match definition.typlen {
            -2 => Ok(reserved(ReservedCodec::NullTermByRef)),
            -1 => Ok(reserved(ReservedCodec::VarLenByRef)),
            width if width > 0 => Ok(ResolvedCodec::Synthesized(self.fixed_by_ref(width as usize))),
            other => Err(DocError::catalog(
                INTERNAL_ERROR,
                format!("type {} ({}) has invalid length {}", definition.name, definition.oid, other),
            )),
        }
    }

    fn fixed_by_ref(&self, width: usize) -> Arc<Codec> {
        if let Some(codec) = self.width_cache.read().get(&width) {
            return Arc::clone(codec);
        }

        let mut cache = self.width_cache.write();
        if let Some(codec) = cache.get(&width) {
            return Arc::clone(codec);
        }
        let codec = Arc::new(Codec::fixed_by_ref(width));
        if cache.len() < self.config.width_cache_capacity {
            log::debug!("resolver: caching fixed-width codec for {} bytes", width);
            cache.insert(width, Arc::clone(&codec));
        } else {
            log::warn!(
                "resolver: width cache full ({} entries), {}-byte codec not cached",
                cache.len(),
                width
            );
        }
        codec
    }

    /// Number of synthesized codecs currently cached
    pub fn cached_widths(&self) -> usize {
        self.width_cache.read().len()
    }
}

impl fmt::Debug for TypeResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeResolver")
            .field("registry_len", &self.registry.len())
            .field("config", &self.config)
            .field("cached_widths", &self.cached_widths())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;
    use docbridge_catalog::InMemoryCatalog;
    use docbridge_types::{DatumWidth, StorageTag};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const MOOD: TypeOid = TypeOid(16_400);
    const POSINT: TypeOid = TypeOid(16_401);
    const SMALLPOS: TypeOid = TypeOid(16_402);
    const PAIR: TypeOid = TypeOid(16_403);
    const FLOATRANGE: TypeOid = TypeOid(16_404);

    fn catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.define_enum(MOOD, "mood", &[(16_410, "sad", 1.0)]).unwrap();
        catalog.define_domain(POSINT, "posint", TypeOid::INT4).unwrap();
        catalog.define_domain(SMALLPOS, "smallpos", POSINT).unwrap();
        catalog.define_composite(PAIR, "pair").unwrap();
        catalog.define_range(FLOATRANGE, "floatrange", TypeOid::FLOAT8).unwrap();
        catalog.define_base(TypeOid(16_420), "byval", true, 8).unwrap();
        catalog.define_base(TypeOid(16_421), "cstr", false, -2).unwrap();
        catalog.define_base(TypeOid(16_422), "blob", false, -1).unwrap();
        catalog.define_base(TypeOid(16_423), "triple", false, 3).unwrap();
        catalog.define_base(TypeOid(16_424), "broken", false, 0).unwrap();
        catalog
    }

    #[rstest]
    #[case(MOOD, table::ANYENUM)]
    #[case(SMALLPOS, table::INT4)]
    #[case(PAIR, table::RECORD)]
    #[case(FLOATRANGE, table::ANYRANGE)]
    #[case(TypeOid(16_420), table::FIXED_LEN_BY_VAL)]
    #[case(TypeOid(16_421), table::NULL_TERM_BY_REF)]
    #[case(TypeOid(16_422), table::VAR_LEN_BY_REF)]
    fn test_category_reduction(#[case] oid: TypeOid, #[case] expected: Codec) {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        let codec = resolver.resolve(1, oid).unwrap();
        assert!(!codec.is_synthesized());
        assert_eq!(*codec, expected);
    }

    #[test]
    fn test_enum_is_eight_byte_key() {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        let codec = resolver.resolve(1, MOOD).unwrap();
        assert_eq!(codec.width, DatumWidth::Fixed(8));
        assert!(codec.allow_as_key);
        assert!(resolver.is_key_eligible(MOOD).unwrap());
        assert!(!resolver.is_key_eligible(PAIR).unwrap());
    }

    #[test]
    fn test_fixed_by_ref_synthesized_and_cached() {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        let first = resolver.resolve(1, TypeOid(16_423)).unwrap();
        let second = resolver.resolve(2, TypeOid(16_423)).unwrap();
        assert!(first.is_synthesized());
        assert_eq!(first.width, DatumWidth::Fixed(3));
        assert_eq!(first.storage_tag, StorageTag::Binary);
        assert!(!first.allow_as_key);
        match (&first, &second) {
            (ResolvedCodec::Synthesized(a), ResolvedCodec::Synthesized(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected synthesized codecs"),
        }
        assert_eq!(resolver.cached_widths(), 1);
    }

    #[test]
    fn test_invalid_base_length() {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        let err = resolver.resolve(1, TypeOid(16_424)).unwrap_err();
        assert_eq!(err.code(), INTERNAL_ERROR);
    }

    #[rstest]
    #[case(-1, table::TID)]
    #[case(-7, table::OID)]
    #[case(-8, table::BYTEA)]
    fn test_system_column_ignores_declared_type(#[case] attnum: AttrNumber, #[case] expected: Codec) {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        let codec = resolver.resolve(attnum, TypeOid::TEXT).unwrap();
        assert_eq!(*codec, expected);
    }

    #[test]
    fn test_resolve_by_name() {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        assert_eq!(*resolver.resolve_type_name("smallpos").unwrap(), table::INT4);
        assert_eq!(*resolver.resolve_type_name("varchar").unwrap(), table::VARCHAR);

        let err = resolver.resolve_type_name("nope").unwrap_err();
        assert_eq!(err, DocError::catalog(UNDEFINED_OBJECT, "type \"nope\" does not exist"));
    }

    #[test]
    fn test_unknown_type_reports_catalog_error() {
        let registry = TypeRegistry::builtin();
        let catalog = catalog();
        let resolver = TypeResolver::new(&registry, &catalog);
        let err = resolver.resolve(1, TypeOid(99_999)).unwrap_err();
        assert_eq!(err.code(), UNDEFINED_OBJECT);
    }
}
