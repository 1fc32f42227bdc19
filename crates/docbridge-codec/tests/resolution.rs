//! Resolution against a mocked catalog

use docbridge_catalog::{CatalogError, TypeCatalog, TypeCategory, TypeDefinition};
use docbridge_codec::{ResolverConfig, TypeRegistry, TypeResolver, table};
use docbridge_diagnostics::{DocError, FEATURE_NOT_SUPPORTED, INTERNAL_ERROR, UNDEFINED_OBJECT};
use docbridge_types::{DatumWidth, SystemColumn, TypeOid};
use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rstest::rstest;

mock! {
    pub Catalog {}

    impl TypeCatalog for Catalog {
        fn type_definition(&self, oid: TypeOid) -> Result<TypeDefinition, CatalogError>;
        fn enum_sort_order(&self, member: u32) -> Result<f32, CatalogError>;
        fn lookup_type_name(&self, name: &str) -> Result<Option<TypeOid>, CatalogError>;
    }
}

const DOMAIN_A: TypeOid = TypeOid(20_001);
const DOMAIN_B: TypeOid = TypeOid(20_002);

fn untouched_catalog() -> MockCatalog {
    let mut catalog = MockCatalog::new();
    catalog.expect_type_definition().never();
    catalog.expect_enum_sort_order().never();
    catalog
}

#[rstest]
#[case(TypeOid::BOOL)]
#[case(TypeOid::INT4)]
#[case(TypeOid::TEXT)]
#[case(TypeOid::NUMERIC)]
#[case(TypeOid::UUID)]
#[case(TypeOid::JSONB)]
fn builtins_never_consult_catalog(#[case] oid: TypeOid) {
    let registry = TypeRegistry::builtin();
    let catalog = untouched_catalog();
    let resolver = TypeResolver::new(&registry, &catalog);
    let codec = resolver.resolve(1, oid).unwrap();
    assert_eq!(codec.type_oid, Some(oid));
}

#[test]
fn row_version_marker_is_always_tid() {
    let registry = TypeRegistry::builtin();
    let catalog = untouched_catalog();
    let resolver = TypeResolver::new(&registry, &catalog);
    for declared in [TypeOid::INT4, TypeOid::TEXT, TypeOid(77_777), TypeOid::INVALID] {
        let codec = resolver
            .resolve(SystemColumn::SelfItemPointer.attnum(), declared)
            .unwrap();
        assert_eq!(*codec, table::TID);
    }
}

#[rstest]
#[case(-11)]
#[case(-42)]
#[case(i16::MIN)]
fn unknown_system_column_not_supported(#[case] attnum: i16) {
    let registry = TypeRegistry::builtin();
    let catalog = untouched_catalog();
    let resolver = TypeResolver::new(&registry, &catalog);
    let err = resolver.resolve(attnum, TypeOid::INT4).unwrap_err();
    assert_eq!(
        err,
        DocError::feature_not_supported(format!("System column not yet supported: {}", attnum))
    );
}

#[test]
fn every_system_column_resolves() {
    let registry = TypeRegistry::builtin();
    let catalog = untouched_catalog();
    let resolver = TypeResolver::new(&registry, &catalog);
    for column in SystemColumn::ALL {
        let codec = resolver.resolve(column.attnum(), TypeOid::INVALID).unwrap();
        assert_eq!(codec.type_oid, Some(column.type_oid()), "{}", column);
    }
}

#[test]
fn domain_of_domain_of_int4() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .with(eq(DOMAIN_B))
        .times(1)
        .returning(|oid| Ok(TypeDefinition::domain(oid, "outer", DOMAIN_A)));
    catalog
        .expect_type_definition()
        .with(eq(DOMAIN_A))
        .times(1)
        .returning(|oid| Ok(TypeDefinition::domain(oid, "inner", TypeOid::INT4)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let codec = resolver.resolve(3, DOMAIN_B).unwrap();
    assert_eq!(*codec, table::INT4);
}

#[rstest]
#[case(TypeCategory::Enum, table::ANYENUM)]
#[case(TypeCategory::Composite, table::RECORD)]
fn category_placeholders(#[case] category: TypeCategory, #[case] expected: docbridge_codec::Codec) {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .times(1)
        .returning(move |oid| Ok(TypeDefinition::of_category(oid, "user_type", category)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let codec = resolver.resolve(1, TypeOid(30_000)).unwrap();
    assert_eq!(*codec, expected);
}

#[test]
fn enum_resolves_to_fixed_key() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::of_category(oid, "mood", TypeCategory::Enum)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let codec = resolver.resolve(1, TypeOid(30_001)).unwrap();
    assert_eq!(codec.width, DatumWidth::Fixed(8));
    assert!(codec.allow_as_key);
}

#[test]
fn range_resolves_to_anyrange() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::range(oid, "floatrange", TypeOid::FLOAT8)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let codec = resolver.resolve(1, TypeOid(30_002)).unwrap();
    assert_eq!(*codec, table::ANYRANGE);
    assert!(!resolver.is_key_eligible(TypeOid(30_002)).unwrap());
}

#[test]
fn pseudo_category_not_supported() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::of_category(oid, "weird", TypeCategory::Pseudo)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let err = resolver.resolve(1, TypeOid(30_003)).unwrap_err();
    assert_eq!(err.code(), FEATURE_NOT_SUPPORTED);
}

#[rstest]
#[case(TypeOid::ABSTIME)]
#[case(TypeOid::RELTIME)]
#[case(TypeOid::TINTERVAL)]
#[case(TypeOid::UNKNOWN)]
fn deprecated_types_not_supported(#[case] oid: TypeOid) {
    let registry = TypeRegistry::builtin();
    let catalog = untouched_catalog();
    let resolver = TypeResolver::new(&registry, &catalog);
    let err = resolver.resolve(1, oid).unwrap_err();
    assert_eq!(err.code(), FEATURE_NOT_SUPPORTED);
    assert!(err.to_string().contains("Type not yet supported"), "{}", err);
}

#[test]
fn domain_to_deprecated_type_not_supported() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::domain(oid, "old_time", TypeOid::ABSTIME)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let err = resolver.resolve(1, DOMAIN_A).unwrap_err();
    assert_eq!(err.code(), FEATURE_NOT_SUPPORTED);
}

#[test]
fn domain_cycle_stops_at_hop_cap() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog.expect_type_definition().times(5).returning(|oid| {
        let next = if oid == DOMAIN_A { DOMAIN_B } else { DOMAIN_A };
        Ok(TypeDefinition::domain(oid, "loop", next))
    });

    let config = ResolverConfig::default().with_max_category_hops(4);
    let resolver = TypeResolver::with_config(&registry, &catalog, config);
    let err = resolver.resolve(1, DOMAIN_A).unwrap_err();
    assert_eq!(err.code(), INTERNAL_ERROR);
    assert!(err.to_string().contains("within 4 category hops"), "{}", err);
}

#[test]
fn catalog_errors_propagate() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .times(1)
        .returning(|_| Err(CatalogError::Io("cache refresh failed".to_string())));

    let resolver = TypeResolver::new(&registry, &catalog);
    let err = resolver.resolve(1, TypeOid(40_000)).unwrap_err();
    assert_eq!(
        err,
        DocError::from(CatalogError::Io("cache refresh failed".to_string()))
    );
}

#[test]
fn missing_type_is_undefined_object() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Err(CatalogError::TypeNotFound(oid)));

    let resolver = TypeResolver::new(&registry, &catalog);
    let err = resolver.resolve(1, TypeOid(40_001)).unwrap_err();
    assert_eq!(err.code(), UNDEFINED_OBJECT);
}

#[test]
fn width_cache_is_bounded() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::base(oid, "blob", false, (oid.0 - 50_000) as i16)));

    let config = ResolverConfig::default().with_width_cache_capacity(2);
    let resolver = TypeResolver::with_config(&registry, &catalog, config);
    for width in 1..=5u32 {
        let codec = resolver.resolve(1, TypeOid(50_000 + width)).unwrap();
        assert!(codec.is_synthesized());
        assert_eq!(codec.width, DatumWidth::Fixed(width as usize));
    }
    assert_eq!(resolver.cached_widths(), 2);
}

#[test]
fn name_lookup_uses_catalog() {
    let registry = TypeRegistry::builtin();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_lookup_type_name()
        .withf(|name| name == "mood")
        .returning(|_| Ok(Some(TypeOid(30_001))));
    catalog
        .expect_lookup_type_name()
        .withf(|name| name == "ghost")
        .returning(|_| Ok(None));
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::of_category(oid, "mood", TypeCategory::Enum)));

    let resolver = TypeResolver::new(&registry, &catalog);
    assert_eq!(*resolver.resolve_type_name("mood").unwrap(), table::ANYENUM);
    assert_eq!(
        resolver.resolve_type_name("ghost").unwrap_err(),
        DocError::catalog(UNDEFINED_OBJECT, "type \"ghost\" does not exist")
    );
}

#[test]
fn resolver_shared_across_threads() {
    let registry = TypeRegistry::init();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_type_definition()
        .returning(|oid| Ok(TypeDefinition::base(oid, "fixed12", false, 12)));

    let resolver = TypeResolver::new(registry, &catalog);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let codec = resolver.resolve(1, TypeOid(60_000)).unwrap();
                assert_eq!(codec.width, DatumWidth::Fixed(12));
            });
        }
    });
    assert_eq!(resolver.cached_widths(), 1);
}
