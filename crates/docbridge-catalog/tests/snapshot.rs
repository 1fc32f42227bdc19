//! Catalog snapshot loading tests

use docbridge_catalog::*;
use docbridge_types::TypeOid;
use rstest::rstest;
use std::io::Write;

const SNAPSHOT: &str = r#"{
    "types": [
        { "oid": 16400, "name": "posint", "category": "domain", "base_type": 23 },
        { "oid": 16401, "name": "posint2", "category": "domain", "base_type": 16400 },
        { "oid": 16410, "name": "mood", "category": "enum",
          "members": [
            { "oid": 16411, "label": "sad", "sort_order": 1.0 },
            { "oid": 16412, "label": "ok", "sort_order": 1.5 },
            { "oid": 16413, "label": "happy", "sort_order": 2.0 }
          ] },
        { "oid": 16420, "name": "floatrange", "category": "range", "base_type": 701 },
        { "oid": 16430, "name": "pair", "category": "composite" },
        { "oid": 16440, "name": "rgb", "category": "base", "by_value": false, "typlen": 3 },
        { "oid": 16450, "name": "handle", "category": "base", "by_value": true, "typlen": 8 }
    ]
}"#;

#[rstest]
#[case(16400, TypeCategory::Domain)]
#[case(16410, TypeCategory::Enum)]
#[case(16420, TypeCategory::Range)]
#[case(16430, TypeCategory::Composite)]
#[case(16440, TypeCategory::Base)]
fn test_snapshot_categories(#[case] oid: u32, #[case] category: TypeCategory) {
    let catalog = InMemoryCatalog::from_json(SNAPSHOT).unwrap();
    assert_eq!(catalog.type_definition(TypeOid(oid)).unwrap().category, category);
}

#[test]
fn test_snapshot_defaults() {
    let catalog = InMemoryCatalog::from_json(SNAPSHOT).unwrap();
    let composite = catalog.type_definition(TypeOid(16430)).unwrap();
    assert_eq!(composite.typlen, -1);
    assert!(!composite.by_value);

    let rgb = catalog.type_definition(TypeOid(16440)).unwrap();
    assert_eq!(rgb.typlen, 3);
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_snapshot_enum_members() {
    let catalog = InMemoryCatalog::from_json(SNAPSHOT).unwrap();
    assert_eq!(catalog.enum_sort_order(16412).unwrap(), 1.5);
    assert_eq!(catalog.enum_member_by_label(TypeOid(16410), "happy"), Some(16413));
}

#[test]
fn test_members_on_non_enum_rejected() {
    let json = r#"{ "types": [ { "oid": 1, "name": "x", "category": "composite",
        "members": [ { "oid": 2, "label": "a", "sort_order": 1.0 } ] } ] }"#;
    assert!(matches!(
        InMemoryCatalog::from_json(json),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        InMemoryCatalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_from_json_file() {
    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    temp_file.write_all(SNAPSHOT.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let catalog = InMemoryCatalog::from_json_file(temp_file.path()).unwrap();
    assert_eq!(catalog.lookup_type_name("mood").unwrap(), Some(TypeOid(16410)));
}

#[test]
fn test_missing_file() {
    let result = InMemoryCatalog::from_json_file("/nonexistent/catalog.json");
    assert!(matches!(result, Err(CatalogError::Io(_))));
}
