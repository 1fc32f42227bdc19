//! Catalog collaborator traits

use docbridge_diagnostics::{DocError, INTERNAL_ERROR, UNDEFINED_OBJECT};
use docbridge_types::TypeOid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a relational type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Base,
    Composite,
    Domain,
    Enum,
    Pseudo,
    Range,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Composite => "composite",
            Self::Domain => "domain",
            Self::Enum => "enum",
            Self::Pseudo => "pseudo",
            Self::Range => "range",
        };
        f.write_str(name)
    }
}

fn default_typlen() -> i16 {
    -1
}

/// What the catalog knows about one type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub oid: TypeOid,
    pub name: String,
    pub category: TypeCategory,
    /// Whether values are passed by value (base types only)
    #[serde(default)]
    pub by_value: bool,
    /// Catalog type length: positive width, -1 variable, -2 null-terminated
    #[serde(default = "default_typlen")]
    pub typlen: i16,
    /// Underlying type of a domain, or subtype of a range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeOid>,
}

impl TypeDefinition {
    pub fn base(oid: TypeOid, name: impl Into<String>, by_value: bool, typlen: i16) -> Self {
        Self {
            oid,
            name: name.into(),
            category: TypeCategory::Base,
            by_value,
            typlen,
            base_type: None,
        }
    }

    pub fn domain(oid: TypeOid, name: impl Into<String>, base_type: TypeOid) -> Self {
        Self {
            base_type: Some(base_type),
            ..Self::of_category(oid, name, TypeCategory::Domain)
        }
    }

    pub fn range(oid: TypeOid, name: impl Into<String>, subtype: TypeOid) -> Self {
        Self {
            base_type: Some(subtype),
            ..Self::of_category(oid, name, TypeCategory::Range)
        }
    }

    /// A definition carrying only its category (composite, enum, pseudo)
    pub fn of_category(oid: TypeOid, name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            oid,
            name: name.into(),
            category,
            by_value: false,
            typlen: default_typlen(),
            base_type: None,
        }
    }
}

/// Catalog lookup error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("type with OID {0} does not exist")]
    TypeNotFound(TypeOid),

    #[error("enum value {0} not found in cache")]
    EnumMemberNotFound(u32),

    #[error("domain {0} has no base type")]
    MissingBaseType(TypeOid),

    #[error("enum value {member} already belongs to type {owner}")]
    DuplicateEnumMember { member: u32, owner: TypeOid },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<CatalogError> for DocError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::TypeNotFound(_) => UNDEFINED_OBJECT,
            _ => INTERNAL_ERROR,
        };
        DocError::catalog(code, err.to_string())
    }
}

/// Metadata service used to classify types missing from the static table
///
/// Calls are synchronous; implementations may block or take locks internally and report any
/// failure as a `CatalogError`, which the caller propagates unchanged.
pub trait TypeCatalog: Send + Sync {
    /// Category and physical facts of a type
    fn type_definition(&self, oid: TypeOid) -> Result<TypeDefinition, CatalogError>;

    /// Sort rank of an enumeration member
    fn enum_sort_order(&self, member: u32) -> Result<f32, CatalogError>;

    /// Map a type name to its identifier
    fn lookup_type_name(&self, name: &str) -> Result<Option<TypeOid>, CatalogError> {
        Ok(TypeOid::from_builtin_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbridge_diagnostics::SqlState;

    #[test]
    fn test_definition_constructors() {
        let domain = TypeDefinition::domain(TypeOid(16_400), "posint", TypeOid::INT4);
        assert_eq!(domain.category, TypeCategory::Domain);
        assert_eq!(domain.base_type, Some(TypeOid::INT4));

        let base = TypeDefinition::base(TypeOid(16_401), "triple", false, 12);
        assert_eq!(base.typlen, 12);
        assert!(!base.by_value);
    }

    #[test]
    fn test_catalog_error_codes() {
        let err: DocError = CatalogError::TypeNotFound(TypeOid(99)).into();
        assert_eq!(err.code(), SqlState::new(b"42704"));
        assert_eq!(err.to_string(), "42704: type with OID 99 does not exist");

        let err: DocError = CatalogError::EnumMemberNotFound(7).into();
        assert_eq!(err.code(), SqlState::new(b"XX000"));
    }
}
