//! In-memory catalog implementing TypeCatalog
//!
//! Holds user-defined type definitions and enumeration members. It can be populated in code or
//! loaded from a JSON snapshot:
//!
//! ```json
//! {
//!   "types": [
//!     { "oid": 16400, "name": "posint", "category": "domain", "base_type": 23 },
//!     { "oid": 16410, "name": "mood", "category": "enum",
//!       "members": [ { "oid": 16411, "label": "sad", "sort_order": 1.0 } ] }
//!   ]
//! }
//! ```

use crate::provider::{CatalogError, TypeCatalog, TypeCategory, TypeDefinition};
use docbridge_types::TypeOid;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One member of an enumeration type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub oid: u32,
    pub label: String,
    pub sort_order: f32,
}

/// A type definition together with its enumeration members, as stored in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    #[serde(flatten)]
    pub definition: TypeDefinition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<EnumMember>,
}

/// Serializable catalog contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub types: Vec<SnapshotEntry>,
}

#[derive(Debug, Default)]
struct CatalogState {
    types: IndexMap<TypeOid, TypeDefinition>,
    names: HashMap<String, TypeOid>,
    members: IndexMap<u32, (TypeOid, EnumMember)>,
}

/// Catalog backed by in-process maps
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a snapshot
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        let catalog = Self::new();
        for entry in snapshot.types {
            let oid = entry.definition.oid;
            if !entry.members.is_empty() && entry.definition.category != TypeCategory::Enum {
                return Err(CatalogError::Parse(format!(
                    "type {} lists enum members but is a {} type",
                    entry.definition.name, entry.definition.category
                )));
            }
            catalog.define(entry.definition)?;
            for member in entry.members {
                catalog.add_enum_member(oid, member)?;
            }
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON snapshot string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_snapshot(snapshot)
    }

    /// Load a catalog from a JSON snapshot file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Current contents as a snapshot
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read();
        let types = state
            .types
            .values()
            .map(|definition| SnapshotEntry {
                definition: definition.clone(),
                members: state
                    .members
                    .values()
                    .filter(|(owner, _)| *owner == definition.oid)
                    .map(|(_, member)| member.clone())
                    .collect(),
            })
            .collect();
        CatalogSnapshot { types }
    }

    /// Add or replace a type definition
    pub fn define(&self, definition: TypeDefinition) -> Result<(), CatalogError> {
        if definition.category == TypeCategory::Domain && definition.base_type.is_none() {
            return Err(CatalogError::MissingBaseType(definition.oid));
        }
        log::debug!(
            "catalog: defining {} type {} ({})",
            definition.category,
            definition.name,
            definition.oid
        );
        let mut state = self.state.write();
        let stale = state
            .types
            .get(&definition.oid)
            .map(|previous| previous.name.clone())
            .filter(|name| *name != definition.name && state.names.get(name) == Some(&definition.oid));
        if let Some(name) = stale {
            state.names.remove(&name);
        }
        state.names.insert(definition.name.clone(), definition.oid);
        state.types.insert(definition.oid, definition);
        Ok(())
    }

    pub fn define_base(&self, oid: TypeOid, name: &str, by_value: bool, typlen: i16) -> Result<(), CatalogError> {
        self.define(TypeDefinition::base(oid, name, by_value, typlen))
    }

    pub fn define_domain(&self, oid: TypeOid, name: &str, base_type: TypeOid) -> Result<(), CatalogError> {
        self.define(TypeDefinition::domain(oid, name, base_type))
    }

    pub fn define_range(&self, oid: TypeOid, name: &str, subtype: TypeOid) -> Result<(), CatalogError> {
        self.define(TypeDefinition::range(oid, name, subtype))
    }

    pub fn define_composite(&self, oid: TypeOid, name: &str) -> Result<(), CatalogError> {
        self.define(TypeDefinition::of_category(oid, name, TypeCategory::Composite))
    }

    /// Define an enumeration with members given as `(member oid, label, sort order)`
    pub fn define_enum(
        &self,
        oid: TypeOid,
        name: &str,
        members: &[(u32, &str, f32)],
    ) -> Result<(), CatalogError> {
        self.define(TypeDefinition::of_category(oid, name, TypeCategory::Enum))?;
        for &(member_oid, label, sort_order) in members {
            self.add_enum_member(
                oid,
                EnumMember {
                    oid: member_oid,
                    label: label.to_string(),
                    sort_order,
                },
            )?;
        }
        Ok(())
    }

    /// Attach a member to an already defined enumeration
    pub fn add_enum_member(&self, enum_oid: TypeOid, member: EnumMember) -> Result<(), CatalogError> {
        let mut state = self.state.write();
        match state.types.get(&enum_oid) {
            Some(definition) if definition.category == TypeCategory::Enum => {}
            Some(definition) => {
                return Err(CatalogError::Parse(format!(
                    "{} is not an enum type",
                    definition.name
                )));
            }
            None => return Err(CatalogError::TypeNotFound(enum_oid)),
        }
        match state.members.get(&member.oid) {
            Some(&(owner, _)) if owner != enum_oid => {
                return Err(CatalogError::DuplicateEnumMember {
                    member: member.oid,
                    owner,
                });
            }
            _ => {}
        }
        state.members.insert(member.oid, (enum_oid, member));
        Ok(())
    }

    /// Label of an enumeration member
    pub fn enum_label(&self, member: u32) -> Option<String> {
        self.state
            .read()
            .members
            .get(&member)
            .map(|(_, m)| m.label.clone())
    }

    /// Find a member of `enum_oid` by label
    pub fn enum_member_by_label(&self, enum_oid: TypeOid, label: &str) -> Option<u32> {
        self.state
            .read()
            .members
            .values()
            .find(|(owner, m)| *owner == enum_oid && m.label == label)
            .map(|(_, m)| m.oid)
    }

    pub fn len(&self) -> usize {
        self.state.read().types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TypeCatalog for InMemoryCatalog {
    fn type_definition(&self, oid: TypeOid) -> Result<TypeDefinition, CatalogError> {
        self.state
            .read()
            .types
            .get(&oid)
            .cloned()
            .ok_or(CatalogError::TypeNotFound(oid))
    }

    fn enum_sort_order(&self, member: u32) -> Result<f32, CatalogError> {
        self.state
            .read()
            .members
            .get(&member)
            .map(|(_, m)| m.sort_order)
            .ok_or(CatalogError::EnumMemberNotFound(member))
    }

    fn lookup_type_name(&self, name: &str) -> Result<Option<TypeOid>, CatalogError> {
        if let Some(oid) = self.state.read().names.get(name) {
            return Ok(Some(*oid));
        }
        Ok(TypeOid::from_builtin_name(name))
    }
}
