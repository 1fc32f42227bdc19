//! Docbridge type model
//!
//! This crate defines the vocabulary shared by the catalog seam and the codec layer:
//! - Relational type identifiers (`TypeOid`) and the built-in type constants
//! - System columns and their fixed relational types
//! - The native in-memory value representation (`Datum`) and its by-reference payloads
//!   (varlena, name, numeric)
//! - The target representations' input parsers used when values come back from storage
//! - Storage-side shapes: `StorageTag`, `DatumWidth`, `StorageBytes`
//! - Per-column type attributes (`TypeAttrs`)

pub mod attrs;
pub mod datum;
pub mod input;
pub mod name;
pub mod numeric;
pub mod oid;
pub mod storage;
pub mod system_column;
pub mod varlena;

pub use attrs::*;
pub use datum::*;
pub use name::*;
pub use numeric::*;
pub use oid::*;
pub use storage::*;
pub use system_column::*;
pub use varlena::*;
