//! Relational type resolution and storage codecs
//!
//! Every column the relational layer reads or writes is stored in a document store that only
//! understands a handful of physical shapes. This crate ties the pieces together:
//! - `TypeRegistry`: built-in type identifiers and their codecs
//! - `TypeResolver`: classification of any other type through a `TypeCatalog`
//! - `Codec::to_storage` / `Codec::from_storage`: value conversion in both directions
//!
//! # Example
//!
//! ```ignore
//! use docbridge::{ConvertContext, Datum, InMemoryCatalog, TypeAttrs, TypeOid, TypeRegistry, TypeResolver};
//!
//! let catalog = InMemoryCatalog::new();
//! let resolver = TypeResolver::new(TypeRegistry::init(), &catalog);
//!
//! let codec = resolver.resolve(1, TypeOid::BPCHAR)?;
//! let datum = Datum::text("abc   ")?;
//! let bytes = codec.to_storage(&datum, &ConvertContext::new(&catalog))?;
//! let back = codec.from_storage(&bytes, bytes.len() as i64, &TypeAttrs::UNMODIFIED)?;
//! ```

// Re-export all public APIs from internal crates
pub use docbridge_catalog as catalog;
pub use docbridge_codec as codec;
pub use docbridge_diagnostics as diagnostics;
pub use docbridge_types as types;

// Convenience re-exports
pub use docbridge_catalog::{CatalogError, InMemoryCatalog, TypeCatalog, TypeCategory, TypeDefinition};
pub use docbridge_codec::{
    Codec, CodecKind, ConvertContext, ConvertOptions, ResolvedCodec, ResolverConfig, TypeRegistry,
    TypeResolver,
};
pub use docbridge_diagnostics::{DocError, Result, SqlState};
pub use docbridge_types::{AttrNumber, Datum, StorageBytes, StorageTag, SystemColumn, TypeAttrs, TypeOid};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
