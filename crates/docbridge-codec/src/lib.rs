//! Docbridge codec layer
//!
//! This crate maps every relational type to exactly one storage codec and converts values across
//! the storage boundary:
//! - `Codec` and the closed set of conversion families (`CodecKind`)
//! - The built-in conversion table and the process-wide `TypeRegistry`
//! - `TypeResolver`, which classifies types missing from the table through a `TypeCatalog`
//! - `ResolverConfig`

pub mod codec;
pub mod codecs;
pub mod config;
pub mod registry;
pub mod resolver;
pub mod table;

pub use codec::*;
pub use config::*;
pub use registry::*;
pub use resolver::*;
