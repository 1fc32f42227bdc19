//! Docbridge type catalog
//!
//! This crate provides:
//! - The `TypeCatalog` trait the resolver uses to classify types it does not know
//! - Type definitions and categories as reported by a catalog
//! - An in-memory catalog that can be built in code or loaded from a JSON snapshot

pub mod memory;
pub mod provider;

pub use memory::*;
pub use provider::*;
