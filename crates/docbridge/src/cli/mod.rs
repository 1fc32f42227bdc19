//! CLI functionality for the docbridge tool
//!
//! - Registry listing
//! - Type resolution
//! - Value conversion through a codec
//! - Output formatting
//! - Logger setup

pub mod convert;
pub mod output;
pub mod resolve;
pub mod table;

use anyhow::{Context, Result};
use docbridge_catalog::{InMemoryCatalog, TypeCatalog};
use docbridge_codec::{ResolverConfig, TypeRegistry, TypeResolver};
use docbridge_types::TypeOid;
use std::fs;
use std::path::Path;

/// Install the process logger; `RUST_LOG` overrides the verbosity default
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .try_init()
        .context("Failed to initialize logging")
}

/// Catalog, configuration and registry shared by every command
pub struct Session {
    pub registry: &'static TypeRegistry,
    pub catalog: InMemoryCatalog,
    pub config: ResolverConfig,
}

impl Session {
    /// Load the optional catalog snapshot and resolver configuration
    pub fn load(catalog: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let catalog = match catalog {
            Some(path) => InMemoryCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
            None => InMemoryCatalog::new(),
        };
        let config = match config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            None => ResolverConfig::default(),
        };
        log::debug!("session: {} catalog types, {:?}", catalog.len(), config);
        Ok(Self {
            registry: TypeRegistry::init(),
            catalog,
            config,
        })
    }

    pub fn resolver(&self) -> TypeResolver<'_> {
        TypeResolver::with_config(self.registry, &self.catalog, self.config.clone())
    }

    /// Interpret a type argument given either as a numeric OID or as a type name
    pub fn type_oid(&self, type_ref: &str) -> Result<TypeOid> {
        if let Ok(raw) = type_ref.parse::<u32>() {
            return Ok(TypeOid(raw));
        }
        self.catalog
            .lookup_type_name(type_ref)?
            .with_context(|| format!("type \"{}\" does not exist", type_ref))
    }
}
