//! Table command implementation

use super::Session;
use super::output::{self, OutputFormat};
use anyhow::Result;
use docbridge_codec::{Codec, ReservedCodec};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// One registry entry as listed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CodecRow {
    #[tabled(rename = "OID")]
    pub oid: String,
    #[tabled(rename = "Type")]
    pub name: String,
    #[tabled(rename = "Storage")]
    pub storage: String,
    #[tabled(rename = "Family")]
    pub family: String,
    #[tabled(rename = "Width")]
    pub width: String,
    #[tabled(rename = "Key")]
    pub key: bool,
}

impl CodecRow {
    pub fn new(codec: &Codec) -> Self {
        Self {
            oid: codec
                .type_oid
                .map_or_else(|| "-".to_string(), |oid| oid.to_string()),
            name: codec.type_name.to_string(),
            storage: codec.storage_tag.to_string(),
            family: codec.kind.to_string(),
            width: codec.width.to_string(),
            key: codec.allow_as_key,
        }
    }
}

/// Configuration for table command
pub struct TableConfig {
    /// Only list entries that can form part of a storage key
    pub keys_only: bool,
    /// Include the reserved placeholder entries
    pub reserved: bool,
}

/// Registry entries in table order, followed by the reserved entries when requested
pub fn rows(session: &Session, config: &TableConfig) -> Vec<CodecRow> {
    let registry = session.registry;
    let reserved = config
        .reserved
        .then(|| ReservedCodec::ALL.map(|key| registry.reserved(key)))
        .into_iter()
        .flatten();
    registry
        .iter()
        .map(|(_, codec)| codec)
        .chain(reserved)
        .filter(|codec| !config.keys_only || codec.allow_as_key)
        .map(CodecRow::new)
        .collect()
}

/// List the registry
pub fn table(session: &Session, config: &TableConfig, format: OutputFormat) -> Result<String> {
    let rows = rows(session, config);
    match format {
        OutputFormat::Json => output::format_json(&rows),
        OutputFormat::Table => Ok(Table::new(rows).with(Style::modern()).to_string()),
    }
}
