//! Resolve command implementation

use super::Session;
use super::output::{self, OutputFormat};
use super::table::CodecRow;
use anyhow::Result;
use docbridge_types::{AttrNumber, SystemColumn, TypeOid};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Configuration for resolve command
pub struct ResolveConfig {
    /// Type name or OID
    pub type_ref: String,
    /// Column position; negative values address system columns
    pub attnum: AttrNumber,
}

/// Outcome of resolving one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub requested: TypeOid,
    pub attnum: AttrNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_column: Option<&'static str>,
    pub codec: CodecRow,
    pub synthesized: bool,
}

/// Resolve a column to its codec
pub fn resolve(session: &Session, config: &ResolveConfig) -> Result<Resolution> {
    // System columns ignore the declared type, so an unknown name is not an error for them.
    let requested = if config.attnum < 0 {
        session.type_oid(&config.type_ref).unwrap_or(TypeOid::INVALID)
    } else {
        session.type_oid(&config.type_ref)?
    };
    let resolver = session.resolver();
    let codec = resolver.resolve(config.attnum, requested)?;
    Ok(Resolution {
        requested,
        attnum: config.attnum,
        system_column: SystemColumn::from_attnum(config.attnum).map(SystemColumn::column_name),
        codec: CodecRow::new(&codec),
        synthesized: codec.is_synthesized(),
    })
}

#[derive(Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return output::format_json(resolution);
    }
    let codec = &resolution.codec;
    let mut fields = vec![
        Field {
            field: "requested",
            value: resolution.requested.to_string(),
        },
        Field {
            field: "attnum",
            value: resolution.attnum.to_string(),
        },
    ];
    if let Some(column) = resolution.system_column {
        fields.push(Field {
            field: "system column",
            value: column.to_string(),
        });
    }
    fields.extend([
        Field {
            field: "codec",
            value: format!("{} ({})", codec.name, codec.oid),
        },
        Field {
            field: "storage",
            value: codec.storage.clone(),
        },
        Field {
            field: "family",
            value: codec.family.clone(),
        },
        Field {
            field: "width",
            value: codec.width.clone(),
        },
        Field {
            field: "key",
            value: codec.key.to_string(),
        },
        Field {
            field: "synthesized",
            value: resolution.synthesized.to_string(),
        },
    ]);
    Ok(Table::new(fields).with(Style::modern()).to_string())
}
