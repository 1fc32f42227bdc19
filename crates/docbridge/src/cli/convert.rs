//! Convert command implementation
//!
//! Parses a textual value into the native form of its type, pushes it through `to_storage`,
//! reads the resulting bytes back through `from_storage` and reports both sides.

use super::Session;
use super::output::{self, OutputFormat};
use anyhow::{Context, Result, anyhow, bail};
use docbridge_codec::{Codec, CodecKind, ConvertContext, ConvertOptions};
use docbridge_types::{Datum, DatumWidth, NameData, TypeAttrs, TypeOid, numeric_in};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Configuration for convert command
pub struct ConvertConfig {
    /// Type name or OID
    pub type_ref: String,
    /// Value in text form; binary values take `\x` hex
    pub value: String,
    /// Type modifier applied when reading back (e.g. 14 for `char(10)`)
    pub typmod: Option<i32>,
    pub skip_enum_sort_order: bool,
}

/// Both sides of one conversion
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct Conversion {
    #[tabled(rename = "Type")]
    pub type_name: String,
    #[tabled(rename = "Input")]
    pub input: String,
    #[tabled(rename = "Storage")]
    pub storage: String,
    #[tabled(rename = "Bytes")]
    pub storage_len: usize,
    #[tabled(rename = "Read back")]
    pub output: String,
}

pub fn convert(session: &Session, config: &ConvertConfig) -> Result<Conversion> {
    let oid = session.type_oid(&config.type_ref)?;
    let resolver = session.resolver();
    let codec = resolver.resolve_type(oid)?;

    let datum = parse_datum(session, &codec, oid, &config.value)?;
    let ctx = ConvertContext::new(&session.catalog).with_options(ConvertOptions {
        skip_enum_sort_order: config.skip_enum_sort_order,
    });
    let stored = codec.to_storage(&datum, &ctx)?;
    log::debug!("convert: {} produced {} bytes", codec.type_name, stored.len());

    let attrs = config.typmod.map_or(TypeAttrs::UNMODIFIED, TypeAttrs::new);
    let back = codec.from_storage(&stored, stored.len() as i64, &attrs)?;

    Ok(Conversion {
        type_name: codec.type_name.to_string(),
        input: config.value.clone(),
        storage: output::hex(&stored),
        storage_len: stored.len(),
        output: display_datum(session, &codec, &back),
    })
}

pub fn render(conversion: &Conversion, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => output::format_json(conversion),
        OutputFormat::Table => Ok(Table::new([conversion.clone()]).with(Style::modern()).to_string()),
    }
}

fn parse_number<T>(codec: &Codec, text: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.trim()
        .parse()
        .with_context(|| format!("invalid input syntax for type {}: \"{}\"", codec.type_name, text))
}

fn parse_bytes(text: &str) -> Vec<u8> {
    output::parse_hex(text).unwrap_or_else(|| text.as_bytes().to_vec())
}

/// Native value of `text` for the codec's family
pub fn parse_datum(session: &Session, codec: &Codec, oid: TypeOid, text: &str) -> Result<Datum> {
    let datum = match codec.kind {
        CodecKind::Bool => match text.trim().to_ascii_lowercase().as_str() {
            "t" | "true" | "yes" | "on" | "1" => Datum::Bool(true),
            "f" | "false" | "no" | "off" | "0" => Datum::Bool(false),
            _ => bail!("invalid input syntax for type boolean: \"{}\"", text),
        },
        CodecKind::Char => Datum::Char(text.as_bytes().first().map_or(0, |byte| *byte as i8)),
        CodecKind::GinNull => Datum::UInt8(parse_number(codec, text)?),
        CodecKind::Int16 => Datum::Int16(parse_number(codec, text)?),
        CodecKind::Int32 => Datum::Int32(parse_number(codec, text)?),
        CodecKind::Int64 => Datum::Int64(parse_number(codec, text)?),
        CodecKind::UInt32 => Datum::UInt32(parse_number(codec, text)?),
        CodecKind::UInt64 => Datum::UInt64(parse_number(codec, text)?),
        CodecKind::Float4 => Datum::Float4(parse_number(codec, text)?),
        CodecKind::Float8 => Datum::Float8(parse_number(codec, text)?),
        CodecKind::Text | CodecKind::VarChar | CodecKind::BpChar => Datum::text(text)?,
        CodecKind::Binary => Datum::bytes(&parse_bytes(text))?,
        CodecKind::Name => Datum::Name(NameData::from_bytes_clipped(text.as_bytes())),
        CodecKind::CString => Datum::CString(text.to_string()),
        CodecKind::Numeric => Datum::Numeric(numeric_in(text, &TypeAttrs::UNMODIFIED)?),
        CodecKind::Enum => Datum::UInt32(enum_member(session, oid, text)?),
        CodecKind::Structured { .. } => Datum::fixed(&parse_bytes(text)),
        CodecKind::PassThrough => match codec.width {
            DatumWidth::Fixed(_) => Datum::fixed(&parse_bytes(text)),
            DatumWidth::VarLen | DatumWidth::NullTerminated => Datum::bytes(&parse_bytes(text))?,
        },
    };
    Ok(datum)
}

/// Member identifier of an enum label, or a raw member identifier
fn enum_member(session: &Session, oid: TypeOid, text: &str) -> Result<u32> {
    if let Some(member) = session.catalog.enum_member_by_label(oid, text) {
        return Ok(member);
    }
    text.trim()
        .parse()
        .map_err(|_| anyhow!("invalid input value for enum {}: \"{}\"", oid, text))
}

fn display_datum(session: &Session, codec: &Codec, datum: &Datum) -> String {
    match (codec.kind, datum) {
        (CodecKind::Enum, Datum::UInt32(member)) => session
            .catalog
            .enum_label(*member)
            .unwrap_or_else(|| member.to_string()),
        _ => datum.to_string(),
    }
}
