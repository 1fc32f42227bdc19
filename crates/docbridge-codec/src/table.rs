//! Built-in conversion table
//!
//! One entry per built-in relational type, plus the placeholder codecs that have no relational
//! type of their own. Widths follow the catalog convention: `VAR` is variable length with an
//! explicit size, `CSTR` is null-terminated.

use crate::codec::{Codec, CodecKind as K};
use docbridge_types::{DatumWidth, StorageTag, TypeOid};

const VAR: DatumWidth = DatumWidth::VarLen;
const CSTR: DatumWidth = DatumWidth::NullTerminated;

const fn fixed(width: usize) -> DatumWidth {
    DatumWidth::Fixed(width)
}

const fn structured(size: usize) -> K {
    K::Structured { size }
}

macro_rules! builtin_codecs {
    ($($(#[$meta:meta])* $konst:ident: $tag:ident, key = $key:literal, $width:expr, $kind:expr;)*) => {
        $($(#[$meta])* pub const $konst: Codec =
            Codec::builtin(TypeOid::$konst, StorageTag::$tag, $key, $width, $kind);)*

        /// Every built-in entry in table order
        pub const BUILTIN_CODECS: &[Codec] = &[$($konst),*];
    };
}

builtin_codecs! {
    BOOL: Bool, key = true, fixed(1), K::Bool;
    BYTEA: Binary, key = true, VAR, K::Binary;
    CHAR: Int8, key = true, fixed(1), K::Char;
    NAME: String, key = true, VAR, K::Name;
    INT8: Int64, key = true, fixed(8), K::Int64;
    INT2: Int16, key = true, fixed(2), K::Int16;
    INT2VECTOR: Binary, key = true, VAR, K::Binary;
    INT4: Int32, key = true, fixed(4), K::Int32;
    REGPROC: UInt32, key = true, fixed(4), K::UInt32;
    TEXT: String, key = true, VAR, K::Text;
    OID: UInt32, key = true, fixed(4), K::UInt32;
    TID: Binary, key = false, fixed(6), structured(6);
    XID: UInt32, key = true, fixed(4), K::UInt32;
    CID: UInt32, key = false, fixed(4), K::UInt32;
    OIDVECTOR: Binary, key = true, VAR, K::Binary;
    JSON: Binary, key = false, VAR, K::PassThrough;
    JSON_ARRAY: Binary, key = false, VAR, K::PassThrough;
    XML: Binary, key = false, VAR, K::PassThrough;
    XML_ARRAY: Binary, key = false, VAR, K::PassThrough;
    PG_NODE_TREE: Binary, key = false, VAR, K::Binary;
    PG_NDISTINCT: Binary, key = false, VAR, K::Binary;
    PG_DEPENDENCIES: Binary, key = false, VAR, K::Binary;
    PG_DDL_COMMAND: Int64, key = true, fixed(8), K::Int64;
    SMGR: Int16, key = true, fixed(2), K::Int16;
    POINT: Binary, key = false, fixed(16), structured(16);
    LSEG: Binary, key = false, fixed(32), structured(32);
    PATH: Binary, key = false, VAR, K::PassThrough;
    BOX: Binary, key = false, fixed(32), structured(32);
    POLYGON: Binary, key = false, VAR, K::PassThrough;
    LINE: Binary, key = false, fixed(24), structured(24);
    LINE_ARRAY: Binary, key = false, VAR, K::PassThrough;
    FLOAT4: Float, key = true, fixed(4), K::Float4;
    FLOAT8: Double, key = true, fixed(8), K::Float8;
    /// Deprecated
    ABSTIME: NotSupported, key = true, fixed(4), K::Int32;
    /// Deprecated
    RELTIME: NotSupported, key = false, VAR, K::PassThrough;
    /// Deprecated
    TINTERVAL: NotSupported, key = false, VAR, K::PassThrough;
    /// Deprecated
    UNKNOWN: NotSupported, key = false, VAR, K::PassThrough;
    CIRCLE: Binary, key = false, fixed(24), structured(24);
    CIRCLE_ARRAY: Binary, key = false, VAR, K::PassThrough;
    /// Monetary amounts are 64-bit integers in the native form too
    MONEY: Int64, key = true, fixed(8), K::Int64;
    MONEY_ARRAY: Binary, key = false, VAR, K::PassThrough;
    MACADDR: Binary, key = false, fixed(6), structured(6);
    INET: Binary, key = false, VAR, K::PassThrough;
    CIDR: Binary, key = false, VAR, K::PassThrough;
    CIDR_ARRAY: Binary, key = false, VAR, K::PassThrough;
    MACADDR8: Binary, key = false, fixed(8), structured(8);
    BOOL_ARRAY: Binary, key = false, VAR, K::PassThrough;
    BYTEA_ARRAY: Binary, key = false, VAR, K::PassThrough;
    CHAR_ARRAY: Binary, key = false, VAR, K::Binary;
    NAME_ARRAY: Binary, key = false, VAR, K::Binary;
    INT2_ARRAY: Binary, key = false, VAR, K::Binary;
    INT2VECTOR_ARRAY: Binary, key = false, VAR, K::Binary;
    INT4_ARRAY: Binary, key = false, VAR, K::Binary;
    REGPROC_ARRAY: Binary, key = false, VAR, K::Binary;
    TEXT_ARRAY: Binary, key = false, VAR, K::Binary;
    OID_ARRAY: Binary, key = false, VAR, K::Binary;
    TID_ARRAY: Binary, key = false, VAR, K::Binary;
    XID_ARRAY: Binary, key = false, VAR, K::Binary;
    CID_ARRAY: Binary, key = false, VAR, K::Binary;
    OIDVECTOR_ARRAY: Binary, key = false, VAR, K::Binary;
    BPCHAR_ARRAY: Binary, key = false, VAR, K::Binary;
    VARCHAR_ARRAY: Binary, key = false, VAR, K::Binary;
    INT8_ARRAY: Binary, key = false, VAR, K::Binary;
    POINT_ARRAY: Binary, key = false, VAR, K::Binary;
    LSEG_ARRAY: Binary, key = false, VAR, K::Binary;
    PATH_ARRAY: Binary, key = false, VAR, K::Binary;
    BOX_ARRAY: Binary, key = false, VAR, K::Binary;
    FLOAT4_ARRAY: Binary, key = false, VAR, K::Binary;
    FLOAT8_ARRAY: Binary, key = false, VAR, K::Binary;
    ABSTIME_ARRAY: Binary, key = false, VAR, K::Binary;
    RELTIME_ARRAY: Binary, key = false, VAR, K::Binary;
    TINTERVAL_ARRAY: Binary, key = false, VAR, K::Binary;
    POLYGON_ARRAY: Binary, key = false, VAR, K::Binary;
    ACLITEM: Binary, key = false, fixed(12), structured(12);
    ACLITEM_ARRAY: Binary, key = false, VAR, K::Binary;
    MACADDR_ARRAY: Binary, key = false, VAR, K::Binary;
    MACADDR8_ARRAY: Binary, key = false, VAR, K::Binary;
    INET_ARRAY: Binary, key = false, VAR, K::Binary;
    CSTRING_ARRAY: Binary, key = false, VAR, K::Binary;
    BPCHAR: String, key = true, VAR, K::BpChar;
    VARCHAR: String, key = true, VAR, K::VarChar;
    DATE: Int32, key = true, fixed(4), K::Int32;
    TIME: Int64, key = true, fixed(8), K::Int64;
    TIMESTAMP: Int64, key = true, fixed(8), K::Int64;
    TIMESTAMP_ARRAY: Binary, key = false, VAR, K::Binary;
    DATE_ARRAY: Binary, key = false, VAR, K::Binary;
    TIME_ARRAY: Binary, key = false, VAR, K::Binary;
    TIMESTAMPTZ: Int64, key = true, fixed(8), K::Int64;
    TIMESTAMPTZ_ARRAY: Binary, key = false, VAR, K::Binary;
    INTERVAL: Binary, key = false, fixed(16), structured(16);
    INTERVAL_ARRAY: Binary, key = false, VAR, K::Binary;
    NUMERIC_ARRAY: Binary, key = false, VAR, K::Binary;
    TIMETZ: Binary, key = false, fixed(16), structured(16);
    TIMETZ_ARRAY: Binary, key = false, VAR, K::Binary;
    BIT: Binary, key = false, VAR, K::PassThrough;
    BIT_ARRAY: Binary, key = false, VAR, K::Binary;
    VARBIT: Binary, key = false, VAR, K::PassThrough;
    VARBIT_ARRAY: Binary, key = false, VAR, K::Binary;
    NUMERIC: Decimal, key = true, VAR, K::Numeric;
    REFCURSOR: Binary, key = false, VAR, K::PassThrough;
    REGPROCEDURE: UInt32, key = true, fixed(4), K::UInt32;
    REGOPER: UInt32, key = true, fixed(4), K::UInt32;
    REGOPERATOR: UInt32, key = true, fixed(4), K::UInt32;
    REGCLASS: UInt32, key = true, fixed(4), K::UInt32;
    REGTYPE: UInt32, key = true, fixed(4), K::UInt32;
    REGROLE: UInt32, key = true, fixed(4), K::UInt32;
    REGNAMESPACE: UInt32, key = true, fixed(4), K::UInt32;
    REGPROCEDURE_ARRAY: Binary, key = false, VAR, K::Binary;
    REGOPER_ARRAY: Binary, key = false, VAR, K::Binary;
    REGOPERATOR_ARRAY: Binary, key = false, VAR, K::Binary;
    REGCLASS_ARRAY: Binary, key = false, VAR, K::Binary;
    REGTYPE_ARRAY: Binary, key = false, VAR, K::Binary;
    REGROLE_ARRAY: Binary, key = false, VAR, K::Binary;
    REGNAMESPACE_ARRAY: Binary, key = false, VAR, K::Binary;
    /// Stored as its 16 raw bytes; the native width stays variable
    UUID: Binary, key = true, VAR, structured(16);
    UUID_ARRAY: Binary, key = false, VAR, K::Binary;
    PG_LSN: UInt64, key = true, fixed(8), K::UInt64;
    PG_LSN_ARRAY: Binary, key = false, VAR, K::Binary;
    TSVECTOR: Binary, key = false, VAR, K::PassThrough;
    GTSVECTOR: Binary, key = false, VAR, K::PassThrough;
    TSQUERY: Binary, key = false, VAR, K::PassThrough;
    REGCONFIG: UInt32, key = true, fixed(4), K::UInt32;
    REGDICTIONARY: UInt32, key = true, fixed(4), K::UInt32;
    TSVECTOR_ARRAY: Binary, key = false, VAR, K::Binary;
    GTSVECTOR_ARRAY: Binary, key = false, VAR, K::Binary;
    TSQUERY_ARRAY: Binary, key = false, VAR, K::Binary;
    REGCONFIG_ARRAY: Binary, key = false, VAR, K::Binary;
    REGDICTIONARY_ARRAY: Binary, key = false, VAR, K::Binary;
    JSONB: Binary, key = false, VAR, K::Binary;
    JSONB_ARRAY: Binary, key = false, VAR, K::Binary;
    TXID_SNAPSHOT: Binary, key = false, VAR, K::Binary;
    TXID_SNAPSHOT_ARRAY: Binary, key = false, VAR, K::Binary;
    INT4RANGE: Binary, key = false, VAR, K::Binary;
    INT4RANGE_ARRAY: Binary, key = false, VAR, K::Binary;
    NUMRANGE: Binary, key = false, VAR, K::Binary;
    NUMRANGE_ARRAY: Binary, key = false, VAR, K::Binary;
    TSRANGE: Binary, key = false, VAR, K::Binary;
    TSRANGE_ARRAY: Binary, key = false, VAR, K::Binary;
    TSTZRANGE: Binary, key = false, VAR, K::Binary;
    TSTZRANGE_ARRAY: Binary, key = false, VAR, K::Binary;
    DATERANGE: Binary, key = false, VAR, K::Binary;
    DATERANGE_ARRAY: Binary, key = false, VAR, K::Binary;
    INT8RANGE: Binary, key = false, VAR, K::Binary;
    INT8RANGE_ARRAY: Binary, key = false, VAR, K::Binary;
    /// Target of every composite type
    RECORD: Binary, key = false, VAR, K::PassThrough;
    RECORD_ARRAY: Binary, key = false, VAR, K::PassThrough;
    CSTRING: String, key = true, CSTR, K::CString;
    ANYARRAY: Binary, key = false, VAR, K::Binary;
    VOID: Int64, key = true, fixed(8), K::Int64;
    TRIGGER: UInt32, key = true, fixed(4), K::UInt32;
    EVENT_TRIGGER: UInt32, key = true, fixed(4), K::UInt32;
    LANGUAGE_HANDLER: UInt32, key = true, fixed(4), K::UInt32;
    INTERNAL: Int64, key = true, fixed(8), K::Int64;
    OPAQUE: Int32, key = true, fixed(4), K::Int32;
    ANYELEMENT: Int32, key = true, fixed(4), K::Int32;
    ANYNONARRAY: Int32, key = true, fixed(4), K::Int32;
    /// Target of every enumeration type
    ANYENUM: Int64, key = true, fixed(8), K::Enum;
    FDW_HANDLER: UInt32, key = true, fixed(4), K::UInt32;
    INDEX_AM_HANDLER: UInt32, key = true, fixed(4), K::UInt32;
    TSM_HANDLER: UInt32, key = true, fixed(4), K::UInt32;
    /// Target of every range type
    ANYRANGE: Binary, key = false, VAR, K::PassThrough;
}

/// Fixed-length, pass-by-value user-defined types
pub const FIXED_LEN_BY_VAL: Codec =
    Codec::placeholder("fixed_len_by_val", StorageTag::Int64, false, fixed(8), K::Int64);

/// Null-terminated, pass-by-reference user-defined types
pub const NULL_TERM_BY_REF: Codec =
    Codec::placeholder("null_term_by_ref", StorageTag::Binary, false, CSTR, K::CString);

/// Variable-length, pass-by-reference user-defined types
pub const VAR_LEN_BY_REF: Codec =
    Codec::placeholder("var_len_by_ref", StorageTag::Binary, false, VAR, K::Binary);

/// Null categories of inverted-index entries, one unsigned byte each
pub const GIN_NULL: Codec =
    Codec::placeholder("gin_null", StorageTag::GinNull, true, fixed(1), K::GinNull);
