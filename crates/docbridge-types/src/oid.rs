//! Relational type identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Object identifier of a relational type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeOid(pub u32);

impl TypeOid {
    /// The invalid type identifier
    pub const INVALID: TypeOid = TypeOid(0);

    /// Raw numeric identifier
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Check whether this is the invalid identifier
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TypeOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TypeOid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

macro_rules! builtin_types {
    ($($(#[$meta:meta])* $konst:ident = $value:literal => $sql:literal;)*) => {
        impl TypeOid {
            $($(#[$meta])* pub const $konst: TypeOid = TypeOid($value);)*

            /// SQL name of a built-in type
            pub const fn builtin_name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($sql),)*
                    _ => None,
                }
            }

            /// Look up a built-in type by its SQL name
            pub fn from_builtin_name(name: &str) -> Option<TypeOid> {
                match name {
                    $($sql => Some(TypeOid($value)),)*
                    _ => None,
                }
            }
        }
    };
}

builtin_types! {
    BOOL = 16 => "bool";
    BYTEA = 17 => "bytea";
    /// Single-byte internal `"char"` type
    CHAR = 18 => "char";
    NAME = 19 => "name";
    INT8 = 20 => "int8";
    INT2 = 21 => "int2";
    INT2VECTOR = 22 => "int2vector";
    INT4 = 23 => "int4";
    REGPROC = 24 => "regproc";
    TEXT = 25 => "text";
    OID = 26 => "oid";
    TID = 27 => "tid";
    XID = 28 => "xid";
    CID = 29 => "cid";
    OIDVECTOR = 30 => "oidvector";
    PG_DDL_COMMAND = 32 => "pg_ddl_command";
    JSON = 114 => "json";
    XML = 142 => "xml";
    XML_ARRAY = 143 => "_xml";
    PG_NODE_TREE = 194 => "pg_node_tree";
    JSON_ARRAY = 199 => "_json";
    SMGR = 210 => "smgr";
    INDEX_AM_HANDLER = 325 => "index_am_handler";
    POINT = 600 => "point";
    LSEG = 601 => "lseg";
    PATH = 602 => "path";
    BOX = 603 => "box";
    POLYGON = 604 => "polygon";
    LINE = 628 => "line";
    LINE_ARRAY = 629 => "_line";
    CIDR = 650 => "cidr";
    CIDR_ARRAY = 651 => "_cidr";
    FLOAT4 = 700 => "float4";
    FLOAT8 = 701 => "float8";
    ABSTIME = 702 => "abstime";
    RELTIME = 703 => "reltime";
    TINTERVAL = 704 => "tinterval";
    UNKNOWN = 705 => "unknown";
    CIRCLE = 718 => "circle";
    CIRCLE_ARRAY = 719 => "_circle";
    MACADDR8 = 774 => "macaddr8";
    MACADDR8_ARRAY = 775 => "_macaddr8";
    MONEY = 790 => "money";
    MONEY_ARRAY = 791 => "_money";
    MACADDR = 829 => "macaddr";
    INET = 869 => "inet";
    BOOL_ARRAY = 1000 => "_bool";
    BYTEA_ARRAY = 1001 => "_bytea";
    CHAR_ARRAY = 1002 => "_char";
    NAME_ARRAY = 1003 => "_name";
    INT2_ARRAY = 1005 => "_int2";
    INT2VECTOR_ARRAY = 1006 => "_int2vector";
    INT4_ARRAY = 1007 => "_int4";
    REGPROC_ARRAY = 1008 => "_regproc";
    TEXT_ARRAY = 1009 => "_text";
    TID_ARRAY = 1010 => "_tid";
    XID_ARRAY = 1011 => "_xid";
    CID_ARRAY = 1012 => "_cid";
    OIDVECTOR_ARRAY = 1013 => "_oidvector";
    BPCHAR_ARRAY = 1014 => "_bpchar";
    VARCHAR_ARRAY = 1015 => "_varchar";
    INT8_ARRAY = 1016 => "_int8";
    POINT_ARRAY = 1017 => "_point";
    LSEG_ARRAY = 1018 => "_lseg";
    PATH_ARRAY = 1019 => "_path";
    BOX_ARRAY = 1020 => "_box";
    FLOAT4_ARRAY = 1021 => "_float4";
    FLOAT8_ARRAY = 1022 => "_float8";
    ABSTIME_ARRAY = 1023 => "_abstime";
    RELTIME_ARRAY = 1024 => "_reltime";
    TINTERVAL_ARRAY = 1025 => "_tinterval";
    POLYGON_ARRAY = 1027 => "_polygon";
    OID_ARRAY = 1028 => "_oid";
    ACLITEM = 1033 => "aclitem";
    ACLITEM_ARRAY = 1034 => "_aclitem";
    MACADDR_ARRAY = 1040 => "_macaddr";
    INET_ARRAY = 1041 => "_inet";
    /// Blank-padded `character(n)`
    BPCHAR = 1042 => "bpchar";
    VARCHAR = 1043 => "varchar";
    DATE = 1082 => "date";
    TIME = 1083 => "time";
    TIMESTAMP = 1114 => "timestamp";
    TIMESTAMP_ARRAY = 1115 => "_timestamp";
    DATE_ARRAY = 1182 => "_date";
    TIME_ARRAY = 1183 => "_time";
    TIMESTAMPTZ = 1184 => "timestamptz";
    TIMESTAMPTZ_ARRAY = 1185 => "_timestamptz";
    INTERVAL = 1186 => "interval";
    INTERVAL_ARRAY = 1187 => "_interval";
    NUMERIC_ARRAY = 1231 => "_numeric";
    CSTRING_ARRAY = 1263 => "_cstring";
    TIMETZ = 1266 => "timetz";
    TIMETZ_ARRAY = 1270 => "_timetz";
    BIT = 1560 => "bit";
    BIT_ARRAY = 1561 => "_bit";
    VARBIT = 1562 => "varbit";
    VARBIT_ARRAY = 1563 => "_varbit";
    NUMERIC = 1700 => "numeric";
    REFCURSOR = 1790 => "refcursor";
    REGPROCEDURE = 2202 => "regprocedure";
    REGOPER = 2203 => "regoper";
    REGOPERATOR = 2204 => "regoperator";
    REGCLASS = 2205 => "regclass";
    REGTYPE = 2206 => "regtype";
    REGPROCEDURE_ARRAY = 2207 => "_regprocedure";
    REGOPER_ARRAY = 2208 => "_regoper";
    REGOPERATOR_ARRAY = 2209 => "_regoperator";
    REGCLASS_ARRAY = 2210 => "_regclass";
    REGTYPE_ARRAY = 2211 => "_regtype";
    /// Generic placeholder for composite types
    RECORD = 2249 => "record";
    CSTRING = 2275 => "cstring";
    ANYARRAY = 2277 => "anyarray";
    VOID = 2278 => "void";
    TRIGGER = 2279 => "trigger";
    LANGUAGE_HANDLER = 2280 => "language_handler";
    INTERNAL = 2281 => "internal";
    OPAQUE = 2282 => "opaque";
    ANYELEMENT = 2283 => "anyelement";
    RECORD_ARRAY = 2287 => "_record";
    ANYNONARRAY = 2776 => "anynonarray";
    TXID_SNAPSHOT_ARRAY = 2949 => "_txid_snapshot";
    UUID = 2950 => "uuid";
    UUID_ARRAY = 2951 => "_uuid";
    TXID_SNAPSHOT = 2970 => "txid_snapshot";
    FDW_HANDLER = 3115 => "fdw_handler";
    PG_LSN = 3220 => "pg_lsn";
    PG_LSN_ARRAY = 3221 => "_pg_lsn";
    TSM_HANDLER = 3310 => "tsm_handler";
    PG_NDISTINCT = 3361 => "pg_ndistinct";
    PG_DEPENDENCIES = 3402 => "pg_dependencies";
    /// Generic placeholder for enumeration types
    ANYENUM = 3500 => "anyenum";
    TSVECTOR = 3614 => "tsvector";
    TSQUERY = 3615 => "tsquery";
    GTSVECTOR = 3642 => "gtsvector";
    TSVECTOR_ARRAY = 3643 => "_tsvector";
    GTSVECTOR_ARRAY = 3644 => "_gtsvector";
    TSQUERY_ARRAY = 3645 => "_tsquery";
    REGCONFIG = 3734 => "regconfig";
    REGCONFIG_ARRAY = 3735 => "_regconfig";
    REGDICTIONARY = 3769 => "regdictionary";
    REGDICTIONARY_ARRAY = 3770 => "_regdictionary";
    JSONB = 3802 => "jsonb";
    JSONB_ARRAY = 3807 => "_jsonb";
    /// Generic placeholder for range types
    ANYRANGE = 3831 => "anyrange";
    EVENT_TRIGGER = 3838 => "event_trigger";
    INT4RANGE = 3904 => "int4range";
    INT4RANGE_ARRAY = 3905 => "_int4range";
    NUMRANGE = 3906 => "numrange";
    NUMRANGE_ARRAY = 3907 => "_numrange";
    TSRANGE = 3908 => "tsrange";
    TSRANGE_ARRAY = 3909 => "_tsrange";
    TSTZRANGE = 3910 => "tstzrange";
    TSTZRANGE_ARRAY = 3911 => "_tstzrange";
    DATERANGE = 3912 => "daterange";
    DATERANGE_ARRAY = 3913 => "_daterange";
    INT8RANGE = 3926 => "int8range";
    INT8RANGE_ARRAY = 3927 => "_int8range";
    REGNAMESPACE = 4089 => "regnamespace";
    REGNAMESPACE_ARRAY = 4090 => "_regnamespace";
    REGROLE = 4096 => "regrole";
    REGROLE_ARRAY = 4097 => "_regrole";
}
