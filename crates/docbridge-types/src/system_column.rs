//! System columns
//!
//! System columns are addressed by negative attribute numbers and have no relational type of
//! their own in the column definition; each one is stored with a fixed type.

use crate::TypeOid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column index within a relation; negative values denote system columns
pub type AttrNumber = i16;

/// Attribute number that addresses no column
pub const INVALID_ATTR_NUMBER: AttrNumber = 0;

/// The fixed set of system columns understood by the type layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemColumn {
    /// `ctid`: row version marker
    SelfItemPointer,
    /// `oid`
    ObjectId,
    /// `xmin`
    MinTransactionId,
    /// `cmin`
    MinCommandId,
    /// `xmax`
    MaxTransactionId,
    /// `cmax`
    MaxCommandId,
    /// `tableoid`
    TableOid,
    /// `ybctid`: internal row key
    TupleId,
    /// `ybidxbasectid`: row key of the indexed base row
    IndexBaseTupleId,
    /// `ybuniqueidxkeysuffix`: suffix that keeps unique index keys distinct
    UniqueIndexKeySuffix,
}

impl SystemColumn {
    /// All system columns in attribute-number order
    pub const ALL: [SystemColumn; 10] = [
        Self::SelfItemPointer,
        Self::ObjectId,
        Self::MinTransactionId,
        Self::MinCommandId,
        Self::MaxTransactionId,
        Self::MaxCommandId,
        Self::TableOid,
        Self::TupleId,
        Self::IndexBaseTupleId,
        Self::UniqueIndexKeySuffix,
    ];

    /// Map a negative attribute number to its system column
    pub const fn from_attnum(attnum: AttrNumber) -> Option<SystemColumn> {
        match attnum {
            -1 => Some(Self::SelfItemPointer),
            -2 => Some(Self::ObjectId),
            -3 => Some(Self::MinTransactionId),
            -4 => Some(Self::MinCommandId),
            -5 => Some(Self::MaxTransactionId),
            -6 => Some(Self::MaxCommandId),
            -7 => Some(Self::TableOid),
            -8 => Some(Self::TupleId),
            -9 => Some(Self::IndexBaseTupleId),
            -10 => Some(Self::UniqueIndexKeySuffix),
            _ => None,
        }
    }

    /// The attribute number of this column
    pub const fn attnum(self) -> AttrNumber {
        match self {
            Self::SelfItemPointer => -1,
            Self::ObjectId => -2,
            Self::MinTransactionId => -3,
            Self::MinCommandId => -4,
            Self::MaxTransactionId => -5,
            Self::MaxCommandId => -6,
            Self::TableOid => -7,
            Self::TupleId => -8,
            Self::IndexBaseTupleId => -9,
            Self::UniqueIndexKeySuffix => -10,
        }
    }

    /// The relational type this column is stored as
    pub const fn type_oid(self) -> TypeOid {
        match self {
            Self::SelfItemPointer => TypeOid::TID,
            Self::ObjectId | Self::TableOid => TypeOid::OID,
            Self::MinCommandId | Self::MaxCommandId => TypeOid::CID,
            Self::MinTransactionId | Self::MaxTransactionId => TypeOid::XID,
            Self::TupleId | Self::IndexBaseTupleId | Self::UniqueIndexKeySuffix => TypeOid::BYTEA,
        }
    }

    /// Column name as it appears in SQL
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::SelfItemPointer => "ctid",
            Self::ObjectId => "oid",
            Self::MinTransactionId => "xmin",
            Self::MinCommandId => "cmin",
            Self::MaxTransactionId => "xmax",
            Self::MaxCommandId => "cmax",
            Self::TableOid => "tableoid",
            Self::TupleId => "ybctid",
            Self::IndexBaseTupleId => "ybidxbasectid",
            Self::UniqueIndexKeySuffix => "ybuniqueidxkeysuffix",
        }
    }
}

impl fmt::Display for SystemColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attnum_roundtrip() {
        for column in SystemColumn::ALL {
            assert_eq!(SystemColumn::from_attnum(column.attnum()), Some(column));
        }
    }

    #[test]
    fn test_unknown_attnums() {
        assert_eq!(SystemColumn::from_attnum(INVALID_ATTR_NUMBER), None);
        assert_eq!(SystemColumn::from_attnum(-11), None);
        assert_eq!(SystemColumn::from_attnum(3), None);
    }

    #[test]
    fn test_fixed_types() {
        assert_eq!(SystemColumn::SelfItemPointer.type_oid(), TypeOid::TID);
        assert_eq!(SystemColumn::TableOid.type_oid(), TypeOid::OID);
        assert_eq!(SystemColumn::MaxCommandId.type_oid(), TypeOid::CID);
        assert_eq!(SystemColumn::MinTransactionId.type_oid(), TypeOid::XID);
        assert_eq!(SystemColumn::TupleId.type_oid(), TypeOid::BYTEA);
    }
}
