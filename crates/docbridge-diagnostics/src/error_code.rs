//! SQLSTATE error codes raised by the type layer
//!
//! Codes follow the SQL standard five-character layout: the first two characters name the
//! class, the last three the condition within it.
//! - 0A: feature not supported
//! - 22: data exception (truncation, out of range, bad text representation)
//! - 42: syntax error or access rule violation (undefined object)
//! - XX: internal error (corruption, invariant violations)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Five-character SQLSTATE code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SqlState([u8; 5]);

impl SqlState {
    /// Create a code from its five ASCII characters
    pub const fn new(code: &[u8; 5]) -> Self {
        Self(*code)
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        // Constructed only from the ASCII literals below.
        std::str::from_utf8(&self.0).unwrap_or("?????")
    }

    /// The two-character class prefix
    pub fn class(&self) -> &str {
        &self.as_str()[..2]
    }

    /// Get descriptive information for this code
    pub fn info(&self) -> &'static SqlStateInfo {
        SQLSTATE_INFO.get(&self.0).unwrap_or(&UNKNOWN_STATE)
    }

    /// Check if this is a data exception (class 22)
    pub const fn is_data_exception(&self) -> bool {
        self.0[0] == b'2' && self.0[1] == b'2'
    }

    /// Check if this is an internal error (class XX)
    pub const fn is_internal(&self) -> bool {
        self.0[0] == b'X' && self.0[1] == b'X'
    }
}

impl fmt::Display for SqlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information about a SQLSTATE code
#[derive(Debug, Clone)]
pub struct SqlStateInfo {
    /// Condition name as used by the SQL layer
    pub condition: &'static str,
    /// Short description of the condition
    pub description: &'static str,
}

impl SqlStateInfo {
    const fn new(condition: &'static str, description: &'static str) -> Self {
        Self {
            condition,
            description,
        }
    }
}

static UNKNOWN_STATE: SqlStateInfo = SqlStateInfo::new("unknown", "Unknown condition");

static SQLSTATE_INFO: LazyLock<HashMap<[u8; 5], SqlStateInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(
        FEATURE_NOT_SUPPORTED.0,
        SqlStateInfo::new("feature_not_supported", "Feature not supported"),
    );
    map.insert(
        STRING_DATA_RIGHT_TRUNCATION.0,
        SqlStateInfo::new("string_data_right_truncation", "String data right truncation"),
    );
    map.insert(
        NUMERIC_VALUE_OUT_OF_RANGE.0,
        SqlStateInfo::new("numeric_value_out_of_range", "Numeric value out of range"),
    );
    map.insert(
        INVALID_TEXT_REPRESENTATION.0,
        SqlStateInfo::new("invalid_text_representation", "Invalid text representation"),
    );
    map.insert(
        UNDEFINED_OBJECT.0,
        SqlStateInfo::new("undefined_object", "Undefined object"),
    );
    map.insert(
        INTERNAL_ERROR.0,
        SqlStateInfo::new("internal_error", "Internal error"),
    );
    map.insert(
        DATA_CORRUPTED.0,
        SqlStateInfo::new("data_corrupted", "Data corrupted"),
    );

    map
});

pub const FEATURE_NOT_SUPPORTED: SqlState = SqlState::new(b"0A000");
pub const STRING_DATA_RIGHT_TRUNCATION: SqlState = SqlState::new(b"22001");
pub const NUMERIC_VALUE_OUT_OF_RANGE: SqlState = SqlState::new(b"22003");
pub const INVALID_TEXT_REPRESENTATION: SqlState = SqlState::new(b"22P02");
pub const UNDEFINED_OBJECT: SqlState = SqlState::new(b"42704");
pub const INTERNAL_ERROR: SqlState = SqlState::new(b"XX000");
pub const DATA_CORRUPTED: SqlState = SqlState::new(b"XX001");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlstate_display() {
        assert_eq!(FEATURE_NOT_SUPPORTED.to_string(), "0A000");
        assert_eq!(DATA_CORRUPTED.to_string(), "XX001");
    }

    #[test]
    fn test_sqlstate_classes() {
        assert!(STRING_DATA_RIGHT_TRUNCATION.is_data_exception());
        assert!(NUMERIC_VALUE_OUT_OF_RANGE.is_data_exception());
        assert!(!FEATURE_NOT_SUPPORTED.is_data_exception());

        assert!(DATA_CORRUPTED.is_internal());
        assert!(INTERNAL_ERROR.is_internal());
        assert_eq!(UNDEFINED_OBJECT.class(), "42");
    }

    #[test]
    fn test_sqlstate_info() {
        assert_eq!(
            STRING_DATA_RIGHT_TRUNCATION.info().condition,
            "string_data_right_truncation"
        );
        assert_eq!(SqlState::new(b"99999").info().condition, "unknown");
    }
}
