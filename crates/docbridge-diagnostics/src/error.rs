//! Docbridge error types

use crate::{
    DATA_CORRUPTED, FEATURE_NOT_SUPPORTED, INTERNAL_ERROR, INVALID_TEXT_REPRESENTATION,
    NUMERIC_VALUE_OUT_OF_RANGE, STRING_DATA_RIGHT_TRUNCATION, SqlState,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The statement cannot proceed
    Error,
    /// Potential issue but conversion continued
    Warning,
    /// Informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A rendered diagnostic message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// SQLSTATE code
    pub code: SqlState,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: SqlState, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: SqlState, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colours
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
            Severity::Info => self.severity.to_string().blue().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code.to_string().cyan(), self.message);
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// Errors raised while resolving a type or converting a value across the storage boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocError {
    /// Unsupported system column, type category, deprecated type or NaN decimal
    #[error("{message}")]
    FeatureNotSupported { message: String },

    /// String or binary payload exceeds the representable size, has a negative length, or does
    /// not fit the declared width
    #[error("{message}")]
    DataRightTruncation { message: String },

    /// Numeric value does not fit the declared precision
    #[error("{message}")]
    NumericValueOutOfRange { message: String },

    /// Text could not be parsed by a type input function
    #[error("{message}")]
    InvalidTextRepresentation { message: String },

    /// Stored bytes do not have the shape the type requires
    #[error("{message}")]
    DataCorrupted { message: String },

    /// Failure reported by the catalog collaborator
    #[error("{code}: {message}")]
    Catalog { code: SqlState, message: String },

    /// Invariant violation on the caller side
    #[error("{message}")]
    Internal { message: String },
}

impl DocError {
    /// Create a feature-not-supported error
    pub fn feature_not_supported(message: impl Into<String>) -> Self {
        Self::FeatureNotSupported {
            message: message.into(),
        }
    }

    /// Create a right-truncation error
    pub fn right_truncation(message: impl Into<String>) -> Self {
        Self::DataRightTruncation {
            message: message.into(),
        }
    }

    /// Create a numeric-out-of-range error
    pub fn numeric_out_of_range(message: impl Into<String>) -> Self {
        Self::NumericValueOutOfRange {
            message: message.into(),
        }
    }

    /// Create an invalid-text-representation error
    pub fn invalid_text(message: impl Into<String>) -> Self {
        Self::InvalidTextRepresentation {
            message: message.into(),
        }
    }

    /// Create a data-corrupted error
    pub fn data_corrupted(message: impl Into<String>) -> Self {
        Self::DataCorrupted {
            message: message.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(code: SqlState, message: impl Into<String>) -> Self {
        Self::Catalog {
            code,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the SQLSTATE code
    pub fn code(&self) -> SqlState {
        match self {
            Self::FeatureNotSupported { .. } => FEATURE_NOT_SUPPORTED,
            Self::DataRightTruncation { .. } => STRING_DATA_RIGHT_TRUNCATION,
            Self::NumericValueOutOfRange { .. } => NUMERIC_VALUE_OUT_OF_RANGE,
            Self::InvalidTextRepresentation { .. } => INVALID_TEXT_REPRESENTATION,
            Self::DataCorrupted { .. } => DATA_CORRUPTED,
            Self::Catalog { code, .. } => *code,
            Self::Internal { .. } => INTERNAL_ERROR,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match self {
            Self::Catalog { code, message } => Diagnostic::error(*code, message.clone()),
            other => Diagnostic::error(other.code(), other.to_string()),
        };
        match self {
            Self::FeatureNotSupported { .. } => {
                diag.with_help("the type layer has no storage mapping for this input")
            }
            Self::Internal { .. } => diag.with_help("this indicates a caller bug"),
            _ => diag,
        }
    }
}
