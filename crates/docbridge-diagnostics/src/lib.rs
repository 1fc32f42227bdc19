//! Docbridge diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by every docbridge crate,
//! including SQLSTATE codes, the conversion/resolution error type and diagnostic rendering.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for docbridge operations
pub type Result<T> = std::result::Result<T, DocError>;
