//! Arbitrary-precision numeric values

use crate::TypeAttrs;
use docbridge_diagnostics::{DocError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Native numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeric {
    Finite(Decimal),
    NaN,
}

impl Numeric {
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }

    /// Canonical decimal text with trailing fractional zeros removed
    ///
    /// `None` for NaN, which has no decimal form.
    pub fn normalized_text(&self) -> Option<String> {
        match self {
            Self::Finite(value) => Some(value.normalize().to_string()),
            Self::NaN => None,
        }
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Self::Finite(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{}", value),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

fn invalid_syntax(text: &str) -> DocError {
    DocError::invalid_text(format!(
        "invalid input syntax for type numeric: \"{}\"",
        text
    ))
}

/// Parse numeric text and apply the column's precision and scale
///
/// Values are rounded half away from zero to the declared scale; a value whose integral part
/// needs more than `precision - scale` digits fails with a numeric-out-of-range error.
pub fn numeric_in(text: &str, attrs: &TypeAttrs) -> Result<Numeric> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return Ok(Numeric::NaN);
    }

    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    let value = parsed.map_err(|err| match err {
        rust_decimal::Error::ExceedsMaximumPossibleValue
        | rust_decimal::Error::LessThanMinimumPossibleValue => {
            DocError::numeric_out_of_range("value overflows numeric format")
        }
        _ => invalid_syntax(text),
    })?;

    let Some((precision, scale)) = attrs.numeric_precision_scale() else {
        return Ok(Numeric::Finite(value));
    };

    let rounded = value.round_dp_with_strategy(u32::from(scale), RoundingStrategy::MidpointAwayFromZero);
    let max_integral = usize::from(precision.saturating_sub(scale));
    if integral_digits(&rounded) > max_integral {
        return Err(DocError::numeric_out_of_range(format!(
            "numeric field overflow: a field with precision {}, scale {} must round to an absolute value less than 10^{}",
            precision, scale, max_integral
        )));
    }
    Ok(Numeric::Finite(rounded))
}

fn integral_digits(value: &Decimal) -> usize {
    let integral = value.abs().trunc();
    if integral.is_zero() {
        0
    } else {
        integral.normalize().to_string().len()
    }
}
