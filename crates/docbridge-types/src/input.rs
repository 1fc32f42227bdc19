//! Input parsers of the target representations
//!
//! These run when a value comes back from storage and has to be re-shaped to the column's
//! declared width, the same way the relational layer would parse it from text.

use crate::{TypeAttrs, Varlena};
use docbridge_diagnostics::{DocError, Result};

/// Split `text` after `max_chars` characters
fn split_at_chars(text: &str, max_chars: usize) -> (&str, &str) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text.split_at(idx),
        None => (text, ""),
    }
}

/// Enforce a declared character length, allowing only spaces to be cut off
fn fit_declared_length<'a>(text: &'a str, max_chars: usize, type_name: &str) -> Result<&'a str> {
    let (kept, excess) = split_at_chars(text, max_chars);
    if excess.bytes().any(|b| b != b' ') {
        return Err(DocError::right_truncation(format!(
            "value too long for type {}({})",
            type_name, max_chars
        )));
    }
    Ok(kept)
}

/// Parse a blank-padded `character(n)` value
///
/// Shorter input is padded with spaces to `n` characters; longer input is accepted only when
/// the excess characters are all spaces.
pub fn bpchar_in(text: &str, attrs: &TypeAttrs) -> Result<Varlena> {
    let Some(max_chars) = attrs.char_length() else {
        return Varlena::from_payload(text.as_bytes());
    };

    let kept = fit_declared_length(text, max_chars, "character")?;
    let pad = max_chars.saturating_sub(kept.chars().count());
    let mut padded = String::with_capacity(kept.len() + pad);
    padded.push_str(kept);
    padded.extend(std::iter::repeat_n(' ', pad));
    Varlena::from_payload(padded.as_bytes())
}

/// Parse a `character varying(n)` value
pub fn varchar_in(text: &str, attrs: &TypeAttrs) -> Result<Varlena> {
    let kept = match attrs.char_length() {
        Some(max_chars) => fit_declared_length(text, max_chars, "character varying")?,
        None => text,
    };
    Varlena::from_payload(kept.as_bytes())
}

/// Parse a null-terminated string, stopping at the first zero byte
pub fn cstring_in(data: &[u8]) -> Result<String> {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8(data[..end].to_vec())
        .map_err(|_| DocError::invalid_text("invalid byte sequence for encoding \"UTF8\""))
}
