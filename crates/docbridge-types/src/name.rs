//! Fixed-width identifier values

use std::fmt;

/// Width of the identifier buffer, including the terminating zero byte
pub const NAMEDATALEN: usize = 64;

/// Number of bytes of the longest identifier that still fits
pub const MAX_IDENTIFIER_LEN: usize = NAMEDATALEN - 1;

/// Longest prefix of `data` that holds at most `limit` bytes and ends on a UTF-8 character
/// boundary
pub fn clip_at_char_boundary(data: &[u8], limit: usize) -> usize {
    if data.len() <= limit {
        return data.len();
    }
    let mut end = limit;
    // Step back over continuation bytes (10xxxxxx) so a multi-byte character is never split.
    while end > 0 && data[end] & 0xC0 == 0x80 {
        end -= 1;
    }
    end
}

/// Zero-padded identifier buffer
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameData([u8; NAMEDATALEN]);

impl NameData {
    /// Build a name, truncating oversize input at a character boundary
    pub fn from_bytes_clipped(data: &[u8]) -> Self {
        let len = clip_at_char_boundary(data, MAX_IDENTIFIER_LEN);
        let mut buf = [0u8; NAMEDATALEN];
        buf[..len].copy_from_slice(&data[..len]);
        Self(buf)
    }

    /// The identifier bytes up to the first zero byte
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(NAMEDATALEN);
        &self.0[..len]
    }

    /// The whole fixed-width buffer
    pub fn raw(&self) -> &[u8; NAMEDATALEN] {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

impl fmt::Debug for NameData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameData({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}
