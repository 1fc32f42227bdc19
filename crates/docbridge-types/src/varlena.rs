//! Variable-length values with a self-describing header
//!
//! A varlena image starts with a 4-byte little-endian header whose upper 30 bits hold the payload
//! length. The low two bits are zero for the plain, uncompressed layout, which is the only layout
//! this layer produces or accepts.

use docbridge_diagnostics::{DocError, Result};
use std::fmt;

/// Size of the varlena header in bytes
pub const VARHDRSZ: usize = 4;

/// Largest payload the storage boundary accepts: 1 GiB minus the header
pub const MAX_VARLENA_PAYLOAD: usize = 1024 * 1024 * 1024 - VARHDRSZ;

/// Total image size, header included, implied by a varlena header
pub fn varsize_from_header(image: &[u8]) -> Option<usize> {
    let header: [u8; VARHDRSZ] = image.get(..VARHDRSZ)?.try_into().ok()?;
    let raw = u32::from_le_bytes(header);
    if raw & 0b11 != 0 {
        return None;
    }
    Some((raw >> 2) as usize + VARHDRSZ)
}

/// An owned varlena image (header and payload)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Varlena {
    image: Vec<u8>,
}

impl Varlena {
    /// Build a varlena around a payload
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let len = match u32::try_from(payload.len()) {
            Ok(len) if payload.len() <= MAX_VARLENA_PAYLOAD => len,
            _ => return Err(DocError::right_truncation("Invalid data size")),
        };
        let mut image = Vec::with_capacity(payload.len() + VARHDRSZ);
        image.extend_from_slice(&(len << 2).to_le_bytes());
        image.extend_from_slice(payload);
        Ok(Self { image })
    }

    /// Adopt a complete image, validating its header against its length
    pub fn from_image(image: Vec<u8>) -> Result<Self> {
        match varsize_from_header(&image) {
            Some(size) if size == image.len() => Ok(Self { image }),
            Some(size) => Err(DocError::data_corrupted(format!(
                "varlena header declares {} bytes but {} are present",
                size,
                image.len()
            ))),
            None => Err(DocError::data_corrupted("invalid varlena header")),
        }
    }

    /// The value without its header
    pub fn payload(&self) -> &[u8] {
        &self.image[VARHDRSZ..]
    }

    /// The full image including the header
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    /// Total size including the header
    pub fn total_size(&self) -> usize {
        self.image.len()
    }

    /// Payload as UTF-8 text, if valid
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.payload()).ok()
    }
}

impl fmt::Debug for Varlena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "Varlena({:?})", text),
            None => write!(f, "Varlena({} bytes)", self.payload().len()),
        }
    }
}
