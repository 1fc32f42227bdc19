//! Opaque pass-through and fixed-size structured values
//!
//! Both families store the value's in-memory image unchanged. Storage buffers may be released
//! as soon as a row has been processed, so values read back are always copied into memory the
//! returned `Datum` owns.

use super::span;
use crate::codec::{Codec, datum_mismatch};
use docbridge_diagnostics::{DocError, Result};
use docbridge_types::{Datum, DatumWidth, StorageBytes, Varlena, varsize_from_header};

pub(crate) fn structured_to_storage<'d>(
    codec: &Codec,
    datum: &'d Datum,
    size: usize,
) -> Result<StorageBytes<'d>> {
    match datum {
        Datum::FixedRef(bytes) if bytes.len() == size => Ok(StorageBytes::Borrowed(bytes)),
        Datum::FixedRef(bytes) => Err(DocError::internal(format!(
            "{} value holds {} bytes, expected {}",
            codec.type_name,
            bytes.len(),
            size
        ))),
        other => Err(datum_mismatch(codec, other)),
    }
}

pub(crate) fn structured_from_storage(
    codec: &Codec,
    data: &[u8],
    declared_len: i64,
    size: usize,
) -> Result<Datum> {
    if usize::try_from(declared_len).ok() != Some(size) {
        return Err(DocError::data_corrupted(format!(
            "Unexpected size for {} ({})",
            codec.type_name, declared_len
        )));
    }
    Ok(Datum::fixed(span(data, size)?))
}

pub(crate) fn pass_through_to_storage<'d>(codec: &Codec, datum: &'d Datum) -> Result<StorageBytes<'d>> {
    match (codec.width, datum) {
        (DatumWidth::Fixed(width), Datum::FixedRef(bytes)) if bytes.len() == width => {
            Ok(StorageBytes::Borrowed(bytes))
        }
        (DatumWidth::Fixed(width), Datum::FixedRef(bytes)) => Err(DocError::internal(format!(
            "{} value holds {} bytes, expected {}",
            codec.type_name,
            bytes.len(),
            width
        ))),
        // Length unknown up front: the value's own header says how many bytes to expose.
        (DatumWidth::VarLen | DatumWidth::NullTerminated, Datum::Varlena(value)) => {
            let image = value.image();
            let size = varsize_from_header(image)
                .filter(|&size| size <= image.len())
                .ok_or_else(|| DocError::data_corrupted("invalid varlena header"))?;
            Ok(StorageBytes::Borrowed(&image[..size]))
        }
        (_, other) => Err(datum_mismatch(codec, other)),
    }
}

pub(crate) fn pass_through_from_storage(codec: &Codec, data: &[u8], declared_len: i64) -> Result<Datum> {
    let len = usize::try_from(declared_len).map_err(|_| {
        DocError::data_corrupted(format!(
            "negative length {} for {}",
            declared_len, codec.type_name
        ))
    })?;
    let bytes = span(data, len)?;
    match codec.width {
        DatumWidth::Fixed(_) => Ok(Datum::fixed(bytes)),
        DatumWidth::VarLen | DatumWidth::NullTerminated => {
            Varlena::from_image(bytes.to_vec()).map(Datum::Varlena)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::{Codec, ConvertContext};
    use crate::table;
    use docbridge_diagnostics::DocError;
    use docbridge_types::{Datum, TypeAttrs, VARHDRSZ, Varlena};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const UUID_BYTES: [u8; 16] = [
        0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x12, 0xd3, 0xa4, 0x56, 0x42, 0x66, 0x14, 0x17, 0x40,
        0x00,
    ];

    fn load(codec: &Codec, bytes: &[u8]) -> Result<Datum, DocError> {
        codec.from_storage(bytes, bytes.len() as i64, &TypeAttrs::UNMODIFIED)
    }

    #[rstest]
    #[case(15)]
    #[case(17)]
    #[case(0)]
    fn test_uuid_size_mismatch(#[case] len: usize) {
        let bytes = vec![0u8; len];
        let err = load(&table::UUID, &bytes).unwrap_err();
        assert_eq!(
            err,
            DocError::data_corrupted(format!("Unexpected size for uuid ({})", len))
        );
    }

    #[test]
    fn test_uuid_exact_size_preserved() {
        let datum = load(&table::UUID, &UUID_BYTES).unwrap();
        assert_eq!(datum, Datum::fixed(&UUID_BYTES));

        let bytes = table::UUID.to_storage(&datum, &ConvertContext::default()).unwrap();
        assert!(bytes.is_borrowed());
        assert_eq!(bytes.as_slice(), &UUID_BYTES[..]);
    }

    #[rstest]
    #[case(table::INTERVAL, 16)]
    #[case(table::TID, 6)]
    #[case(table::POINT, 16)]
    #[case(table::MACADDR, 6)]
    #[case(table::ACLITEM, 12)]
    fn test_structured_sizes(#[case] codec: Codec, #[case] size: usize) {
        assert!(load(&codec, &vec![7u8; size]).is_ok());
        assert!(matches!(
            load(&codec, &vec![7u8; size + 1]),
            Err(DocError::DataCorrupted { .. })
        ));
    }

    #[test]
    fn test_structured_negative_length() {
        let err = table::INTERVAL
            .from_storage(&[0; 16], -1, &TypeAttrs::UNMODIFIED)
            .unwrap_err();
        assert!(matches!(err, DocError::DataCorrupted { .. }));
    }

    #[test]
    fn test_varlen_pass_through_exposes_whole_image() {
        let datum = Datum::Varlena(Varlena::from_payload(br#"{"a":1}"#).unwrap());
        let bytes = table::JSON.to_storage(&datum, &ConvertContext::default()).unwrap();
        assert!(bytes.is_borrowed());
        assert_eq!(bytes.len(), 7 + VARHDRSZ);

        let back = load(&table::JSON, &bytes).unwrap();
        assert_eq!(back, datum);
    }

    #[test]
    fn test_pass_through_copies_out_of_storage_buffer() {
        let mut buffer = Varlena::from_payload(b"path").unwrap().image().to_vec();
        let back = load(&table::PATH, &buffer).unwrap();
        buffer.fill(0);
        let Datum::Varlena(value) = back else {
            panic!("expected a varlena");
        };
        assert_eq!(value.payload(), b"path");
    }

    #[test]
    fn test_pass_through_rejects_bad_header() {
        let err = load(&table::XML, &[1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, DocError::DataCorrupted { .. }));
    }

    #[test]
    fn test_synthesized_fixed_width() {
        let codec = Codec::fixed_by_ref(3);
        let datum = Datum::fixed(&[1, 2, 3]);
        let bytes = codec.to_storage(&datum, &ConvertContext::default()).unwrap();
        assert_eq!(bytes.as_slice(), &[1u8, 2, 3][..]);
        assert_eq!(load(&codec, &bytes).unwrap(), datum);

        let err = codec
            .to_storage(&Datum::fixed(&[1, 2]), &ConvertContext::default())
            .unwrap_err();
        assert!(matches!(err, DocError::Internal { .. }));
    }
}
