//! Tag field records: per-field metadata and posting keys.

use crate::error::{EncodingError, Result};
use crate::index::types::SubkeyType;
use crate::utils::{put_fixed8, put_sized_bytes, sized_bytes_len, ByteReader};
use serde::{Deserialize, Serialize};

/// Key of a tag field's metadata record: `[0x41] + field_name`.
///
/// The field name runs to the end of the key, so it is not length-prefixed.
pub fn tag_field_metadata_subkey(field_name: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + field_name.len());
    key.push(SubkeyType::TagFieldMeta.as_byte());
    key.extend_from_slice(field_name);
    key
}

/// How a tag field splits and compares its values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFieldMetadata {
    pub separator: u8,
    pub case_sensitive: bool,
}

impl Default for TagFieldMetadata {
    fn default() -> Self {
        Self {
            separator: b',',
            case_sensitive: false,
        }
    }
}

impl TagFieldMetadata {
    /// Encoded size; the record is always exactly this long
    pub const SIZE: usize = 1 + 1;

    pub fn new(separator: u8, case_sensitive: bool) -> Self {
        Self {
            separator,
            case_sensitive,
        }
    }

    pub fn encode(&self, dst: &mut Vec<u8>) {
        put_fixed8(dst, self.separator);
        put_fixed8(dst, self.case_sensitive as u8);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        self.encode(&mut buf);
        buf
    }

    /// Decode both fields or fail; there is no partial record.
    pub fn decode(input: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(input);
        if reader.remaining() < Self::SIZE {
            return Err(EncodingError::insufficient_length());
        }

        let separator = reader.get_fixed8().ok_or_else(EncodingError::insufficient_length)?;
        let flag = reader.get_fixed8().ok_or_else(EncodingError::insufficient_length)?;

        Ok(Self {
            separator,
            case_sensitive: flag != 0,
        })
    }
}

/// Key asserting that `doc_key` carries `tag` in `field_name`:
/// `[0x81] + sized(field_name) + sized(tag) + sized(doc_key)`.
///
/// The length prefixes keep `("f", "ab", "k1")` apart from `("f", "a", "bk1")`
/// and stop a field scan from running into a field whose name extends it.
pub fn tag_field_subkey(field_name: &[u8], tag: &[u8], doc_key: &[u8]) -> Result<Vec<u8>> {
    let mut key = Vec::with_capacity(
        1 + sized_bytes_len(field_name) + sized_bytes_len(tag) + sized_bytes_len(doc_key),
    );
    key.push(SubkeyType::TagField.as_byte());
    put_sized_bytes(&mut key, field_name)?;
    put_sized_bytes(&mut key, tag)?;
    put_sized_bytes(&mut key, doc_key)?;
    Ok(key)
}

/// Components of a posting key, recovered for inspection.
///
/// Storage never needs this; scans interpret keys by the prefix they scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPosting {
    pub field_name: Vec<u8>,
    pub tag: Vec<u8>,
    pub doc_key: Vec<u8>,
}

impl TagPosting {
    pub fn new(field_name: &[u8], tag: &[u8], doc_key: &[u8]) -> Self {
        Self {
            field_name: field_name.to_vec(),
            tag: tag.to_vec(),
            doc_key: doc_key.to_vec(),
        }
    }

    pub fn to_key(&self) -> Result<Vec<u8>> {
        tag_field_subkey(&self.field_name, &self.tag, &self.doc_key)
    }

    pub fn parse(key: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(key);
        match reader.get_fixed8() {
            Some(b) if b == SubkeyType::TagField.as_byte() => {}
            other => return Err(EncodingError::UnknownSubkey(other)),
        }

        let field_name = reader.get_sized_bytes()?;
        let tag = reader.get_sized_bytes()?;
        let doc_key = reader.get_sized_bytes()?;
        if !reader.is_empty() {
            return Err(EncodingError::Corruption("trailing bytes after posting key"));
        }

        Ok(Self::new(field_name, tag, doc_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_subkey() {
        assert_eq!(tag_field_metadata_subkey(b"tags"), b"\x41tags".to_vec());
        assert_eq!(tag_field_metadata_subkey(b"tags"), tag_field_metadata_subkey(b"tags"));
        assert_eq!(tag_field_metadata_subkey(b""), vec![0x41]);
    }

    #[test]
    fn test_metadata_encode() {
        assert_eq!(TagFieldMetadata::new(b',', false).to_bytes(), vec![b',', 0]);
        assert_eq!(TagFieldMetadata::new(b'|', true).to_bytes(), vec![b'|', 1]);
    }

    #[test]
    fn test_metadata_decode() {
        let meta = TagFieldMetadata::decode(&[b'|', 1]).unwrap();
        assert_eq!(meta, TagFieldMetadata::new(b'|', true));

        for meta in [
            TagFieldMetadata::default(),
            TagFieldMetadata::new(b';', true),
            TagFieldMetadata::new(0, false),
        ] {
            assert_eq!(TagFieldMetadata::decode(&meta.to_bytes()).unwrap(), meta);
        }
    }

    #[test]
    fn test_metadata_too_short() {
        assert!(TagFieldMetadata::decode(&[]).unwrap_err().is_corruption());
        assert!(TagFieldMetadata::decode(&[b',']).unwrap_err().is_corruption());
    }

    #[test]
    fn test_metadata_nonzero_flag_is_true() {
        let meta = TagFieldMetadata::decode(&[b',', 7]).unwrap();
        assert!(meta.case_sensitive);
    }

    #[test]
    fn test_posting_key_layout() {
        let key = tag_field_subkey(b"tags", b"red", b"doc42").unwrap();
        let mut expected = vec![0x81];
        expected.extend_from_slice(&[0, 0, 0, 4]);
        expected.extend_from_slice(b"tags");
        expected.extend_from_slice(&[0, 0, 0, 3]);
        expected.extend_from_slice(b"red");
        expected.extend_from_slice(&[0, 0, 0, 5]);
        expected.extend_from_slice(b"doc42");
        assert_eq!(key, expected);
    }

    #[test]
    fn test_posting_key_boundaries() {
        let a = tag_field_subkey(b"f", b"ab", b"k1").unwrap();
        let b = tag_field_subkey(b"f", b"a", b"bk1").unwrap();
        assert_ne!(a, b);

        let c = tag_field_subkey(b"fa", b"b", b"k1").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_posting_parse() {
        let posting = TagPosting::new(b"tags", b"red", b"doc42");
        let key = posting.to_key().unwrap();
        assert_eq!(TagPosting::parse(&key).unwrap(), posting);
    }

    #[test]
    fn test_posting_parse_rejects_bad_input() {
        let key = tag_field_subkey(b"tags", b"red", b"doc42").unwrap();

        assert!(TagPosting::parse(&key[..key.len() - 1]).unwrap_err().is_corruption());

        let mut long = key.clone();
        long.push(0);
        assert!(TagPosting::parse(&long).unwrap_err().is_corruption());

        let mut wrong = key.clone();
        wrong[0] = 0x41;
        assert_eq!(
            TagPosting::parse(&wrong).unwrap_err(),
            EncodingError::UnknownSubkey(Some(0x41))
        );
        assert_eq!(TagPosting::parse(&[]).unwrap_err(), EncodingError::UnknownSubkey(None));
    }
}
