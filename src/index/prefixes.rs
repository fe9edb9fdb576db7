//! The set of user-key prefixes an index watches.
//!
//! Stored once per index under the one-byte key `[0x01]`. The value is a
//! concatenation of `u32 length + bytes` entries.

use crate::error::{EncodingError, Result};
use crate::index::types::SubkeyType;
use crate::utils::{put_sized_bytes, sized_bytes_len, ByteReader};
use serde::{Deserialize, Serialize};

/// Key of the prefix-set record. There is exactly one per index.
pub fn prefixes_subkey() -> Vec<u8> {
    vec![SubkeyType::Prefixes.as_byte()]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPrefixes {
    pub prefixes: Vec<Vec<u8>>,
}

impl SearchPrefixes {
    pub fn new<I, P>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Self {
            prefixes: prefixes.into_iter().map(|p| p.as_ref().to_vec()).collect(),
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.prefixes.iter().map(|p| sized_bytes_len(p)).sum()
    }

    pub fn encode(&self, dst: &mut Vec<u8>) -> Result<()> {
        dst.reserve(self.encoded_len());
        for prefix in &self.prefixes {
            put_sized_bytes(dst, prefix)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decode a prefix-set value.
    ///
    /// A tail of fewer than 4 bytes after the last complete entry ends the
    /// decode successfully, while a declared length that overruns the buffer
    /// is corruption. A final length field cut short is therefore not
    /// detected. Whether that is intended is unresolved; existing stored
    /// values decode this way, so do not tighten it here.
    pub fn decode(input: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(input);
        let mut prefixes = Vec::new();

        while let Some(size) = reader.get_fixed32() {
            let prefix = reader
                .take(size as usize)
                .ok_or_else(EncodingError::insufficient_length)?;
            prefixes.push(prefix.to_vec());
        }

        Ok(Self { prefixes })
    }

    /// Whether a user key is in scope for the index
    pub fn matches(&self, key: &[u8]) -> bool {
        self.prefixes.iter().any(|p| key.starts_with(p))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subkey() {
        assert_eq!(prefixes_subkey(), vec![0x01]);
    }

    #[test]
    fn test_encode_layout() {
        let set = SearchPrefixes::new(["ab", "c"]);
        let bytes = set.to_bytes().unwrap();
        assert_eq!(bytes, b"\x00\x00\x00\x02ab\x00\x00\x00\x01c".to_vec());
        assert_eq!(bytes.len(), set.encoded_len());
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let set = SearchPrefixes::new(["user:", "order:", "", "user:"]);
        let decoded = SearchPrefixes::decode(&set.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_empty() {
        let decoded = SearchPrefixes::decode(&[]).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(SearchPrefixes::default().to_bytes().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_truncated_inside_prefix_is_corruption() {
        let bytes = SearchPrefixes::new(["user:", "order:"]).to_bytes().unwrap();
        // Keep the second length field but cut its payload short
        for cut in (9 + 4)..bytes.len() {
            let err = SearchPrefixes::decode(&bytes[..cut]).unwrap_err();
            assert!(err.is_corruption(), "cut at {cut}");
        }
    }

    #[test]
    fn test_short_tail_is_tolerated() {
        let bytes = SearchPrefixes::new(["user:", "order:"]).to_bytes().unwrap();
        let first_entry = 4 + 5;
        for tail in 1..=3 {
            let decoded = SearchPrefixes::decode(&bytes[..first_entry + tail]).unwrap();
            assert_eq!(decoded, SearchPrefixes::new(["user:"]));
        }

        // Garbage tail after complete entries behaves the same way
        let mut padded = bytes.clone();
        padded.extend_from_slice(&[0xff, 0xff]);
        let decoded = SearchPrefixes::decode(&padded).unwrap();
        assert_eq!(decoded.prefixes.len(), 2);
    }

    #[test]
    fn test_matches() {
        let set = SearchPrefixes::new(["user:", "order:"]);
        assert!(set.matches(b"user:1"));
        assert!(set.matches(b"order:"));
        assert!(!set.matches(b"users"));
        assert!(!SearchPrefixes::default().matches(b"user:1"));
    }
}
