//! Range-scan bounds over posting keys.

use crate::error::{EncodingError, Result};
use crate::index::types::SubkeyType;
use crate::utils::{put_sized_bytes, ByteReader};

/// Half-open key range `[start, end)`; `end == None` means unbounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRange {
    pub start: Vec<u8>,
    pub end: Option<Vec<u8>>,
}

impl ScanRange {
    /// Every key that begins with `prefix`
    pub fn prefix(prefix: Vec<u8>) -> Self {
        let end = prefix_successor(&prefix);
        Self { start: prefix, end }
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        key >= self.start.as_slice() && self.end.as_deref().is_none_or(|end| key < end)
    }
}

/// Smallest key greater than every key starting with `prefix`.
///
/// Returns `None` when the prefix is empty or all `0xff`.
pub fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last != 0xff {
            end.push(last + 1);
            return Some(end);
        }
    }
    None
}

fn field_prefix(field_name: &[u8]) -> Result<Vec<u8>> {
    let mut prefix = vec![SubkeyType::TagField.as_byte()];
    put_sized_bytes(&mut prefix, field_name)?;
    Ok(prefix)
}

/// All postings of one tag field
pub fn field_scan(field_name: &[u8]) -> Result<ScanRange> {
    Ok(ScanRange::prefix(field_prefix(field_name)?))
}

/// All postings of one tag in one tag field
pub fn tag_scan(field_name: &[u8], tag: &[u8]) -> Result<ScanRange> {
    let mut prefix = field_prefix(field_name)?;
    put_sized_bytes(&mut prefix, tag)?;
    Ok(ScanRange::prefix(prefix))
}

/// Document key of a posting found by a [`tag_scan`] starting at `scanned`
pub fn document_key<'a>(posting_key: &'a [u8], scanned: &[u8]) -> Result<&'a [u8]> {
    let rest = posting_key
        .strip_prefix(scanned)
        .ok_or(EncodingError::Corruption("posting key outside scanned range"))?;

    let mut reader = ByteReader::new(rest);
    let doc_key = reader.get_sized_bytes()?;
    if !reader.is_empty() {
        return Err(EncodingError::Corruption("trailing bytes after posting key"));
    }
    Ok(doc_key)
}
