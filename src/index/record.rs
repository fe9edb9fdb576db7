//! Decoding of raw `(key, value)` pairs read back from the store.
//!
//! The record kind always comes from the leading key byte, never from where
//! the pair was found.

use crate::error::{EncodingError, Result};
use crate::index::prefixes::SearchPrefixes;
use crate::index::tag::{TagFieldMetadata, TagPosting};
use crate::index::types::SubkeyType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchRecord {
    Prefixes(SearchPrefixes),
    TagFieldMeta {
        field_name: Vec<u8>,
        metadata: TagFieldMetadata,
    },
    TagPosting(TagPosting),
}

impl SearchRecord {
    pub fn decode(key: &[u8], value: &[u8]) -> Result<Self> {
        let (&first, suffix) = key.split_first().ok_or(EncodingError::UnknownSubkey(None))?;
        let kind = SubkeyType::from_byte(first).ok_or(EncodingError::UnknownSubkey(Some(first)))?;

        match kind {
            SubkeyType::Prefixes => {
                if !suffix.is_empty() {
                    return Err(EncodingError::Corruption("unexpected bytes after prefixes subkey"));
                }
                Ok(SearchRecord::Prefixes(SearchPrefixes::decode(value)?))
            }
            SubkeyType::TagFieldMeta => Ok(SearchRecord::TagFieldMeta {
                field_name: suffix.to_vec(),
                metadata: TagFieldMetadata::decode(value)?,
            }),
            SubkeyType::TagField => Ok(SearchRecord::TagPosting(TagPosting::parse(key)?)),
        }
    }

    pub fn subkey_type(&self) -> SubkeyType {
        match self {
            SearchRecord::Prefixes(_) => SubkeyType::Prefixes,
            SearchRecord::TagFieldMeta { .. } => SubkeyType::TagFieldMeta,
            SearchRecord::TagPosting(_) => SubkeyType::TagField,
        }
    }
}
