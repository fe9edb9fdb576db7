//! Posting keys for a document's tag field value.
//!
//! Deciding when to index is the caller's business; this only turns a field
//! value into keys and works out which keys change when the value does.

use crate::error::Result;
use crate::index::tag::{tag_field_subkey, TagFieldMetadata};
use crate::utils::split_tags;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Keys to remove and add when a document's field value changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingDiff {
    pub delete: Vec<Vec<u8>>,
    pub insert: Vec<Vec<u8>>,
}

impl PostingDiff {
    pub fn is_empty(&self) -> bool {
        self.delete.is_empty() && self.insert.is_empty()
    }
}

/// Builds posting keys for one tag field
#[derive(Debug, Clone)]
pub struct TagFieldIndexer {
    field_name: Vec<u8>,
    metadata: TagFieldMetadata,
}

impl TagFieldIndexer {
    pub fn new(field_name: impl Into<Vec<u8>>, metadata: TagFieldMetadata) -> Self {
        Self {
            field_name: field_name.into(),
            metadata,
        }
    }

    pub fn field_name(&self) -> &[u8] {
        &self.field_name
    }

    pub fn metadata(&self) -> &TagFieldMetadata {
        &self.metadata
    }

    fn tags(&self, raw: Option<&[u8]>) -> BTreeSet<Vec<u8>> {
        raw.map(|r| split_tags(r, &self.metadata)).unwrap_or_default()
    }

    fn keys<'t>(
        &self,
        doc_key: &[u8],
        tags: impl Iterator<Item = &'t Vec<u8>>,
    ) -> Result<Vec<Vec<u8>>> {
        tags.map(|tag| tag_field_subkey(&self.field_name, tag, doc_key))
            .collect()
    }

    /// Posting keys for every distinct tag in `raw`, ordered by tag
    pub fn postings(&self, doc_key: &[u8], raw: &[u8]) -> Result<Vec<Vec<u8>>> {
        let tags = split_tags(raw, &self.metadata);
        trace!(
            field = %String::from_utf8_lossy(&self.field_name),
            tags = tags.len(),
            "building postings"
        );
        self.keys(doc_key, tags.iter())
    }

    /// Postings to delete and insert when a document's value goes from `old`
    /// to `new`. `None` means the document has no value (absent or removed).
    pub fn update(
        &self,
        doc_key: &[u8],
        old: Option<&[u8]>,
        new: Option<&[u8]>,
    ) -> Result<PostingDiff> {
        let old_tags = self.tags(old);
        let new_tags = self.tags(new);

        let diff = PostingDiff {
            delete: self.keys(doc_key, old_tags.difference(&new_tags))?,
            insert: self.keys(doc_key, new_tags.difference(&old_tags))?,
        };

        debug!(
            field = %String::from_utf8_lossy(&self.field_name),
            doc = %String::from_utf8_lossy(doc_key),
            deleted = diff.delete.len(),
            inserted = diff.insert.len(),
            "tag postings updated"
        );
        Ok(diff)
    }
}
