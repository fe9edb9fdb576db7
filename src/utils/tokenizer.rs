use crate::index::tag::TagFieldMetadata;
use std::collections::BTreeSet;

/// Split a raw tag field value into the distinct tags it carries.
///
/// Tags are cut at the field's separator, trimmed of ASCII whitespace and
/// lowercased (ASCII only) unless the field is case sensitive. Empty tags
/// are dropped.
pub fn split_tags(raw: &[u8], meta: &TagFieldMetadata) -> BTreeSet<Vec<u8>> {
    let mut tags = BTreeSet::new();
    let mut start = 0;

    for end in memchr::memchr_iter(meta.separator, raw).chain(std::iter::once(raw.len())) {
        let tag = raw[start..end].trim_ascii();
        start = end + 1;

        if tag.is_empty() {
            continue;
        }

        if meta.case_sensitive {
            tags.insert(tag.to_vec());
        } else {
            tags.insert(tag.to_ascii_lowercase());
        }
    }

    tags
}
