pub mod build;
pub mod prefixes;
pub mod record;
pub mod scan;
pub mod tag;
pub mod types;

pub use build::{PostingDiff, TagFieldIndexer};
pub use prefixes::{prefixes_subkey, SearchPrefixes};
pub use record::SearchRecord;
pub use scan::{document_key, field_scan, prefix_successor, tag_scan, ScanRange};
pub use tag::{tag_field_metadata_subkey, tag_field_subkey, TagFieldMetadata, TagPosting};
pub use types::*;
