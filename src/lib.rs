//! # searchkey - subkey encoding for secondary search indexes
//!
//! Encodes the records of a search index kept in an ordered key-value store
//! as byte strings the store can persist and range-scan.
//!
//! ## Layout
//!
//! Every subkey starts with a one-byte discriminator ([`index::SubkeyType`]):
//!
//! | Record | Key | Value |
//! |---|---|---|
//! | Prefix set | `[0x01]` | repeated `u32 len` + bytes |
//! | Tag field metadata | `[0x41]` + field name | `u8 separator` + `u8 case_sensitive` |
//! | Tag posting | `[0x81]` + sized field + sized tag + sized doc key | none |
//!
//! Integers are big-endian.
//!
//! ## Modules
//!
//! - [`index`] - Discriminator registry, record codecs, scan ranges, posting builder
//! - [`output`] - Text and JSON rendering of decoded records
//! - [`utils`] - Byte cursor, fixed-width codec, tag splitting, CLI config
//! - [`error`] - `EncodingError` and `Result`
//!
//! ## Quick Start
//!
//! ```
//! use searchkey::index::{tag_field_subkey, SearchPrefixes, SearchRecord, TagFieldMetadata};
//!
//! let prefixes = SearchPrefixes::new(["user:", "order:"]);
//! let value = prefixes.to_bytes().unwrap();
//! assert_eq!(SearchPrefixes::decode(&value).unwrap(), prefixes);
//!
//! let meta = TagFieldMetadata::new(b',', false);
//! assert_eq!(TagFieldMetadata::decode(&meta.to_bytes()).unwrap(), meta);
//!
//! let key = tag_field_subkey(b"tags", b"red", b"doc42").unwrap();
//! assert!(matches!(SearchRecord::decode(&key, b"").unwrap(), SearchRecord::TagPosting(_)));
//! ```

pub mod error;
pub mod index;
pub mod output;
pub mod utils;

pub use error::{EncodingError, Result};
