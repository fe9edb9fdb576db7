//! Utility functions shared by the index codecs and the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - CLI configuration in the platform config directory
//! - [`encoding`] - Fixed-width integers, length-prefixed bytes, `ByteReader`
//! - [`tokenizer`] - Splitting tag field values into tags

pub mod app_data;
pub mod encoding;
pub mod tokenizer;

pub use app_data::*;
pub use encoding::*;
pub use tokenizer::*;
