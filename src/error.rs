use thiserror::Error;

/// Message carried by every [`EncodingError::Corruption`].
pub const ERR_INSUFFICIENT_LENGTH: &str = "insufficient length while decoding metadata";

/// Error type for subkey encoding and decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A decoder found fewer bytes than a declared or fixed-size field requires.
    #[error("Corruption: {0}")]
    Corruption(&'static str),

    /// The leading byte of a subkey is not an assigned discriminator.
    #[error("Unknown subkey discriminator: {}", describe_leading_byte(.0))]
    UnknownSubkey(Option<u8>),

    /// A length-prefixed component does not fit in a u32 length field.
    #[error("Component too long to length-prefix: {len} bytes")]
    TooLong { len: usize },
}

fn describe_leading_byte(byte: &Option<u8>) -> String {
    match byte {
        Some(b) => format!("0x{:02x}", b),
        None => "<empty key>".to_string(),
    }
}

/// Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, EncodingError>;

impl EncodingError {
    /// Shorthand for the insufficient-length corruption every decoder reports
    pub(crate) fn insufficient_length() -> Self {
        EncodingError::Corruption(ERR_INSUFFICIENT_LENGTH)
    }

    pub fn is_corruption(&self) -> bool {
        matches!(self, EncodingError::Corruption(_))
    }
}
