//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised when building a fixed-width identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    /// Input slice has the wrong number of bytes.
    #[error("Invalid identifier length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input text is not valid hex.
    #[error("Invalid hex identifier: {0}")]
    InvalidHex(String),
}

/// Errors raised by the text transport encodings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormattingError {
    /// Encoding name is not one of the supported encodings.
    #[error("Unknown encoding: {0:?}")]
    UnknownEncoding(String),

    /// Payload exceeds what the encoding is allowed to carry.
    #[error("Payload too large for {encoding}: {size} bytes > {max}")]
    TooLarge {
        encoding: &'static str,
        size: usize,
        max: usize,
    },

    /// Hex payload does not start with `0x`.
    #[error("Hex payload is missing the 0x prefix")]
    MissingHexPrefix,

    /// Text contains characters outside the encoding's alphabet.
    #[error("Invalid {encoding} text: {reason}")]
    InvalidText {
        encoding: &'static str,
        reason: String,
    },

    /// Decoded payload is shorter than the checksum.
    #[error("Decoded payload is {0} bytes, shorter than the 4-byte checksum")]
    MissingChecksum(usize),

    /// Checksum does not match the payload.
    #[error("Checksum mismatch")]
    BadChecksum,
}
