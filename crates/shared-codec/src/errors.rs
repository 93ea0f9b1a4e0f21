//! Error types for the linear codec

use thiserror::Error;

/// Errors raised while packing, unpacking or configuring a codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Insufficient data: needed {needed} bytes, {remaining} remaining")]
    InsufficientData { needed: usize, remaining: usize },

    #[error("Payload too large: {size} bytes > {max}")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Slice length {len} exceeds maximum {max}")]
    SliceTooLong { len: usize, max: usize },

    #[error("String length {0} exceeds {max}", max = u16::MAX)]
    StringTooLong(usize),

    #[error("Invalid UTF-8 string: {0}")]
    InvalidUtf8(String),

    #[error("Type {0:?} already registered")]
    DuplicateType(&'static str),

    #[error("Type {0:?} is not registered")]
    UnregisteredType(&'static str),

    #[error("Unknown type ID: {0}")]
    UnknownTypeId(u32),

    #[error("Unexpected type {found:?}, expected one of {expected:?}")]
    UnexpectedType {
        found: &'static str,
        expected: &'static [&'static str],
    },

    #[error("Codec version {0} already registered")]
    DuplicateVersion(u16),

    #[error("Unknown codec version: {0}")]
    UnknownVersion(u16),

    #[error("{0} trailing bytes after decoding")]
    TrailingBytes(usize),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
