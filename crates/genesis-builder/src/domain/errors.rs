//! # Genesis Errors
//!
//! Every failure is fatal to the whole build: callers must treat any error as
//! "no genesis was produced". Each variant carries the asset alias (or the
//! pipeline step) that failed.

use shared_codec::CodecError;
use shared_types::FormattingError;
use thiserror::Error;

use super::entities::AssetKind;

/// Errors from decoding a textual address into a `ShortId`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Charset, checksum or structure check failed.
    #[error("Invalid bech32 address {address:?}: {reason}")]
    InvalidBech32 { address: String, reason: String },

    /// Address uses the bech32m checksum, which is not accepted.
    #[error("Address {address:?} uses the unsupported bech32m variant")]
    UnsupportedVariant { address: String },

    /// Payload does not decode to a 20-byte identifier.
    #[error("Address {address:?} decodes to {length} bytes, expected 20")]
    InvalidLength { address: String, length: usize },
}

/// Failure in the binary codec or in the text transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Formatting(#[from] FormattingError),
}

/// Errors returned by the genesis pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenesisError {
    /// A holder or minter address could not be resolved.
    #[error("Asset {alias:?}: {source}")]
    AddressFormat {
        alias: String,
        #[source]
        source: AddressError,
    },

    /// A distribution record does not have the shape its asset kind requires.
    #[error("Asset {alias:?}: malformed {kind} record at index {index}: {reason}")]
    MalformedRecord {
        alias: String,
        kind: AssetKind,
        index: usize,
        reason: String,
    },

    /// The initial-state map names an asset kind with no handler.
    #[error("Asset {alias:?}: unknown asset type {asset_type:?}")]
    UnknownAssetType { alias: String, asset_type: String },

    /// Codec or transport encoding failed.
    #[error("Encoding failed while {step}: {source}")]
    Encoding {
        step: String,
        #[source]
        source: EncodingError,
    },

    /// Builder configuration rejected at construction time.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),
}

impl GenesisError {
    /// Wrap a codec or formatting failure with the step that produced it.
    pub fn encoding(step: impl Into<String>, source: impl Into<EncodingError>) -> Self {
        GenesisError::Encoding {
            step: step.into(),
            source: source.into(),
        }
    }
}
