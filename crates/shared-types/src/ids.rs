//! # Identifiers
//!
//! Fixed-width binary identifiers.
//!
//! - `ShortId`: 20-byte address identifier (owner of an output)
//! - `Id`: 32-byte chain / transaction identifier
//!
//! Both compare lexicographically by byte value, which is the order used for
//! every canonical sort in the workspace. Both render as lowercase hex.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::errors::IdError;

macro_rules! fixed_id {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width in bytes.
            pub const LEN: usize = $len;

            /// Build from a slice that must be exactly `LEN` bytes.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, IdError> {
                let array: [u8; $len] = bytes.try_into().map_err(|_| IdError::InvalidLength {
                    expected: $len,
                    actual: bytes.len(),
                })?;
                Ok(Self(array))
            }

            /// Parse from lowercase or uppercase hex (optional `0x` prefix).
            pub fn from_hex(text: &str) -> Result<Self, IdError> {
                let text = text.strip_prefix("0x").unwrap_or(text);
                let bytes = hex::decode(text).map_err(|e| IdError::InvalidHex(e.to_string()))?;
                Self::from_slice(&bytes)
            }

            /// Borrow the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&hex::encode(self.0))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                Self::from_hex(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_id!(
    /// A 20-byte address identifier.
    ShortId,
    20
);

fixed_id!(
    /// A 32-byte identifier (blockchain ID, transaction ID, genesis ID).
    Id,
    32
);

impl Id {
    /// The all-zero identifier, used as the "no blockchain" sentinel.
    pub const EMPTY: Id = Id([0u8; 32]);

    /// SHA-256 digest of `bytes` as an identifier.
    pub fn digest(bytes: &[u8]) -> Self {
        let mut id = [0u8; 32];
        id.copy_from_slice(&Sha256::digest(bytes));
        Self(id)
    }
}
