//! Bech32 address resolution.

use bech32::{FromBase32, Variant};
use shared_types::ShortId;

use crate::domain::AddressError;
use crate::ports::AddressResolver;

/// Resolves `hrp1...` addresses with any human-readable part.
///
/// Only the original bech32 checksum is accepted; bech32m fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bech32AddressResolver;

impl Bech32AddressResolver {
    pub fn new() -> Self {
        Self
    }
}

impl AddressResolver for Bech32AddressResolver {
    fn resolve(&self, address: &str) -> Result<ShortId, AddressError> {
        let (_hrp, data, variant) =
            bech32::decode(address).map_err(|e| AddressError::InvalidBech32 {
                address: address.to_string(),
                reason: e.to_string(),
            })?;

        if variant != Variant::Bech32 {
            return Err(AddressError::UnsupportedVariant {
                address: address.to_string(),
            });
        }

        let bytes = Vec::<u8>::from_base32(&data).map_err(|e| AddressError::InvalidBech32 {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        ShortId::from_slice(&bytes).map_err(|_| AddressError::InvalidLength {
            address: address.to_string(),
            length: bytes.len(),
        })
    }
}
