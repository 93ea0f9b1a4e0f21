//! Outbound Ports (Driven Ports)
//!
//! Text codecs the builder depends on but does not own.

use shared_types::{Encoding, FormattingError, ShortId};

use crate::domain::AddressError;

/// Decodes a human-readable address into its 20-byte identifier.
pub trait AddressResolver: Send + Sync {
    fn resolve(&self, address: &str) -> Result<ShortId, AddressError>;
}

/// Reversible byte <-> text transport for payloads and memos.
pub trait PayloadEncoder: Send + Sync {
    fn encode(&self, encoding: Encoding, payload: &[u8]) -> Result<String, FormattingError>;

    fn decode(&self, encoding: Encoding, text: &str) -> Result<Vec<u8>, FormattingError>;
}
