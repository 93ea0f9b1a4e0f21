//! Fixture helpers for genesis tests.
//!
//! Addresses are produced with the real bech32 encoder so no fixture carries a
//! hand-written checksum.

use bech32::{ToBase32, Variant};
use serde_json::{json, Value};

/// Human-readable part used for every test address.
pub const TEST_HRP: &str = "local";

/// Bech32 address whose 20-byte payload is `[seed; 20]`.
pub fn test_address(seed: u8) -> String {
    address_for(&[seed; 20])
}

/// Bech32 address for an arbitrary payload (any length).
pub fn address_for(payload: &[u8]) -> String {
    match bech32::encode(TEST_HRP, payload.to_base32(), Variant::Bech32) {
        Ok(address) => address,
        Err(e) => panic!("test address encoding failed: {e}"),
    }
}

/// Flip the final checksum character so the address no longer verifies.
pub fn corrupt_checksum(address: &str) -> String {
    let mut corrupted = address.to_string();
    let last = corrupted.pop().unwrap_or('q');
    corrupted.push(if last == 'q' { 'p' } else { 'q' });
    corrupted
}

/// A `fixedCap` holder record.
pub fn fixed_cap(address: &str, amount: u64) -> Value {
    json!({ "address": address, "amount": amount })
}

/// A `variableCap` minters record.
pub fn variable_cap(minters: &[&str]) -> Value {
    json!({ "threshold": 1, "minters": minters })
}
