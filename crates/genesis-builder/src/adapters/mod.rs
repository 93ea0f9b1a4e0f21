//! Adapters Layer (Driven Adapters)
//!
//! - `Bech32AddressResolver` - BIP-173 address text codec
//! - `ChecksummedFormatter` - cb58/hex payload transport

pub mod bech32;
pub mod formatting;

pub use self::bech32::Bech32AddressResolver;
pub use self::formatting::ChecksummedFormatter;
