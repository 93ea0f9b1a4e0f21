//! # Integration Tests
//!
//! Full pipeline runs through `GenesisService` with the production bech32
//! and cb58/hex adapters.

pub mod determinism;
pub mod failures;
pub mod wire_format;
