//! # Shared Types Crate
//!
//! Identifiers and transport encodings used across the workspace.
//!
//! ## Design Principles
//!
//! - **Fixed-width identifiers**: addresses are `ShortId` (20 bytes), chain and
//!   transaction identifiers are `Id` (32 bytes). Both order by raw byte value.
//! - **Checksummed transport**: every payload handed to a caller as text carries
//!   a 4-byte SHA-256 checksum, whichever `Encoding` is chosen.

pub mod errors;
pub mod formatting;
pub mod ids;

pub use errors::*;
pub use formatting::Encoding;
pub use ids::{Id, ShortId};
