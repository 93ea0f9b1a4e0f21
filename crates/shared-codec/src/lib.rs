//! # Shared Codec
//!
//! Deterministic, versioned binary encoding.
//!
//! ## Layers
//!
//! - `Packer` / `Unpacker`: big-endian primitives with size and bounds checks
//! - `LinearCodec`: type registry, slice limits, string/slice/sequence framing
//! - `CodecManager`: version prefix and version -> codec dispatch
//!
//! Encoding is a pure function of the value and the codec's registration
//! table: the same value always packs to the same bytes, and unpacking those
//! bytes then packing again reproduces them exactly.

pub mod errors;
pub mod linear;
pub mod manager;
pub mod packer;

pub use errors::CodecError;
pub use linear::{LinearCodec, Registered, Serializable, DEFAULT_MAX_SLICE_LEN};
pub use manager::{CodecManager, VERSION_LEN};
pub use packer::{Packer, Unpacker};
