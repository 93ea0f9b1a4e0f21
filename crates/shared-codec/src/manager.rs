//! # Codec Manager
//!
//! Maps codec versions to codecs. Every payload produced by the manager starts
//! with the `u16` version of the codec that wrote it, so a decoder can pick the
//! matching schema and old payloads stay readable after the schema moves on.

use std::collections::BTreeMap;

use crate::errors::CodecError;
use crate::linear::{LinearCodec, Serializable};
use crate::packer::{Packer, Unpacker};

/// Width of the version prefix in bytes.
pub const VERSION_LEN: usize = 2;

/// Versioned front door to one or more linear codecs.
#[derive(Debug, Clone)]
pub struct CodecManager {
    max_size: usize,
    codecs: BTreeMap<u16, LinearCodec>,
}

impl CodecManager {
    /// Create a manager whose payloads may not exceed `max_size` bytes.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            codecs: BTreeMap::new(),
        }
    }

    pub fn register_codec(&mut self, version: u16, codec: LinearCodec) -> Result<(), CodecError> {
        if self.codecs.contains_key(&version) {
            return Err(CodecError::DuplicateVersion(version));
        }
        tracing::debug!(
            version,
            types = codec.registered_types().len(),
            "Registered codec version"
        );
        self.codecs.insert(version, codec);
        Ok(())
    }

    pub fn codec(&self, version: u16) -> Result<&LinearCodec, CodecError> {
        self.codecs
            .get(&version)
            .ok_or(CodecError::UnknownVersion(version))
    }

    pub fn versions(&self) -> impl Iterator<Item = u16> + '_ {
        self.codecs.keys().copied()
    }

    /// Encode `value` with the codec registered under `version`.
    pub fn marshal<T: Serializable>(&self, version: u16, value: &T) -> Result<Vec<u8>, CodecError> {
        let codec = self.codec(version)?;
        let mut packer = Packer::new(self.max_size);
        packer.pack_u16(version)?;
        value.pack(codec, &mut packer)?;
        Ok(packer.into_bytes())
    }

    /// Decode a payload, returning the version it was written with.
    ///
    /// The whole input must be consumed.
    pub fn unmarshal<T: Serializable>(&self, bytes: &[u8]) -> Result<(u16, T), CodecError> {
        if bytes.len() > self.max_size {
            return Err(CodecError::PayloadTooLarge {
                size: bytes.len(),
                max: self.max_size,
            });
        }

        let mut unpacker = Unpacker::new(bytes);
        let version = unpacker.unpack_u16()?;
        let codec = self.codec(version)?;
        let value = T::unpack(codec, &mut unpacker)?;

        if unpacker.remaining() != 0 {
            return Err(CodecError::TrailingBytes(unpacker.remaining()));
        }
        Ok((version, value))
    }
}
