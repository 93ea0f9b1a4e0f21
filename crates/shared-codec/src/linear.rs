//! # Linear Codec
//!
//! A codec with no field tags: a record's encoding is the concatenation of its
//! fields' encodings in declaration order.
//!
//! | Value | Encoding |
//! |-------|----------|
//! | `u8`/`u32`/`u64` | big-endian, fixed width |
//! | fixed array | raw bytes |
//! | byte slice | `u32` length ‖ bytes |
//! | sequence | `u32` count ‖ elements |
//! | string | `u16` length ‖ UTF-8 bytes |
//! | interface value | `u32` type ID ‖ body |
//!
//! Type IDs are assigned sequentially from 0 in registration order, so two
//! codecs agree on IDs only if they registered the same names in the same
//! order. Registration must be complete before the codec is shared.

use std::collections::HashMap;

use crate::errors::CodecError;
use crate::packer::{Packer, Unpacker};

/// Default upper bound on the number of entries in a slice or sequence.
pub const DEFAULT_MAX_SLICE_LEN: usize = 1 << 20;

/// A record that can be written to and read from a linear codec.
pub trait Serializable: Sized {
    fn pack(&self, codec: &LinearCodec, packer: &mut Packer) -> Result<(), CodecError>;

    fn unpack(codec: &LinearCodec, unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError>;
}

/// A record type that can appear behind an interface and so needs a type ID.
pub trait Registered {
    const TYPE_NAME: &'static str;
}

/// Type registry plus slice limits.
#[derive(Debug, Clone)]
pub struct LinearCodec {
    max_slice_len: usize,
    types: Vec<&'static str>,
    ids: HashMap<&'static str, u32>,
}

impl Default for LinearCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SLICE_LEN)
    }
}

impl LinearCodec {
    pub fn new(max_slice_len: usize) -> Self {
        Self {
            max_slice_len,
            types: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Register a type name under the next free ID.
    pub fn register_type(&mut self, name: &'static str) -> Result<u32, CodecError> {
        if self.ids.contains_key(name) {
            return Err(CodecError::DuplicateType(name));
        }
        let id = u32::try_from(self.types.len())
            .map_err(|_| CodecError::InvalidValue("type registry is full".to_string()))?;
        self.types.push(name);
        self.ids.insert(name, id);
        tracing::trace!(type_name = name, type_id = id, "Registered codec type");
        Ok(id)
    }

    pub fn register<T: Registered>(&mut self) -> Result<u32, CodecError> {
        self.register_type(T::TYPE_NAME)
    }

    pub fn type_id(&self, name: &'static str) -> Result<u32, CodecError> {
        self.ids
            .get(name)
            .copied()
            .ok_or(CodecError::UnregisteredType(name))
    }

    pub fn type_name(&self, id: u32) -> Result<&'static str, CodecError> {
        self.types
            .get(id as usize)
            .copied()
            .ok_or(CodecError::UnknownTypeId(id))
    }

    /// Registered names, indexed by type ID.
    pub fn registered_types(&self) -> &[&'static str] {
        &self.types
    }

    pub fn pack_len(&self, packer: &mut Packer, len: usize) -> Result<(), CodecError> {
        if len > self.max_slice_len {
            return Err(CodecError::SliceTooLong {
                len,
                max: self.max_slice_len,
            });
        }
        let len = u32::try_from(len).map_err(|_| CodecError::SliceTooLong {
            len,
            max: u32::MAX as usize,
        })?;
        packer.pack_u32(len)
    }

    pub fn unpack_len(&self, unpacker: &mut Unpacker<'_>) -> Result<usize, CodecError> {
        let len = unpacker.unpack_u32()? as usize;
        if len > self.max_slice_len {
            return Err(CodecError::SliceTooLong {
                len,
                max: self.max_slice_len,
            });
        }
        Ok(len)
    }

    pub fn pack_str(&self, packer: &mut Packer, value: &str) -> Result<(), CodecError> {
        let len = u16::try_from(value.len()).map_err(|_| CodecError::StringTooLong(value.len()))?;
        packer.pack_u16(len)?;
        packer.pack_fixed(value.as_bytes())
    }

    pub fn unpack_str(&self, unpacker: &mut Unpacker<'_>) -> Result<String, CodecError> {
        let len = unpacker.unpack_u16()? as usize;
        let bytes = unpacker.unpack_slice(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
    }

    pub fn pack_bytes(&self, packer: &mut Packer, value: &[u8]) -> Result<(), CodecError> {
        self.pack_len(packer, value.len())?;
        packer.pack_fixed(value)
    }

    pub fn unpack_bytes(&self, unpacker: &mut Unpacker<'_>) -> Result<Vec<u8>, CodecError> {
        let len = self.unpack_len(unpacker)?;
        Ok(unpacker.unpack_slice(len)?.to_vec())
    }

    pub fn pack_seq<T: Serializable>(
        &self,
        packer: &mut Packer,
        items: &[T],
    ) -> Result<(), CodecError> {
        self.pack_len(packer, items.len())?;
        for item in items {
            item.pack(self, packer)?;
        }
        Ok(())
    }

    pub fn unpack_seq<T: Serializable>(
        &self,
        unpacker: &mut Unpacker<'_>,
    ) -> Result<Vec<T>, CodecError> {
        let len = self.unpack_len(unpacker)?;
        let mut items = Vec::with_capacity(len.min(unpacker.remaining()));
        for _ in 0..len {
            items.push(T::unpack(self, unpacker)?);
        }
        Ok(items)
    }

    /// Write the interface prefix for `T`.
    pub fn pack_type_id<T: Registered>(&self, packer: &mut Packer) -> Result<(), CodecError> {
        packer.pack_u32(self.type_id(T::TYPE_NAME)?)
    }

    /// Read an interface prefix and resolve it to the registered name.
    pub fn unpack_type_name(&self, unpacker: &mut Unpacker<'_>) -> Result<&'static str, CodecError> {
        let id = unpacker.unpack_u32()?;
        self.type_name(id)
    }
}
