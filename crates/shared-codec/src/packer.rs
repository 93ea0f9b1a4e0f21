//! Big-endian byte packing and bounds-checked unpacking.

use bytes::{Buf, BufMut, BytesMut};

use crate::errors::CodecError;

/// Append-only big-endian writer with a hard size ceiling.
#[derive(Debug)]
pub struct Packer {
    buf: BytesMut,
    max_size: usize,
}

impl Packer {
    /// Create a packer that refuses to grow past `max_size` bytes.
    pub fn new(max_size: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            max_size,
        }
    }

    fn reserve(&mut self, additional: usize) -> Result<(), CodecError> {
        let size = self.buf.len().saturating_add(additional);
        if size > self.max_size {
            return Err(CodecError::PayloadTooLarge {
                size,
                max: self.max_size,
            });
        }
        self.buf.reserve(additional);
        Ok(())
    }

    pub fn pack_u8(&mut self, value: u8) -> Result<(), CodecError> {
        self.reserve(1)?;
        self.buf.put_u8(value);
        Ok(())
    }

    pub fn pack_u16(&mut self, value: u16) -> Result<(), CodecError> {
        self.reserve(2)?;
        self.buf.put_u16(value);
        Ok(())
    }

    pub fn pack_u32(&mut self, value: u32) -> Result<(), CodecError> {
        self.reserve(4)?;
        self.buf.put_u32(value);
        Ok(())
    }

    pub fn pack_u64(&mut self, value: u64) -> Result<(), CodecError> {
        self.reserve(8)?;
        self.buf.put_u64(value);
        Ok(())
    }

    /// Write raw bytes with no length prefix.
    pub fn pack_fixed(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.reserve(bytes.len())?;
        self.buf.put_slice(bytes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.to_vec()
    }
}

/// Reader over a borrowed byte slice. Every read checks the remaining length
/// first, so malformed input surfaces as `InsufficientData` instead of a panic.
#[derive(Debug)]
pub struct Unpacker<'a> {
    buf: &'a [u8],
}

impl<'a> Unpacker<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { buf: bytes }
    }

    fn ensure(&self, needed: usize) -> Result<(), CodecError> {
        if self.buf.remaining() < needed {
            return Err(CodecError::InsufficientData {
                needed,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn unpack_u8(&mut self) -> Result<u8, CodecError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn unpack_u16(&mut self) -> Result<u16, CodecError> {
        self.ensure(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn unpack_u32(&mut self) -> Result<u32, CodecError> {
        self.ensure(4)?;
        Ok(self.buf.get_u32())
    }

    pub fn unpack_u64(&mut self) -> Result<u64, CodecError> {
        self.ensure(8)?;
        Ok(self.buf.get_u64())
    }

    /// Read exactly `N` raw bytes.
    pub fn unpack_fixed<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.unpack_slice(N)?);
        Ok(out)
    }

    /// Borrow the next `len` raw bytes.
    pub fn unpack_slice(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        self.ensure(len)?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    pub fn remaining(&self) -> usize {
        self.buf.len()
    }
}
