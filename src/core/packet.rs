//! Packet Codec
//!
//! Little-endian binary encoding used by every login packet.
//!
//! ```text
//! [u8 opcode] [fields ...]
//! string = [u16 length] [raw bytes, no terminator]
//! ```
//!
//! The codec knows nothing about value ranges; handlers validate semantics.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

/// Decode faults raised by [`PacketReader`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketError {
    /// A field claims more bytes than the packet holds.
    #[error("buffer too short: need {needed} bytes, have {remaining}")]
    BufferTooShort {
        /// Bytes the field needs.
        needed: usize,
        /// Bytes left in the packet.
        remaining: usize,
    },

    /// Frame carried no opcode byte.
    #[error("empty packet")]
    Empty,

    /// String longer than the u16 length prefix can describe.
    #[error("string of {0} bytes exceeds u16 length prefix")]
    StringTooLong(usize),

    /// String field is not valid UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidUtf8,
}

// =============================================================================
// WRITER
// =============================================================================

/// Append-only packet builder.
#[derive(Debug, Default, Clone)]
pub struct PacketWriter {
    buf: BytesMut,
}

impl PacketWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self { buf: BytesMut::new() }
    }

    /// Create a writer whose first byte is `opcode`.
    pub fn with_opcode(opcode: u8) -> Self {
        let mut writer = Self { buf: BytesMut::with_capacity(64) };
        writer.write_u8(opcode);
        writer
    }

    /// Write one byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.put_u8(value);
        self
    }

    /// Write a bool as a single `0`/`1` byte.
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(value as u8)
    }

    /// Write an i8.
    #[inline]
    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        self.buf.put_i8(value);
        self
    }

    /// Write a u16 (little-endian).
    #[inline]
    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.buf.put_u16_le(value);
        self
    }

    /// Write an i16 (little-endian).
    #[inline]
    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        self.buf.put_i16_le(value);
        self
    }

    /// Write a u32 (little-endian).
    #[inline]
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.buf.put_u32_le(value);
        self
    }

    /// Write an i32 (little-endian).
    #[inline]
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.buf.put_i32_le(value);
        self
    }

    /// Write an i64 (little-endian).
    #[inline]
    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.buf.put_i64_le(value);
        self
    }

    /// Write a length-prefixed string.
    ///
    /// Strings longer than `u16::MAX` bytes cannot be described by the
    /// prefix and are truncated to it; callers only send short names.
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        let raw = value.as_bytes();
        let len = raw.len().min(u16::MAX as usize);
        self.write_u16(len as u16);
        self.buf.put_slice(&raw[..len]);
        self
    }

    /// Write a length-prefixed string, failing instead of truncating.
    pub fn try_write_string(&mut self, value: &str) -> Result<&mut Self, PacketError> {
        if value.len() > u16::MAX as usize {
            return Err(PacketError::StringTooLong(value.len()));
        }
        Ok(self.write_string(value))
    }

    /// Copy an already-encoded span through verbatim.
    #[inline]
    pub fn write_bytes(&mut self, raw: &[u8]) -> &mut Self {
        self.buf.put_slice(raw);
        self
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Finish and return the encoded packet.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

// =============================================================================
// READER
// =============================================================================

/// Cursor over an inbound packet.
///
/// Every read checks the remaining length first; a short packet yields
/// [`PacketError::BufferTooShort`] and never zero-fills.
#[derive(Debug, Clone)]
pub struct PacketReader {
    buf: Bytes,
}

impl PacketReader {
    /// Wrap a received packet.
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self { buf: buf.into() }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), PacketError> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(PacketError::BufferTooShort { needed, remaining });
        }
        Ok(())
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8, PacketError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Read a `0`/non-zero byte as bool.
    pub fn read_bool(&mut self) -> Result<bool, PacketError> {
        Ok(self.read_u8()? != 0)
    }

    /// Read an i8.
    pub fn read_i8(&mut self) -> Result<i8, PacketError> {
        self.ensure(1)?;
        Ok(self.buf.get_i8())
    }

    /// Read a u16.
    pub fn read_u16(&mut self) -> Result<u16, PacketError> {
        self.ensure(2)?;
        Ok(self.buf.get_u16_le())
    }

    /// Read an i16.
    pub fn read_i16(&mut self) -> Result<i16, PacketError> {
        self.ensure(2)?;
        Ok(self.buf.get_i16_le())
    }

    /// Read a u32.
    pub fn read_u32(&mut self) -> Result<u32, PacketError> {
        self.ensure(4)?;
        Ok(self.buf.get_u32_le())
    }

    /// Read an i32.
    pub fn read_i32(&mut self) -> Result<i32, PacketError> {
        self.ensure(4)?;
        Ok(self.buf.get_i32_le())
    }

    /// Read an i64.
    pub fn read_i64(&mut self) -> Result<i64, PacketError> {
        self.ensure(8)?;
        Ok(self.buf.get_i64_le())
    }

    /// Read a u16 length prefix followed by that many bytes.
    pub fn read_string(&mut self) -> Result<String, PacketError> {
        let len = self.read_u16()? as usize;
        self.read_string_n(len)
    }

    /// Read exactly `n` bytes as a string.
    ///
    /// Invalid UTF-8 is a decode fault; two different byte strings never
    /// decode to the same name.
    pub fn read_string_n(&mut self, n: usize) -> Result<String, PacketError> {
        let raw = self.read_bytes(n)?;
        String::from_utf8(raw.to_vec()).map_err(|_| PacketError::InvalidUtf8)
    }

    /// Read a u16 length prefix followed by that many bytes, undecoded.
    ///
    /// Used for secrets, which are hashed byte for byte.
    pub fn read_raw_string(&mut self) -> Result<Bytes, PacketError> {
        let len = self.read_u16()? as usize;
        self.read_bytes(len)
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes, PacketError> {
        self.ensure(n)?;
        Ok(self.buf.copy_to_bytes(n))
    }

    /// Take every remaining byte, for forwarding undecoded payload.
    pub fn read_rest(&mut self) -> Bytes {
        let n = self.buf.remaining();
        self.buf.copy_to_bytes(n)
    }
}
