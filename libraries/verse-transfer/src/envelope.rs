//! Flat, length-prefixed binary form of a record.
//!
//! Text fields are written as an `i32` byte length followed by UTF-8 bytes;
//! a length of `-1` marks a null text field. Integers are little-endian and
//! booleans are a single 0/1 byte.

use crate::error::{EnvelopeError, Result};

/// Length prefix marking a null text field.
const NULL_LEN: i32 = -1;

/// Appends record fields to a flat byte buffer.
#[derive(Debug, Default)]
pub struct EnvelopeWriter {
    buf: Vec<u8>,
}

impl EnvelopeWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-nullable text field.
    pub fn put_str(&mut self, value: &str) {
        self.put_i32(value.len() as i32);
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Append a nullable text field. `None` is encoded as length `-1`.
    pub fn put_opt_str(&mut self, value: Option<&str>) {
        match value {
            Some(value) => self.put_str(value),
            None => self.put_i32(NULL_LEN),
        }
    }

    /// Append a little-endian 32-bit integer.
    pub fn put_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a little-endian 64-bit integer.
    pub fn put_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a boolean as a single 0/1 byte.
    pub fn put_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the flattened bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads record fields back out of a flat byte buffer.
#[derive(Debug)]
pub struct EnvelopeReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> EnvelopeReader<'a> {
    /// Wrap a byte buffer, positioned at its start.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read position, usable with [`seek`](Self::seek).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the read position. Positions past the end of the buffer are
    /// clamped to the end.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.buf.len());
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(EnvelopeError::Truncated {
                needed: count,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    /// Read a non-nullable text field.
    pub fn get_str(&mut self) -> Result<String> {
        self.get_opt_str()?.ok_or(EnvelopeError::UnexpectedNull)
    }

    /// Read a nullable text field.
    pub fn get_opt_str(&mut self) -> Result<Option<String>> {
        let len = self.get_i32()?;
        if len == NULL_LEN {
            return Ok(None);
        }
        if len < 0 {
            return Err(EnvelopeError::InvalidLength(len));
        }
        let bytes = self.take(len as usize)?;
        Ok(Some(String::from_utf8(bytes.to_vec())?))
    }

    /// Read a little-endian 32-bit integer.
    pub fn get_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(i32::from_le_bytes(raw))
    }

    /// Read a little-endian 64-bit integer.
    pub fn get_i64(&mut self) -> Result<i64> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(i64::from_le_bytes(raw))
    }

    /// Read a single-byte boolean. Any non-zero byte reads as `true`.
    pub fn get_bool(&mut self) -> Result<bool> {
        let bytes = self.take(1)?;
        Ok(bytes[0] != 0)
    }
}

/// Records that can be flattened into a transfer envelope.
///
/// The first field of every envelope is the record's type tag; decoding
/// dispatches on it through a [`DecoderRegistry`](crate::DecoderRegistry).
pub trait Envelope {
    /// Stable tag identifying the concrete record kind on the wire.
    fn type_tag(&self) -> &'static str;

    /// Flatten the record into `writer`, tag first.
    fn write_envelope(&self, writer: &mut EnvelopeWriter);

    /// Flatten the record into a fresh byte buffer.
    fn to_envelope(&self) -> Vec<u8> {
        let mut writer = EnvelopeWriter::new();
        self.write_envelope(&mut writer);
        writer.into_bytes()
    }
}
