#![no_std]

//! Call arguments for contract entry points.
//!
//! Every entry point of the game contracts takes one serialized argument blob
//! and returns one serialized result blob. The blob is a plain concatenation
//! of fields:
//!
//! - `u32`: 4 bytes, little-endian.
//! - string: `u32` little-endian byte length, then the UTF-8 bytes.
//!
//! There is no field tagging; the reader must know the expected order.
//! [`Utf8Writer`] builds the human-readable UTF-8 payloads the contracts
//! return and publish.

use soroban_sdk::{Bytes, Env};

#[cfg(test)]
mod test;

/// Longest decimal rendering of a `u32` (`4294967295`).
pub const MAX_DECIMAL_DIGITS: usize = 10;

const U32_WIDTH: u32 = 4;

// ============================================================================
// Errors
// ============================================================================

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArgsError {
    /// The blob ended before the requested field could be read.
    OutOfRange,
}

// ============================================================================
// Args
// ============================================================================

#[derive(Clone, Debug)]
pub struct Args {
    bytes: Bytes,
    offset: u32,
}

impl Args {
    /// Empty argument list, ready for `add_*`.
    pub fn new(env: &Env) -> Self {
        Self {
            bytes: Bytes::new(env),
            offset: 0,
        }
    }

    /// Reader positioned at the start of `bytes`.
    pub fn from_bytes(bytes: Bytes) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn add_u32(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn add_str(mut self, value: &str) -> Self {
        self.bytes
            .extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.bytes.extend_from_slice(value.as_bytes());
        self
    }

    /// Appends a string whose UTF-8 bytes are already held in host memory.
    pub fn add_string(mut self, value: &Bytes) -> Self {
        self.bytes.extend_from_slice(&value.len().to_le_bytes());
        self.bytes.append(value);
        self
    }

    pub fn serialize(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Bytes not yet consumed by `next_*`.
    #[cfg(test)]
    pub(crate) fn remaining(&self) -> u32 {
        self.bytes.len().saturating_sub(self.offset)
    }

    pub fn next_u32(&mut self) -> Result<u32, ArgsError> {
        let end = self.checked_end(U32_WIDTH)?;
        let mut buf = [0u8; U32_WIDTH as usize];
        self.bytes.slice(self.offset..end).copy_into_slice(&mut buf);
        self.offset = end;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads the next string field and returns its UTF-8 bytes.
    ///
    /// The offset only advances when the whole field is present, so a failed
    /// read leaves the reader where it was.
    pub fn next_string(&mut self) -> Result<Bytes, ArgsError> {
        let start = self.offset;
        let len = self.next_u32()?;
        let end = match self.checked_end(len) {
            Ok(end) => end,
            Err(e) => {
                self.offset = start;
                return Err(e);
            }
        };
        let value = self.bytes.slice(self.offset..end);
        self.offset = end;
        Ok(value)
    }

    fn checked_end(&self, width: u32) -> Result<u32, ArgsError> {
        let end = self.offset.checked_add(width).ok_or(ArgsError::OutOfRange)?;
        if end > self.bytes.len() {
            return Err(ArgsError::OutOfRange);
        }
        Ok(end)
    }
}

// ============================================================================
// UTF-8 payloads
// ============================================================================

/// Builder for UTF-8 message payloads.
pub struct Utf8Writer {
    bytes: Bytes,
}

impl Utf8Writer {
    pub fn new(env: &Env) -> Self {
        Self {
            bytes: Bytes::new(env),
        }
    }

    pub fn push_str(mut self, s: &str) -> Self {
        self.bytes.extend_from_slice(s.as_bytes());
        self
    }

    pub fn push_u32(mut self, value: u32) -> Self {
        let mut buf = [0u8; MAX_DECIMAL_DIGITS];
        self.bytes.extend_from_slice(encode_decimal(value, &mut buf));
        self
    }

    /// Appends raw bytes, assumed to already be UTF-8.
    pub fn push_bytes(mut self, b: &Bytes) -> Self {
        self.bytes.append(b);
        self
    }

    pub fn finish(self) -> Bytes {
        self.bytes
    }
}

/// Writes `value` as ASCII decimal digits into the tail of `buf` and returns
/// the written part.
pub fn encode_decimal(value: u32, buf: &mut [u8; MAX_DECIMAL_DIGITS]) -> &[u8] {
    let mut v = value;
    let mut start = MAX_DECIMAL_DIGITS;
    loop {
        start -= 1;
        buf[start] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    &buf[start..]
}
