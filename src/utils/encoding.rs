//! Fixed-width integer encoding and a bounds-checked byte cursor.
//!
//! Multi-byte integers are written big-endian so that keys built from them
//! sort by their numeric value in a byte-ordered store.

use crate::error::{EncodingError, Result};

/// Append a u8
#[inline]
pub fn put_fixed8(dst: &mut Vec<u8>, value: u8) {
    dst.push(value);
}

/// Append a big-endian u32
#[inline]
pub fn put_fixed32(dst: &mut Vec<u8>, value: u32) {
    dst.extend_from_slice(&value.to_be_bytes());
}

/// Append a big-endian u64
#[inline]
pub fn put_fixed64(dst: &mut Vec<u8>, value: u64) {
    dst.extend_from_slice(&value.to_be_bytes());
}

/// Append a u32 length followed by the bytes themselves.
///
/// Fails only when `bytes` is longer than a u32 can describe.
pub fn put_sized_bytes(dst: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
    let len = u32::try_from(bytes.len()).map_err(|_| EncodingError::TooLong { len: bytes.len() })?;
    put_fixed32(dst, len);
    dst.extend_from_slice(bytes);
    Ok(())
}

/// Size of a length-prefixed component once encoded
#[inline]
pub fn sized_bytes_len(bytes: &[u8]) -> usize {
    4 + bytes.len()
}

/// Read cursor over an immutable buffer.
///
/// Every `get_*` checks that enough bytes remain before touching the buffer;
/// a failed read leaves the position where it was.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Current offset from the start of the buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Everything not yet consumed, without advancing
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Consume exactly `n` bytes, or nothing if fewer remain
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.remaining() < n {
            return None;
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Some(out)
    }

    pub fn get_fixed8(&mut self) -> Option<u8> {
        self.take_array::<1>().map(|b| b[0])
    }

    pub fn get_fixed32(&mut self) -> Option<u32> {
        self.take_array::<4>().map(u32::from_be_bytes)
    }

    pub fn get_fixed64(&mut self) -> Option<u64> {
        self.take_array::<8>().map(u64::from_be_bytes)
    }

    /// Read a u32 length and then that many bytes.
    ///
    /// A missing length field and a declared length longer than the rest of
    /// the buffer are both corruption. On error the position is unchanged.
    pub fn get_sized_bytes(&mut self) -> Result<&'a [u8]> {
        let start = self.pos;
        let len = self.get_fixed32().ok_or_else(EncodingError::insufficient_length)? as usize;
        match self.take(len) {
            Some(bytes) => Ok(bytes),
            None => {
                self.pos = start;
                Err(EncodingError::insufficient_length())
            }
        }
    }
}
