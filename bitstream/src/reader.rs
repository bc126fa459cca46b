//! Byte-level reader with bounded operations.

use crate::error::{BitError, BitResult};

/// A big-endian cursor for decoding length-prefixed binary records.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread tail without consuming it.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> BitResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32_be(&mut self) -> BitResult<u32> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32_be(&mut self) -> BitResult<i32> {
        self.read_array::<4>().map(i32::from_be_bytes)
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64_be(&mut self) -> BitResult<i64> {
        self.read_array::<8>().map(i64::from_be_bytes)
    }

    /// Reads a big-endian IEEE-754 single.
    pub fn read_f32_be(&mut self) -> BitResult<f32> {
        self.read_array::<4>().map(f32::from_be_bytes)
    }

    /// Reads a big-endian IEEE-754 double.
    pub fn read_f64_be(&mut self) -> BitResult<f64> {
        self.read_array::<8>().map(f64::from_be_bytes)
    }

    /// Reads `len` raw bytes, borrowing them from the underlying buffer.
    pub fn read_bytes(&mut self, len: usize) -> BitResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads a big-endian `u32` length followed by that many bytes.
    pub fn read_len_prefixed(&mut self) -> BitResult<&'a [u8]> {
        let len = self.read_u32_be()?;
        let len = usize::try_from(len).map_err(|_| BitError::UnexpectedEof {
            requested: usize::MAX,
            available: self.remaining(),
        })?;
        self.read_bytes(len)
    }

    fn ensure_bytes(&self, bytes: usize) -> BitResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(BitError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> BitResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
        assert!(reader.rest().is_empty());
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let result = reader.read_u8();
        assert!(matches!(
            result,
            Err(BitError::UnexpectedEof {
                requested: 1,
                available: 0
            })
        ));
    }

    #[test]
    fn read_big_endian_integers() {
        let mut reader = ByteReader::new(&[
            0x12, 0x34, 0x56, 0x78, 0xFF, 0xFF, 0xFF, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x01, 0x00,
        ]);
        assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_i32_be().unwrap(), -2);
        assert_eq!(reader.read_i64_be().unwrap(), 256);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_floats() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1.5f32.to_be_bytes());
        bytes.extend_from_slice(&(-0.25f64).to_be_bytes());
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_f32_be().unwrap(), 1.5);
        assert_eq!(reader.read_f64_be().unwrap(), -0.25);
    }

    #[test]
    fn short_integer_fails_without_consuming() {
        let mut reader = ByteReader::new(&[0x00, 0x01, 0x02]);
        let err = reader.read_u32_be().unwrap_err();
        assert_eq!(
            err,
            BitError::UnexpectedEof {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_len_prefixed_bytes() {
        let mut reader = ByteReader::new(&[0, 0, 0, 3, b'a', b'b', b'c', 9]);
        assert_eq!(reader.read_len_prefixed().unwrap(), b"abc");
        assert_eq!(reader.rest(), &[9]);
    }

    #[test]
    fn read_len_prefixed_truncated() {
        let mut reader = ByteReader::new(&[0, 0, 0, 5, b'a']);
        let err = reader.read_len_prefixed().unwrap_err();
        assert!(matches!(
            err,
            BitError::UnexpectedEof {
                requested: 5,
                available: 1
            }
        ));
    }
}
