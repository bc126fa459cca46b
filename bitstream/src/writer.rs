//! Byte-level writer for encoding big-endian binary records.

use crate::error::{BitError, BitResult};

/// A growable big-endian writer.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32_be(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32_be(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64_be(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian IEEE-754 single.
    pub fn write_f32_be(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian IEEE-754 double.
    pub fn write_f64_be(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes raw bytes with no framing.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes a big-endian `u32` length followed by the bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::LengthOverflow`] if `bytes` is longer than `u32::MAX`.
    pub fn write_len_prefixed(&mut self, bytes: &[u8]) -> BitResult<()> {
        let len = u32::try_from(bytes.len()).map_err(|_| BitError::LengthOverflow {
            length: bytes.len(),
        })?;
        self.write_u32_be(len);
        self.write_bytes(bytes);
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert_eq!(writer.len(), 0);
        assert!(writer.is_empty());
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn write_big_endian_integers() {
        let mut writer = ByteWriter::new();
        writer.write_u32_be(0x1234_5678);
        writer.write_i32_be(-2);
        writer.write_u8(0xAB);
        assert_eq!(
            writer.finish(),
            vec![0x12, 0x34, 0x56, 0x78, 0xFF, 0xFF, 0xFF, 0xFE, 0xAB]
        );
    }

    #[test]
    fn write_i64() {
        let mut writer = ByteWriter::new();
        writer.write_i64_be(-1);
        assert_eq!(writer.finish(), vec![0xFF; 8]);
    }

    #[test]
    fn write_float_bits() {
        let mut writer = ByteWriter::new();
        writer.write_f32_be(1.0);
        writer.write_f64_be(1.0);
        let bytes = writer.finish();
        assert_eq!(&bytes[..4], &[0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(&bytes[4..], &[0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn write_len_prefixed() {
        let mut writer = ByteWriter::new();
        writer.write_len_prefixed(b"hey").unwrap();
        assert_eq!(writer.finish(), vec![0, 0, 0, 3, b'h', b'e', b'y']);
    }

    #[test]
    fn with_capacity() {
        let writer = ByteWriter::with_capacity(100);
        assert_eq!(writer.len(), 0);
    }

    #[test]
    fn finish_into() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);

        let mut buf = vec![0x00, 0x11];
        writer.finish_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x11, 0xAB]);
    }
}
