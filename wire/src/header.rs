//! Envelope header types and constants.

use bitstream::ByteReader;

use crate::error::{DecodeError, EncodeError, WireResult};

/// Length of the SHA-1 integrity hash at the start of the file.
pub const HASH_LEN: usize = 20;

/// Header size in bytes (24 total).
pub const HEADER_SIZE: usize = HASH_LEN + 4;

/// File header preceding the compressed payload.
///
/// See the crate docs for the byte layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeHeader {
    /// SHA-1 over the size field and the compressed payload.
    pub hash: [u8; HASH_LEN],
    /// Length of the payload once decompressed.
    pub decompressed_size: u32,
}

impl EnvelopeHeader {
    /// Parses the header from the start of `buf`.
    pub fn parse(buf: &[u8]) -> WireResult<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(DecodeError::FileTooSmall {
                actual: buf.len(),
                required: HEADER_SIZE,
            });
        }

        let mut reader = ByteReader::new(buf);
        let mut hash = [0u8; HASH_LEN];
        let too_small = |_| DecodeError::FileTooSmall {
            actual: buf.len(),
            required: HEADER_SIZE,
        };
        hash.copy_from_slice(reader.read_bytes(HASH_LEN).map_err(too_small)?);
        let decompressed_size = reader.read_u32_be().map_err(too_small)?;

        Ok(Self {
            hash,
            decompressed_size,
        })
    }

    /// Writes the header into the provided output buffer.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, EncodeError> {
        if out.len() < HEADER_SIZE {
            return Err(EncodeError::BufferTooSmall {
                needed: HEADER_SIZE,
                available: out.len(),
            });
        }

        out[..HASH_LEN].copy_from_slice(&self.hash);
        out[HASH_LEN..HEADER_SIZE].copy_from_slice(&self.decompressed_size.to_be_bytes());
        Ok(HEADER_SIZE)
    }
}
