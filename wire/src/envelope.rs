//! Envelope decoding and encoding.

use tracing::debug;

use crate::compress;
use crate::error::{DecodeError, EncodeError, LimitKind, WireResult};
use crate::hash::envelope_hash;
use crate::header::{EnvelopeHeader, HASH_LEN, HEADER_SIZE};
use crate::limits::Limits;

/// A decoded file envelope borrowing its compressed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub header: EnvelopeHeader,
    pub payload: &'a [u8],
}

impl Envelope<'_> {
    /// Recomputes the integrity hash from the size field and payload.
    #[must_use]
    pub fn computed_hash(&self) -> [u8; HASH_LEN] {
        envelope_hash(self.header.decompressed_size, self.payload)
    }

    /// Returns `true` if the stored hash matches the content.
    #[must_use]
    pub fn hash_matches(&self) -> bool {
        self.computed_hash() == self.header.hash
    }

    /// Fails with [`DecodeError::HashMismatch`] if the stored hash is stale.
    pub fn verify_hash(&self) -> WireResult<()> {
        let computed = self.computed_hash();
        if computed != self.header.hash {
            return Err(DecodeError::HashMismatch {
                stored: self.header.hash,
                computed,
            });
        }
        Ok(())
    }

    /// Decompresses the payload using the declared size as the output bound.
    pub fn decompress(&self, limits: &Limits) -> WireResult<Vec<u8>> {
        let declared = self.header.decompressed_size as usize;
        if declared > limits.max_decompressed_bytes {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::DecompressedBytes,
                limit: limits.max_decompressed_bytes,
                actual: declared,
            });
        }
        compress::decompress(self.payload, declared)
    }
}

/// Splits a profile file into header and compressed payload.
///
/// The stored hash is parsed but not checked; see [`Envelope::verify_hash`].
pub fn decode_envelope<'a>(buf: &'a [u8], limits: &Limits) -> WireResult<Envelope<'a>> {
    if buf.len() > limits.max_file_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::FileBytes,
            limit: limits.max_file_bytes,
            actual: buf.len(),
        });
    }

    let header = EnvelopeHeader::parse(buf)?;
    let payload = &buf[HEADER_SIZE..];
    debug!(
        decompressed_size = header.decompressed_size,
        compressed_len = payload.len(),
        "parsed envelope header"
    );

    Ok(Envelope { header, payload })
}

/// Compresses `decompressed`, hashes it and lays out the complete file.
///
/// Nothing is written anywhere; the caller owns the returned buffer.
pub fn encode_envelope(decompressed: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let decompressed_size =
        u32::try_from(decompressed.len()).map_err(|_| EncodeError::LengthOverflow {
            length: decompressed.len(),
        })?;

    let compressed = compress::compress(decompressed)?;
    let header = EnvelopeHeader {
        hash: envelope_hash(decompressed_size, &compressed),
        decompressed_size,
    };

    let mut out = vec![0u8; HEADER_SIZE + compressed.len()];
    let written = header.encode(&mut out)?;
    out[written..].copy_from_slice(&compressed);
    Ok(out)
}
