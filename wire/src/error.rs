//! Error types for envelope operations.

use std::fmt;

use thiserror::Error;

use crate::header::HASH_LEN;

/// Result type for envelope decoding.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for the file envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// File is too small to contain the header.
    #[error("file too small: {actual} bytes, need at least {required}")]
    FileTooSmall { actual: usize, required: usize },

    /// Limits exceeded.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// The compression primitive rejected the payload.
    #[error("decompression failed: {reason}")]
    Decompression { reason: String },

    /// Stored integrity hash does not match the content.
    #[error(
        "integrity hash mismatch: stored {}, computed {}",
        hex::encode(stored),
        hex::encode(computed)
    )]
    HashMismatch {
        stored: [u8; HASH_LEN],
        computed: [u8; HASH_LEN],
    },
}

/// Specific envelope limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    FileBytes,
    DecompressedBytes,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileBytes => "file bytes",
            Self::DecompressedBytes => "decompressed bytes",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("buffer too small: need {needed}, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("length overflow: {length}")]
    LengthOverflow { length: usize },

    #[error("compression failed: {reason}")]
    Compression { reason: String },
}
