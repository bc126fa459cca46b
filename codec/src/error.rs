//! Error types for codec operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::TypeTag;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Fatal errors from profile encoding/decoding.
///
/// Recoverable oddities in the data are not errors; they are reported
/// through [`Warnings`](crate::Warnings) instead.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Envelope error (header, limits, decompression, hash).
    #[error("wire error: {0}")]
    Wire(#[from] wire::DecodeError),

    /// Envelope could not be built (compression, size overflow).
    #[error("envelope error: {0}")]
    Envelope(#[from] wire::EncodeError),

    /// Byte cursor or symbol packing error, including truncated input.
    #[error("bitstream error: {0}")]
    Bitstream(#[from] bitstream::BitError),

    /// A character outside the rewards alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The entry's type tag has no known byte layout.
    #[error("cannot encode entry {id} with unknown type tag {tag}")]
    UnencodableType { id: u32, tag: u8 },

    /// A value was paired with an entry of a different type.
    #[error("value of type {found} does not match entry type {expected}")]
    TypeMismatch { expected: TypeTag, found: TypeTag },

    /// Limits exceeded.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Index outside the profile's entry list.
    #[error("index {index} out of range for profile with {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// File could not be read or written.
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Entries,
    ValueBytes,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entries => "entries",
            Self::ValueBytes => "value bytes",
        };
        write!(f, "{name}")
    }
}

impl CodecError {
    /// Returns `true` if the input ended before a field was complete.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(
            self,
            Self::Bitstream(bitstream::BitError::UnexpectedEof { .. })
        )
    }
}
