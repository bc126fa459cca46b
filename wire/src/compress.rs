//! LZO1X compression primitive.
//!
//! Thin wrapper over `rust-lzo`: `lzo1x_1` for compression and the
//! bounds-checked ("safe") decompressor.

use rust_lzo::{LZOContext, LZOError};
use tracing::debug;

use crate::error::{DecodeError, EncodeError};

/// Worst-case compressed size for `len` input bytes.
#[must_use]
pub const fn max_compressed_len(len: usize) -> usize {
    len + len / 16 + 64 + 3
}

/// Describes a non-OK `rust-lzo` status code.
fn lzo_reason(code: i32) -> String {
    let name = match code {
        -1 => "error",
        -2 => "out of memory",
        -3 => "not compressible",
        -4 => "input overrun",
        -5 => "output overrun",
        -6 => "lookbehind overrun",
        -7 => "end of stream not found",
        -8 => "input not consumed",
        _ => "unknown",
    };
    format!("lzo status {code} ({name})")
}

/// Compresses `data` with LZO1X-1.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let capacity = max_compressed_len(data.len()).max(rust_lzo::worst_compress(data.len()));
    let mut out = Vec::with_capacity(capacity);
    let mut ctx = LZOContext::new();
    let status = ctx.compress(data, &mut out);
    if !matches!(status, LZOError::OK) {
        return Err(EncodeError::Compression {
            reason: lzo_reason(status as i32),
        });
    }

    debug!(input = data.len(), output = out.len(), "lzo compress");
    Ok(out)
}

/// Decompresses an LZO1X stream into at most `expected_len` bytes.
///
/// The returned buffer is truncated to the number of bytes the stream
/// actually produced.
pub fn decompress(data: &[u8], expected_len: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = vec![0u8; expected_len];
    let (produced, status) = LZOContext::decompress_to_slice(data, &mut out);
    if !matches!(status, LZOError::OK) {
        return Err(DecodeError::Decompression {
            reason: lzo_reason(status as i32),
        });
    }

    let produced = produced.len();
    out.truncate(produced);
    debug!(input = data.len(), expected_len, produced, "lzo decompress");
    Ok(out)
}
