//! On-disk envelope for bagpipe profile files.
//!
//! This crate handles the outer file format: the integrity hash, the
//! declared payload size and the LZO1X-compressed payload. It does not know
//! about entries or settings, only the structure around them.
//!
//! ```text
//! [0..20)   SHA-1 of bytes [20..EOF)
//! [20..24)  decompressed size, u32 big-endian
//! [24..EOF) LZO1X stream
//! ```
//!
//! # Design Principles
//!
//! - **Byte-exact layout** - Files must stay readable by the game.
//! - **Bounded decoding** - Declared sizes are validated against limits before allocation.
//! - **No domain knowledge** - This crate handles framing, not profile semantics.

mod compress;
mod envelope;
mod error;
mod hash;
mod header;
mod limits;

pub use compress::{compress, decompress, max_compressed_len};
pub use envelope::{decode_envelope, encode_envelope, Envelope};
pub use error::{DecodeError, EncodeError, LimitKind, WireResult};
pub use hash::envelope_hash;
pub use header::{EnvelopeHeader, HASH_LEN, HEADER_SIZE};
pub use limits::Limits;
