//! Low-level byte and symbol packing primitives for the bagpipe profile codec.
//!
//! This crate provides [`ByteReader`] and [`ByteWriter`] for big-endian record
//! encoding, and [`SymbolPacker`] / [`SymbolUnpacker`] for cutting 32-bit words
//! into narrow symbols and back.
//! It is designed for bounded, panic-free operation with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about profiles, entries, or games.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u8(2);
//! writer.write_i32_be(-7);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u8().unwrap(), 2);
//! assert_eq!(reader.read_i32_be().unwrap(), -7);
//! ```

mod error;
mod reader;
mod symbols;
mod writer;

pub use error::{BitError, BitResult};
pub use reader::ByteReader;
pub use symbols::{SymbolPacker, SymbolUnpacker, MAX_SYMBOL_BITS};
pub use writer::ByteWriter;
