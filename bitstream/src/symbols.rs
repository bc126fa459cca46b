//! LSB-first packing of 32-bit words into narrow symbols.
//!
//! Words are laid end to end as one little-endian bit stream (bit 0 of the
//! first word first) and cut into `width`-bit symbols, again least
//! significant bit first. A symbol may straddle two words.

use crate::error::{BitError, BitResult};

/// Widest symbol supported. Symbols are returned as `u8`.
pub const MAX_SYMBOL_BITS: u8 = 8;

const WORD_BITS: u32 = 32;

fn check_width(width: u8) -> BitResult<()> {
    if width == 0 || width > MAX_SYMBOL_BITS {
        return Err(BitError::InvalidBitCount {
            bits: width,
            max_bits: MAX_SYMBOL_BITS,
        });
    }
    Ok(())
}

/// Splits a sequence of 32-bit words into fixed-width symbols.
#[derive(Debug, Clone)]
pub struct SymbolPacker {
    acc: u64,
    bits: u32,
    width: u8,
    symbols: Vec<u8>,
}

impl SymbolPacker {
    /// Creates a packer emitting `width`-bit symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `width` is zero or above [`MAX_SYMBOL_BITS`].
    pub fn new(width: u8) -> BitResult<Self> {
        check_width(width)?;
        Ok(Self {
            acc: 0,
            bits: 0,
            width,
            symbols: Vec::new(),
        })
    }

    /// Number of symbols emitted so far (not counting a pending partial symbol).
    #[must_use]
    pub fn symbols_written(&self) -> usize {
        self.symbols.len()
    }

    /// Appends one word to the stream, emitting every symbol it completes.
    pub fn push_word(&mut self, word: u32) {
        let width = u32::from(self.width);
        let mask = (1u64 << width) - 1;

        self.acc |= u64::from(word) << self.bits;
        self.bits += WORD_BITS;
        while self.bits >= width {
            self.symbols.push((self.acc & mask) as u8);
            self.acc >>= width;
            self.bits -= width;
        }
    }

    /// Flushes a trailing partial symbol (zero-padded in its high bits) and
    /// returns all symbols.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits > 0 {
            let mask = (1u64 << self.width) - 1;
            self.symbols.push((self.acc & mask) as u8);
        }
        self.symbols
    }
}

/// Reassembles 32-bit words from fixed-width symbols.
///
/// Bits that do not complete a word by the end of input are dropped.
#[derive(Debug, Clone)]
pub struct SymbolUnpacker {
    acc: u64,
    bits: u32,
    width: u8,
    words: Vec<u32>,
}

impl SymbolUnpacker {
    /// Creates an unpacker consuming `width`-bit symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `width` is zero or above [`MAX_SYMBOL_BITS`].
    pub fn new(width: u8) -> BitResult<Self> {
        check_width(width)?;
        Ok(Self {
            acc: 0,
            bits: 0,
            width,
            words: Vec::new(),
        })
    }

    /// Number of complete words collected so far.
    #[must_use]
    pub fn words_read(&self) -> usize {
        self.words.len()
    }

    /// Bits collected towards the next, still incomplete word.
    #[must_use]
    pub const fn pending_bits(&self) -> u32 {
        self.bits
    }

    /// Appends one symbol to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::ValueOutOfRange`] if `symbol` does not fit in the symbol width.
    pub fn push_symbol(&mut self, symbol: u8) -> BitResult<()> {
        if u32::from(symbol) >> self.width != 0 {
            return Err(BitError::ValueOutOfRange {
                value: u64::from(symbol),
                bits: self.width,
            });
        }

        self.acc |= u64::from(symbol) << self.bits;
        self.bits += u32::from(self.width);
        if self.bits >= WORD_BITS {
            self.words.push((self.acc & u64::from(u32::MAX)) as u32);
            self.acc >>= WORD_BITS;
            self.bits -= WORD_BITS;
        }
        Ok(())
    }

    /// Returns the complete words, discarding any partial tail.
    #[must_use]
    pub fn finish(self) -> Vec<u32> {
        self.words
    }
}
