//! Badass rewards text.
//!
//! The rewards entry is a String holding fourteen point totals. Each total
//! is XORed with a fixed mask and the resulting 32-bit words are written
//! LSB-first as 5-bit symbols from a 32-character alphabet.

use std::fmt;
use std::str::FromStr;

use bitstream::{SymbolPacker, SymbolUnpacker};
use thiserror::Error;

use crate::diminishing::{apply_diminishing_returns, reverse_diminishing_returns, reward_interval};
use crate::entry::Entry;
use crate::error::{CodecError, CodecResult};
use crate::types::TypeTag;
use crate::value::SettingValue;

/// Symbols of the rewards text, indexed by value.
pub const REWARD_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Mask applied to every word.
pub const REWARD_XOR_MASK: u32 = 0x9A36_52D9;

/// Number of stats stored in the rewards text.
pub const REWARD_STAT_COUNT: usize = 14;

const SYMBOL_BITS: u8 = 5;

/// Decodes rewards text into unmasked words.
///
/// Trailing bits that do not fill a word are dropped. The result is padded
/// with zeros to at least [`REWARD_STAT_COUNT`] words.
pub fn decode_reward_words(text: &str) -> CodecResult<Vec<u32>> {
    let mut unpacker = SymbolUnpacker::new(SYMBOL_BITS)?;
    for (position, symbol) in text.chars().enumerate() {
        let index = REWARD_ALPHABET
            .find(symbol)
            .and_then(|index| u8::try_from(index).ok())
            .ok_or(CodecError::InvalidSymbol { symbol, position })?;
        unpacker.push_symbol(index)?;
    }

    let mut words: Vec<u32> = unpacker
        .finish()
        .into_iter()
        .map(|word| word ^ REWARD_XOR_MASK)
        .collect();
    if words.len() < REWARD_STAT_COUNT {
        words.resize(REWARD_STAT_COUNT, 0);
    }
    Ok(words)
}

/// Encodes point totals as rewards text.
///
/// Negative totals are written as zero. A final partial symbol is emitted
/// for leftover bits.
pub fn encode_reward_words(values: &[i32]) -> CodecResult<String> {
    let alphabet = REWARD_ALPHABET.as_bytes();
    let mut packer = SymbolPacker::new(SYMBOL_BITS)?;
    for &value in values {
        packer.push_word(value.max(0).unsigned_abs() ^ REWARD_XOR_MASK);
    }
    Ok(packer
        .finish()
        .into_iter()
        .map(|symbol| char::from(alphabet[usize::from(symbol)]))
        .collect())
}

/// The fourteen rewarded stats, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RewardStat {
    MaxHealth,
    ShieldCapacity,
    ShieldDelay,
    ShieldRate,
    MeleeDamage,
    GrenadeDamage,
    GunAccuracy,
    GunDamage,
    FireRate,
    RecoilReduction,
    ReloadSpeed,
    ElementalChance,
    ElementalDamage,
    CritDamage,
}

impl RewardStat {
    pub const ALL: [Self; REWARD_STAT_COUNT] = [
        Self::MaxHealth,
        Self::ShieldCapacity,
        Self::ShieldDelay,
        Self::ShieldRate,
        Self::MeleeDamage,
        Self::GrenadeDamage,
        Self::GunAccuracy,
        Self::GunDamage,
        Self::FireRate,
        Self::RecoilReduction,
        Self::ReloadSpeed,
        Self::ElementalChance,
        Self::ElementalDamage,
        Self::CritDamage,
    ];

    /// Position in the rewards text.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MaxHealth => "MaxHealth",
            Self::ShieldCapacity => "ShieldCapacity",
            Self::ShieldDelay => "ShieldDelay",
            Self::ShieldRate => "ShieldRate",
            Self::MeleeDamage => "MeleeDamage",
            Self::GrenadeDamage => "GrenadeDamage",
            Self::GunAccuracy => "GunAccuracy",
            Self::GunDamage => "GunDamage",
            Self::FireRate => "FireRate",
            Self::RecoilReduction => "RecoilReduction",
            Self::ReloadSpeed => "ReloadSpeed",
            Self::ElementalChance => "ElementalChance",
            Self::ElementalDamage => "ElementalDamage",
            Self::CritDamage => "CritDamage",
        }
    }
}

impl fmt::Display for RewardStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stat name that is not one of [`RewardStat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reward stat {0:?}")]
pub struct UnknownRewardStat(pub String);

impl FromStr for RewardStat {
    type Err = UnknownRewardStat;

    /// Accepts the stat name in any case, with or without `-`/`_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|stat| stat.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownRewardStat(s.to_owned()))
    }
}

/// Point totals of all fourteen stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardPoints([i32; REWARD_STAT_COUNT]);

impl RewardPoints {
    #[must_use]
    pub const fn new(points: [i32; REWARD_STAT_COUNT]) -> Self {
        Self(points)
    }

    /// Parses rewards text. Words past the fourteenth are ignored.
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_text(text: &str) -> CodecResult<Self> {
        let words = decode_reward_words(text)?;
        let mut points = [0i32; REWARD_STAT_COUNT];
        for (slot, word) in points.iter_mut().zip(words) {
            *slot = word as i32;
        }
        Ok(Self(points))
    }

    pub fn to_text(&self) -> CodecResult<String> {
        encode_reward_words(&self.0)
    }

    /// Reads the rewards from a String entry.
    pub fn from_entry(entry: &Entry) -> CodecResult<Self> {
        match entry.value() {
            SettingValue::String(text) => Self::from_text(text),
            other => Err(CodecError::TypeMismatch {
                expected: TypeTag::String,
                found: other.type_tag(),
            }),
        }
    }

    /// Stores the rewards into a String entry.
    pub fn write_to_entry(&self, entry: &mut Entry) -> CodecResult<()> {
        entry.set_value(SettingValue::String(self.to_text()?))
    }

    #[must_use]
    pub const fn as_array(&self) -> &[i32; REWARD_STAT_COUNT] {
        &self.0
    }

    #[must_use]
    pub const fn points(&self, stat: RewardStat) -> i32 {
        self.0[stat.index()]
    }

    pub fn set_points(&mut self, stat: RewardStat, points: i32) {
        self.0[stat.index()] = points;
    }

    /// Displayed bonus for a stat.
    #[must_use]
    pub fn bonus(&self, stat: RewardStat) -> f64 {
        apply_diminishing_returns(self.points(stat))
    }

    /// Sets a stat to the point total closest to `bonus`.
    pub fn set_bonus(&mut self, stat: RewardStat, bonus: f64) {
        self.set_points(stat, reverse_diminishing_returns(bonus));
    }

    /// Bonus change of one point for a stat.
    #[must_use]
    pub fn interval(&self, stat: RewardStat) -> f64 {
        reward_interval(self.points(stat))
    }

    pub fn iter(&self) -> impl Iterator<Item = (RewardStat, i32)> + '_ {
        RewardStat::ALL.into_iter().zip(self.0)
    }
}
