//! Advisory flags raised while decoding or encoding a profile.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of advisory conditions.
///
/// None of these abort an operation; they mean some data was interpreted
/// approximately. Callers usually surface them as a single notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Warnings(u16);

impl Warnings {
    /// An owner byte other than `OnlineService` or `Game`.
    pub const UNEXPECTED_OWNER: Self = Self(1 << 0);

    /// A type tag whose layout was never observed in real data.
    pub const ASSUMED_FORMAT: Self = Self(1 << 1);

    /// A type tag with no known layout; decoded as zero bytes.
    pub const UNKNOWN_FORMAT: Self = Self(1 << 2);

    /// An advertisement byte other than `DontAdvertise`.
    pub const UNEXPECTED_ADVERTISEMENT: Self = Self(1 << 3);

    /// Payload bytes after the last entry that are not padding.
    pub const UNRECOGNIZED_TRAILING_DATA: Self = Self(1 << 4);

    /// String bytes outside ASCII were replaced with `?`.
    pub const NON_ASCII_TEXT: Self = Self(1 << 5);

    const ALL: [(Self, &'static str); 6] = [
        (Self::UNEXPECTED_OWNER, "unexpected owner"),
        (Self::ASSUMED_FORMAT, "assumed format"),
        (Self::UNKNOWN_FORMAT, "unknown format"),
        (Self::UNEXPECTED_ADVERTISEMENT, "unexpected advertisement"),
        (Self::UNRECOGNIZED_TRAILING_DATA, "unrecognized trailing data"),
        (Self::NON_ASCII_TEXT, "non-ascii text"),
    ];

    /// The empty set.
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// Creates a set from raw bits.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if any flag is set.
    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Returns `true` if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Names of the set flags, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for Warnings {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Warnings {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Display for Warnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
