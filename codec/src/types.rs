//! Core types for the codec.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric identifier of a profile setting.
///
/// Ids are assigned by the game; the same id may mean different settings
/// in different games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SettingId(u32);

impl SettingId {
    /// Creates a new setting id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for SettingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<SettingId> for u32 {
    fn from(id: SettingId) -> Self {
        id.0
    }
}

impl fmt::Display for SettingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminant selecting how an entry's value is laid out on disk.
///
/// `Unknown` only ever holds raw values outside `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    Empty,
    Int32,
    Int64,
    Double,
    String,
    Float,
    Blob,
    DateTime,
    Byte,
    Unknown(u8),
}

impl TypeTag {
    /// Every tag with a known layout, in raw order.
    pub const KNOWN: [Self; 9] = [
        Self::Empty,
        Self::Int32,
        Self::Int64,
        Self::Double,
        Self::String,
        Self::Float,
        Self::Blob,
        Self::DateTime,
        Self::Byte,
    ];

    /// Creates a tag from its raw byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Empty,
            1 => Self::Int32,
            2 => Self::Int64,
            3 => Self::Double,
            4 => Self::String,
            5 => Self::Float,
            6 => Self::Blob,
            7 => Self::DateTime,
            8 => Self::Byte,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Int32 => 1,
            Self::Int64 => 2,
            Self::Double => 3,
            Self::String => 4,
            Self::Float => 5,
            Self::Blob => 6,
            Self::DateTime => 7,
            Self::Byte => 8,
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns `true` for the nine tags with a byte layout.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Tags never seen in real profiles, whose layout is inferred.
    #[must_use]
    pub const fn is_assumed_format(self) -> bool {
        matches!(
            self,
            Self::Empty | Self::Int64 | Self::Double | Self::DateTime
        )
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Double => "Double",
            Self::String => "String",
            Self::Float => "Float",
            Self::Blob => "Blob",
            Self::DateTime => "DateTime",
            Self::Byte => "Byte",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "Unknown({raw})"),
            known => write!(f, "{}", known.name()),
        }
    }
}

/// Who owns a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OwnerKind {
    None,
    OnlineService,
    #[default]
    Game,
    Unknown(u8),
}

impl OwnerKind {
    /// Creates an owner from its raw byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::OnlineService,
            2 => Self::Game,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::OnlineService => 1,
            Self::Game => 2,
            Self::Unknown(raw) => raw,
        }
    }

    /// Only the online service and the game itself own real settings.
    #[must_use]
    pub const fn is_expected(self) -> bool {
        matches!(self, Self::OnlineService | Self::Game)
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::OnlineService => write!(f, "OnlineService"),
            Self::Game => write!(f, "Game"),
            Self::Unknown(raw) => write!(f, "Unknown({raw})"),
        }
    }
}

/// How a setting is advertised to the online service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdvertisementKind {
    #[default]
    DontAdvertise,
    OnlineService,
    Qos,
    OnlineServiceAndQos,
    Unknown(u8),
}

impl AdvertisementKind {
    /// Creates an advertisement kind from its raw byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::DontAdvertise,
            1 => Self::OnlineService,
            2 => Self::Qos,
            3 => Self::OnlineServiceAndQos,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::DontAdvertise => 0,
            Self::OnlineService => 1,
            Self::Qos => 2,
            Self::OnlineServiceAndQos => 3,
            Self::Unknown(raw) => raw,
        }
    }

    /// Profiles in the wild never advertise anything.
    #[must_use]
    pub const fn is_expected(self) -> bool {
        matches!(self, Self::DontAdvertise)
    }
}

impl fmt::Display for AdvertisementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DontAdvertise => write!(f, "DontAdvertise"),
            Self::OnlineService => write!(f, "OnlineService"),
            Self::Qos => write!(f, "QOS"),
            Self::OnlineServiceAndQos => write!(f, "OnlineServiceAndQOS"),
            Self::Unknown(raw) => write!(f, "Unknown({raw})"),
        }
    }
}
