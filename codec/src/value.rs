//! Setting values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::TypeTag;

/// The value carried by an entry; the variant always matches the entry's tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SettingValue {
    Empty,
    Int32(i32),
    Int64(i64),
    Double(f64),
    /// ASCII text.
    String(String),
    Float(f32),
    Blob(Vec<u8>),
    /// Signed tick count.
    DateTime(i64),
    Byte(u8),
}

impl SettingValue {
    /// Returns the tag this variant is stored under.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Empty => TypeTag::Empty,
            Self::Int32(_) => TypeTag::Int32,
            Self::Int64(_) => TypeTag::Int64,
            Self::Double(_) => TypeTag::Double,
            Self::String(_) => TypeTag::String,
            Self::Float(_) => TypeTag::Float,
            Self::Blob(_) => TypeTag::Blob,
            Self::DateTime(_) => TypeTag::DateTime,
            Self::Byte(_) => TypeTag::Byte,
        }
    }

    /// The zero value for a known tag, or `None` for an unknown one.
    #[must_use]
    pub const fn default_for(tag: TypeTag) -> Option<Self> {
        let value = match tag {
            TypeTag::Empty => Self::Empty,
            TypeTag::Int32 => Self::Int32(0),
            TypeTag::Int64 => Self::Int64(0),
            TypeTag::Double => Self::Double(0.0),
            TypeTag::String => Self::String(String::new()),
            TypeTag::Float => Self::Float(0.0),
            TypeTag::Blob => Self::Blob(Vec::new()),
            TypeTag::DateTime => Self::DateTime(0),
            TypeTag::Byte => Self::Byte(0),
            TypeTag::Unknown(_) => return None,
        };
        Some(value)
    }

    #[must_use]
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<f32> for SettingValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<u8> for SettingValue {
    fn from(v: u8) -> Self {
        Self::Byte(v)
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Vec<u8>> for SettingValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) | Self::DateTime(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Blob(b) => write!(f, "<{} bytes>", b.len()),
            Self::Byte(v) => write!(f, "{v}"),
        }
    }
}
