//! Entry record layout.
//!
//! ```text
//! owner u8 | id u32 BE | tag u8 | value (tag-dependent) | advertisement u8
//! ```

use bitstream::{ByteReader, ByteWriter};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::types::{AdvertisementKind, OwnerKind, SettingId, TypeTag};
use crate::value::SettingValue;
use crate::warnings::Warnings;

/// One stored setting.
///
/// The tag and value are kept consistent: for a known tag the value is the
/// matching variant. An entry decoded with an unknown tag carries
/// [`SettingValue::Empty`] and cannot be encoded again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Entry {
    pub owner: OwnerKind,
    pub id: SettingId,
    type_tag: TypeTag,
    value: SettingValue,
    pub advertisement: AdvertisementKind,
}

impl Entry {
    /// Creates a game-owned, non-advertised entry.
    #[must_use]
    pub fn new(id: impl Into<SettingId>, value: SettingValue) -> Self {
        Self {
            owner: OwnerKind::Game,
            id: id.into(),
            type_tag: value.type_tag(),
            value,
            advertisement: AdvertisementKind::DontAdvertise,
        }
    }

    /// Assembles an entry from all of its fields.
    ///
    /// Fails with [`CodecError::TypeMismatch`] if `value` does not belong to
    /// `type_tag`. An unknown tag only pairs with [`SettingValue::Empty`].
    pub fn from_parts(
        owner: OwnerKind,
        id: SettingId,
        type_tag: TypeTag,
        value: SettingValue,
        advertisement: AdvertisementKind,
    ) -> CodecResult<Self> {
        let found = value.type_tag();
        let consistent = match type_tag {
            TypeTag::Unknown(_) => found == TypeTag::Empty,
            known => found == known,
        };
        if !consistent {
            return Err(CodecError::TypeMismatch {
                expected: type_tag,
                found,
            });
        }
        Ok(Self {
            owner,
            id,
            type_tag,
            value,
            advertisement,
        })
    }

    #[must_use]
    pub const fn with_owner(mut self, owner: OwnerKind) -> Self {
        self.owner = owner;
        self
    }

    #[must_use]
    pub const fn with_advertisement(mut self, advertisement: AdvertisementKind) -> Self {
        self.advertisement = advertisement;
        self
    }

    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    #[must_use]
    pub const fn value(&self) -> &SettingValue {
        &self.value
    }

    /// Replaces the value, keeping the tag.
    pub fn set_value(&mut self, value: SettingValue) -> CodecResult<()> {
        let found = value.type_tag();
        if found != self.type_tag {
            return Err(CodecError::TypeMismatch {
                expected: self.type_tag,
                found,
            });
        }
        self.value = value;
        Ok(())
    }

    /// Consumes the entry and returns its value.
    #[must_use]
    pub fn into_value(self) -> SettingValue {
        self.value
    }
}

/// Decodes one entry from the cursor.
///
/// Advisory conditions are added to `warnings`; only running out of input
/// or exceeding `limits` fails.
pub fn decode_entry(
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
    warnings: &mut Warnings,
) -> CodecResult<Entry> {
    let owner = OwnerKind::from_raw(reader.read_u8()?);
    let id = SettingId::new(reader.read_u32_be()?);
    if !owner.is_expected() {
        warn!(%id, %owner, "unexpected owner");
        warnings.insert(Warnings::UNEXPECTED_OWNER);
    }

    let type_tag = TypeTag::from_raw(reader.read_u8()?);
    if type_tag.is_assumed_format() {
        warn!(%id, %type_tag, "decoding type with assumed layout");
        warnings.insert(Warnings::ASSUMED_FORMAT);
    }

    let value = match type_tag {
        TypeTag::Empty => SettingValue::Empty,
        TypeTag::Int32 => SettingValue::Int32(reader.read_i32_be()?),
        TypeTag::Int64 => SettingValue::Int64(reader.read_i64_be()?),
        TypeTag::Double => SettingValue::Double(reader.read_f64_be()?),
        TypeTag::String => {
            let bytes = read_value_bytes(reader, limits)?;
            SettingValue::String(ascii_text(bytes, id, warnings))
        }
        TypeTag::Float => SettingValue::Float(reader.read_f32_be()?),
        TypeTag::Blob => SettingValue::Blob(read_value_bytes(reader, limits)?.to_vec()),
        TypeTag::DateTime => SettingValue::DateTime(reader.read_i64_be()?),
        TypeTag::Byte => SettingValue::Byte(reader.read_u8()?),
        TypeTag::Unknown(raw) => {
            // Layout unknown: nothing is consumed and the next byte is read
            // as the advertisement.
            warn!(%id, tag = raw, "unknown type tag, assuming no payload");
            warnings.insert(Warnings::UNKNOWN_FORMAT);
            SettingValue::Empty
        }
    };

    let advertisement = AdvertisementKind::from_raw(reader.read_u8()?);
    if !advertisement.is_expected() {
        warn!(%id, %advertisement, "unexpected advertisement");
        warnings.insert(Warnings::UNEXPECTED_ADVERTISEMENT);
    }

    Ok(Entry {
        owner,
        id,
        type_tag,
        value,
        advertisement,
    })
}

/// Encodes one entry.
///
/// Types with an assumed layout are written the way they are read and raise
/// [`Warnings::ASSUMED_FORMAT`].
pub fn encode_entry(
    entry: &Entry,
    writer: &mut ByteWriter,
    warnings: &mut Warnings,
) -> CodecResult<()> {
    if !entry.type_tag.is_known() {
        return Err(CodecError::UnencodableType {
            id: entry.id.raw(),
            tag: entry.type_tag.raw(),
        });
    }
    if entry.type_tag.is_assumed_format() {
        warnings.insert(Warnings::ASSUMED_FORMAT);
    }

    writer.write_u8(entry.owner.raw());
    writer.write_u32_be(entry.id.raw());
    writer.write_u8(entry.type_tag.raw());

    match &entry.value {
        SettingValue::Empty => {}
        SettingValue::Int32(v) => writer.write_i32_be(*v),
        SettingValue::Int64(v) | SettingValue::DateTime(v) => writer.write_i64_be(*v),
        SettingValue::Double(v) => writer.write_f64_be(*v),
        SettingValue::String(s) => {
            if !s.is_ascii() {
                warn!(id = %entry.id, "replacing non-ascii characters");
                warnings.insert(Warnings::NON_ASCII_TEXT);
            }
            let bytes: Vec<u8> = s
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect();
            writer.write_len_prefixed(&bytes)?;
        }
        SettingValue::Float(v) => writer.write_f32_be(*v),
        SettingValue::Blob(b) => writer.write_len_prefixed(b)?,
        SettingValue::Byte(v) => writer.write_u8(*v),
    }

    writer.write_u8(entry.advertisement.raw());
    Ok(())
}

fn read_value_bytes<'a>(
    reader: &mut ByteReader<'a>,
    limits: &CodecLimits,
) -> CodecResult<&'a [u8]> {
    let len = reader.read_u32_be()? as usize;
    if len > limits.max_value_bytes {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::ValueBytes,
            limit: limits.max_value_bytes,
            actual: len,
        });
    }
    Ok(reader.read_bytes(len)?)
}

fn ascii_text(bytes: &[u8], id: SettingId, warnings: &mut Warnings) -> String {
    if bytes.is_ascii() {
        return bytes.iter().map(|&b| char::from(b)).collect();
    }
    warn!(%id, "replacing non-ascii bytes in string");
    warnings.insert(Warnings::NON_ASCII_TEXT);
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
        .collect()
}
