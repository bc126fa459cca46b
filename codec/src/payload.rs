//! Decompressed payload layout.
//!
//! ```text
//! entry count i32 BE | entries... | tail
//! ```
//!
//! The tail is padding. Writers emit a single [`TRAILING_MARKER`]; files in
//! the wild also carry runs of zero bytes, with or without the marker.

use bitstream::{ByteReader, ByteWriter};
use tracing::{debug, warn};

use crate::entry::{decode_entry, encode_entry, Entry};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::warnings::Warnings;

/// Byte written after the last entry.
pub const TRAILING_MARKER: u8 = 1;

/// Entries decoded from a payload, plus any advisory flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPayload {
    pub entries: Vec<Entry>,
    pub warnings: Warnings,
}

/// Decodes a decompressed payload.
///
/// A negative entry count is read as zero; the remaining bytes are then
/// judged as tail.
pub fn decode_payload(buf: &[u8], limits: &CodecLimits) -> CodecResult<DecodedPayload> {
    let mut reader = ByteReader::new(buf);
    let declared = reader.read_i32_be()?;
    let count = usize::try_from(declared).unwrap_or(0);
    if count > limits.max_entries {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::Entries,
            limit: limits.max_entries,
            actual: count,
        });
    }
    debug!(declared, payload_len = buf.len(), "decoding entries");

    let mut warnings = Warnings::none();
    let mut entries = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        entries.push(decode_entry(&mut reader, limits, &mut warnings)?);
    }

    let tail = reader.rest();
    if !is_recognized_tail(tail) {
        warn!(tail_len = tail.len(), "unrecognized trailing data");
        warnings.insert(Warnings::UNRECOGNIZED_TRAILING_DATA);
    }

    Ok(DecodedPayload { entries, warnings })
}

/// Encodes entries followed by the trailing marker.
///
/// Returns the payload and the advisory flags raised while writing.
pub fn encode_payload(entries: &[Entry]) -> CodecResult<(Vec<u8>, Warnings)> {
    let count = i32::try_from(entries.len()).map_err(|_| CodecError::LimitsExceeded {
        kind: LimitKind::Entries,
        limit: i32::MAX as usize,
        actual: entries.len(),
    })?;

    let mut writer = ByteWriter::with_capacity(4 + entries.len() * 16);
    let mut warnings = Warnings::none();
    writer.write_i32_be(count);
    for entry in entries {
        encode_entry(entry, &mut writer, &mut warnings)?;
    }
    writer.write_u8(TRAILING_MARKER);

    Ok((writer.finish(), warnings))
}

/// Empty, the marker alone, zeros, or the marker followed by zeros.
fn is_recognized_tail(tail: &[u8]) -> bool {
    let padding = match tail.split_first() {
        Some((&TRAILING_MARKER, rest)) => rest,
        _ => tail,
    };
    padding.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SettingValue;

    fn payload_with_tail(tail: &[u8]) -> Vec<u8> {
        let mut buf = vec![0, 0, 0, 0];
        buf.extend_from_slice(tail);
        buf
    }

    #[test]
    fn recognized_tails() {
        assert!(is_recognized_tail(&[]));
        assert!(is_recognized_tail(&[1]));
        assert!(is_recognized_tail(&[0, 0, 0]));
        assert!(is_recognized_tail(&[1, 0, 0]));
        assert!(!is_recognized_tail(&[1, 1]));
        assert!(!is_recognized_tail(&[0, 1]));
        assert!(!is_recognized_tail(&[2]));
    }

    #[test]
    fn empty_profile_with_marker() {
        let decoded =
            decode_payload(&payload_with_tail(&[1]), &CodecLimits::for_testing()).unwrap();
        assert!(decoded.entries.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn zero_padding_is_not_flagged() {
        let decoded =
            decode_payload(&payload_with_tail(&[0, 0, 0]), &CodecLimits::for_testing()).unwrap();
        assert!(!decoded
            .warnings
            .contains(Warnings::UNRECOGNIZED_TRAILING_DATA));
    }

    #[test]
    fn stray_byte_after_marker_is_flagged() {
        let decoded =
            decode_payload(&payload_with_tail(&[1, 1]), &CodecLimits::for_testing()).unwrap();
        assert!(decoded
            .warnings
            .contains(Warnings::UNRECOGNIZED_TRAILING_DATA));
    }

    #[test]
    fn negative_count_reads_as_empty() {
        let buf = [0xFF, 0xFF, 0xFF, 0xFF, 1];
        let decoded = decode_payload(&buf, &CodecLimits::for_testing()).unwrap();
        assert!(decoded.entries.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn count_over_limit_rejected() {
        let limits = CodecLimits {
            max_entries: 1,
            ..CodecLimits::for_testing()
        };
        let buf = [0, 0, 0, 2];
        let err = decode_payload(&buf, &limits).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LimitsExceeded {
                kind: LimitKind::Entries,
                ..
            }
        ));
    }

    #[test]
    fn short_count_is_truncated() {
        let err = decode_payload(&[0, 0], &CodecLimits::for_testing()).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn missing_entries_is_truncated() {
        let err = decode_payload(&[0, 0, 0, 1], &CodecLimits::for_testing()).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn encode_appends_marker() {
        let entries = vec![Entry::new(1, SettingValue::Byte(9))];
        let (bytes, warnings) = encode_payload(&entries).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 1, 2, 0, 0, 0, 1, 8, 9, 0, TRAILING_MARKER]);
        assert!(warnings.is_empty());

        let decoded = decode_payload(&bytes, &CodecLimits::for_testing()).unwrap();
        assert_eq!(decoded.entries, entries);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn encode_empty() {
        let (bytes, _) = encode_payload(&[]).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, TRAILING_MARKER]);
    }
}
