//! Golden keys, badass rank and customization unlocks.
//!
//! These are plain values stored in ordinary entries; the helpers here know
//! how each game encodes them.

use crate::entry::Entry;
use crate::error::CodecResult;
use crate::value::SettingValue;

/// Largest key count written to the blob form.
///
/// Each 255 keys costs three bytes; larger blobs push the profile past the
/// size the game accepts.
pub const MAX_BLOB_GOLDEN_KEYS: i32 = 333_333;

const KEYS_PER_GROUP: i32 = 0xFF;

/// Points needed per badass rank.
pub const BADASS_POINTS_PER_RANK: i32 = 5;

/// Length of the customization unlock blob.
pub const CUSTOMIZATIONS_LEN: usize = 1001;

/// Reads the key count from the blob form.
///
/// The blob is a list of 3-byte groups `[_, earned, spent]`; incomplete
/// trailing groups are ignored.
#[must_use]
pub fn golden_keys_from_blob(blob: &[u8]) -> i64 {
    blob.chunks_exact(3)
        .map(|group| i64::from(group[1]) - i64::from(group[2]))
        .sum()
}

/// Builds the blob form holding `keys` keys.
///
/// Negative counts are written as zero, so the blob always holds at least
/// one group. The plain group formula would yield an empty blob for
/// `keys <= -255`; the game never stores negative keys in this form.
#[must_use]
pub fn golden_keys_blob(keys: i32) -> Vec<u8> {
    let keys = keys.max(0);
    let groups = if keys == 0 {
        1
    } else {
        (keys - 1) / KEYS_PER_GROUP + 1
    };
    let mut blob = vec![0u8; 3 * groups as usize];
    let mut remaining = keys;
    for group in blob.chunks_exact_mut(3) {
        let earned = remaining.min(KEYS_PER_GROUP);
        group[1] = u8::try_from(earned).unwrap_or(u8::MAX);
        remaining -= earned;
        if remaining == 0 {
            break;
        }
    }
    blob
}

/// Keys available from the counter form.
#[must_use]
pub const fn golden_keys_from_counter(count: i32, spent: i32) -> i32 {
    count.saturating_sub(if spent > 0 { spent } else { 0 })
}

/// Counter value that leaves `keys` available after `spent`.
#[must_use]
pub const fn golden_keys_counter(keys: i32, spent: i32) -> i32 {
    keys.saturating_add(if spent > 0 { spent } else { 0 })
}

/// Writes `keys` into a blob entry.
pub fn set_golden_keys_blob(entry: &mut Entry, keys: i32) -> CodecResult<()> {
    entry.set_value(SettingValue::Blob(golden_keys_blob(keys)))
}

#[must_use]
pub const fn badass_rank(points: i32) -> i32 {
    points / BADASS_POINTS_PER_RANK
}

#[must_use]
pub const fn badass_points_for_rank(rank: i32) -> i32 {
    rank.saturating_mul(BADASS_POINTS_PER_RANK)
}

/// Sets the rank by writing the same point total to both entries.
///
/// Returns `true` if either value changed.
pub fn set_badass_rank(
    points: &mut Entry,
    spent: Option<&mut Entry>,
    rank: i32,
) -> CodecResult<bool> {
    let total = SettingValue::Int32(badass_points_for_rank(rank));
    let mut changed = false;
    for entry in std::iter::once(points).chain(spent) {
        if entry.value() != &total {
            entry.set_value(total.clone())?;
            changed = true;
        }
    }
    Ok(changed)
}

/// Blob with every customization unlocked or locked.
#[must_use]
pub fn customizations_blob(unlock: bool) -> Vec<u8> {
    vec![if unlock { 0xFF } else { 0x00 }; CUSTOMIZATIONS_LEN]
}

pub fn set_customizations(entry: &mut Entry, unlock: bool) -> CodecResult<()> {
    entry.set_value(SettingValue::Blob(customizations_blob(unlock)))
}
