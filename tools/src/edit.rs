//! Profile edits applied by the `bagpipe` subcommands.

use anyhow::{anyhow, bail, Result};
use codec::{
    golden_keys_counter, golden_keys_from_blob, golden_keys_from_counter, Profile, RewardPoints,
    RewardStat, SettingId, SettingValue,
};

/// Index of the entry with `id`.
pub fn entry_index(profile: &Profile, id: u32) -> Result<usize> {
    profile
        .position(SettingId::new(id))
        .ok_or_else(|| anyhow!("profile has no entry with id {id}"))
}

/// Reads the rewards stored in entry `id`.
pub fn read_rewards(profile: &Profile, id: u32) -> Result<RewardPoints> {
    let index = entry_index(profile, id)?;
    let entry = profile
        .get(index)
        .ok_or_else(|| anyhow!("profile has no entry at index {index}"))?;
    Ok(RewardPoints::from_entry(entry)?)
}

/// Sets one stat in entry `id` to the point total closest to `bonus`.
pub fn set_reward(
    profile: &mut Profile,
    id: u32,
    stat: RewardStat,
    bonus: f64,
) -> Result<RewardPoints> {
    if !bonus.is_finite() || bonus < 0.0 {
        bail!("bonus must be a non-negative number, got {bonus}");
    }
    let index = entry_index(profile, id)?;
    let points = profile.update(index, |entry| {
        let mut points = RewardPoints::from_entry(entry)?;
        points.set_bonus(stat, bonus);
        points.write_to_entry(entry)?;
        Ok(points)
    })?;
    tracing::info!(id, stat = %stat, points = points.points(stat), "reward updated");
    Ok(points)
}

/// Golden keys held by entry `id`.
///
/// Blob entries store the count directly. Int32 entries hold a running
/// counter, from which `spent_id` (if given) is subtracted.
pub fn read_golden_keys(profile: &Profile, id: u32, spent_id: Option<u32>) -> Result<i64> {
    let index = entry_index(profile, id)?;
    let entry = profile
        .get(index)
        .ok_or_else(|| anyhow!("profile has no entry at index {index}"))?;
    match entry.value() {
        SettingValue::Blob(blob) => Ok(golden_keys_from_blob(blob)),
        SettingValue::Int32(count) => {
            let spent = read_int(profile, spent_id)?;
            Ok(i64::from(golden_keys_from_counter(*count, spent)))
        }
        other => bail!(
            "entry {id} holds {} and cannot store golden keys",
            other.type_tag()
        ),
    }
}

/// Stores `keys` golden keys into entry `id`, in whichever form it uses.
pub fn set_golden_keys(
    profile: &mut Profile,
    id: u32,
    spent_id: Option<u32>,
    keys: i32,
) -> Result<()> {
    if keys < 0 {
        bail!("golden keys cannot be negative, got {keys}");
    }
    let spent = read_int(profile, spent_id)?;
    let index = entry_index(profile, id)?;
    profile.update(index, |entry| {
        if matches!(entry.value(), SettingValue::Blob(_)) {
            codec::set_golden_keys_blob(entry, keys)
        } else {
            entry.set_value(SettingValue::Int32(golden_keys_counter(keys, spent)))
        }
    })?;
    Ok(())
}

/// Rank derived from the points stored in entry `id`.
pub fn read_badass_rank(profile: &Profile, id: u32) -> Result<i32> {
    Ok(codec::badass_rank(read_int(profile, Some(id))?))
}

/// Writes the point total for `rank` into `points_id` and, if given,
/// `spent_id`. Returns whether anything changed.
pub fn set_badass_rank(
    profile: &mut Profile,
    points_id: u32,
    spent_id: Option<u32>,
    rank: i32,
) -> Result<bool> {
    if rank < 0 {
        bail!("badass rank cannot be negative, got {rank}");
    }
    let mut changed = false;
    for id in std::iter::once(points_id).chain(spent_id) {
        let index = entry_index(profile, id)?;
        changed |= profile.update(index, |entry| codec::set_badass_rank(entry, None, rank))?;
    }
    Ok(changed)
}

/// Locks or unlocks every customization in entry `id`.
pub fn set_customizations(profile: &mut Profile, id: u32, unlock: bool) -> Result<()> {
    let index = entry_index(profile, id)?;
    profile.update(index, |entry| codec::set_customizations(entry, unlock))?;
    Ok(())
}

fn read_int(profile: &Profile, id: Option<u32>) -> Result<i32> {
    let Some(id) = id else {
        return Ok(0);
    };
    let index = entry_index(profile, id)?;
    match profile.get(index).map(codec::Entry::value) {
        Some(SettingValue::Int32(value)) => Ok(*value),
        Some(other) => bail!("entry {id} holds {}, expected Int32", other.type_tag()),
        None => bail!("profile has no entry at index {index}"),
    }
}
