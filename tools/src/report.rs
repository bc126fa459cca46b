//! Human- and machine-readable views of profile files.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use codec::{
    decode_profile, guess_game, AdvertisementKind, CodecResult, Entry, Game, OwnerKind,
    ProfileConfig, RewardPoints, RewardStat, SettingValue, TypeTag, Warnings,
};
use serde::Serialize;

/// One line printed when any advisory flag is set.
pub const ADVISORY_NOTICE: &str =
    "note: some data may have been interpreted approximately (run with -v for details)";

/// Returns the advisory notice if `warnings` is non-empty.
#[must_use]
pub fn advisory_notice(warnings: Warnings) -> Option<&'static str> {
    warnings.any().then_some(ADVISORY_NOTICE)
}

/// Structure and size summary of one profile file.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub file_len: usize,
    pub stored_hash: String,
    pub hash_matches: bool,
    pub decompressed_len: usize,
    pub compressed_len: usize,
    pub entry_count: usize,
    pub type_counts: BTreeMap<String, usize>,
    pub game: Game,
    pub over_size_limit: bool,
    pub warnings: Vec<&'static str>,
}

/// Inspects the bytes of a profile file found at `path`.
pub fn inspect_profile(
    bytes: &[u8],
    path: &Path,
    config: &ProfileConfig,
) -> CodecResult<InspectReport> {
    let envelope = wire::decode_envelope(bytes, &config.wire)?;
    let loaded = decode_profile(bytes, config)?;

    let mut type_counts = BTreeMap::new();
    for entry in &loaded.profile {
        *type_counts.entry(entry.type_tag().to_string()).or_insert(0) += 1;
    }

    Ok(InspectReport {
        file_len: bytes.len(),
        stored_hash: hex::encode(envelope.header.hash),
        hash_matches: loaded.hash_matches,
        decompressed_len: loaded.decompressed_len,
        compressed_len: loaded.compressed_len,
        entry_count: loaded.profile.len(),
        type_counts,
        game: guess_game(path, &loaded.profile),
        over_size_limit: loaded.decompressed_len > config.size_limit,
        warnings: loaded.warnings.names().collect(),
    })
}

#[must_use]
pub fn format_inspect_report(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "game: {}", report.game);
    let _ = writeln!(
        out,
        "file: {} bytes, payload: {} compressed / {} decompressed",
        report.file_len, report.compressed_len, report.decompressed_len
    );
    let hash_state = if report.hash_matches { "ok" } else { "stale" };
    let _ = writeln!(out, "hash: {} ({hash_state})", report.stored_hash);
    let _ = writeln!(out, "entries: {}", report.entry_count);
    for (tag, count) in &report.type_counts {
        let _ = writeln!(out, "  {tag}: {count}");
    }
    if report.over_size_limit {
        let _ = writeln!(out, "size: over the limit, the game may reject this profile");
    }
    if !report.warnings.is_empty() {
        let _ = writeln!(out, "warnings: {}", report.warnings.join(", "));
    }
    out
}

/// One entry as shown by `dump`.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub index: usize,
    pub owner: OwnerKind,
    pub id: u32,
    pub type_tag: TypeTag,
    pub value: serde_json::Value,
    pub advertisement: AdvertisementKind,
}

impl EntryView {
    #[must_use]
    pub fn new(index: usize, entry: &Entry) -> Self {
        Self {
            index,
            owner: entry.owner,
            id: entry.id.raw(),
            type_tag: entry.type_tag(),
            value: value_json(entry.value()),
            advertisement: entry.advertisement,
        }
    }
}

/// Entries of a profile as shown by `dump`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDump {
    pub game: Game,
    pub warnings: Vec<&'static str>,
    pub entries: Vec<EntryView>,
}

impl ProfileDump {
    #[must_use]
    pub fn new(entries: &[Entry], game: Game, warnings: Warnings) -> Self {
        Self {
            game,
            warnings: warnings.names().collect(),
            entries: entries
                .iter()
                .enumerate()
                .map(|(index, entry)| EntryView::new(index, entry))
                .collect(),
        }
    }
}

/// Blobs are shown as hex; floats that are not finite become `null`.
fn value_json(value: &SettingValue) -> serde_json::Value {
    match value {
        SettingValue::Empty => serde_json::Value::Null,
        SettingValue::Int32(v) => (*v).into(),
        SettingValue::Int64(v) | SettingValue::DateTime(v) => (*v).into(),
        SettingValue::Double(v) => (*v).into(),
        SettingValue::Float(v) => f64::from(*v).into(),
        SettingValue::String(s) => s.clone().into(),
        SettingValue::Blob(b) => hex::encode(b).into(),
        SettingValue::Byte(v) => (*v).into(),
    }
}

#[must_use]
pub fn format_dump_pretty(dump: &ProfileDump) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "game: {}", dump.game);
    let _ = writeln!(
        out,
        "{:>5}  {:<14} {:>10}  {:<9} {:<14} value",
        "index", "owner", "id", "type", "advertise"
    );
    for entry in &dump.entries {
        let value = match &entry.value {
            serde_json::Value::Null => "-".to_string(),
            serde_json::Value::String(s) if entry.type_tag == TypeTag::String => format!("{s:?}"),
            other => other.to_string().trim_matches('"').to_string(),
        };
        let _ = writeln!(
            out,
            "{:>5}  {:<14} {:>10}  {:<9} {:<14} {value}",
            entry.index,
            entry.owner.to_string(),
            entry.id,
            entry.type_tag.to_string(),
            entry.advertisement.to_string(),
        );
    }
    if !dump.warnings.is_empty() {
        let _ = writeln!(out, "warnings: {}", dump.warnings.join(", "));
    }
    out
}

/// One stat as shown by `rewards`.
#[derive(Debug, Clone, Serialize)]
pub struct RewardView {
    pub stat: &'static str,
    pub points: i32,
    pub bonus: f64,
    pub interval: f64,
}

#[must_use]
pub fn reward_views(points: &RewardPoints) -> Vec<RewardView> {
    RewardStat::ALL
        .into_iter()
        .map(|stat| RewardView {
            stat: stat.name(),
            points: points.points(stat),
            bonus: points.bonus(stat),
            interval: points.interval(stat),
        })
        .collect()
}

#[must_use]
pub fn format_rewards(points: &RewardPoints) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {:>12} {:>12} {:>10}", "stat", "points", "bonus", "step");
    for view in reward_views(points) {
        let _ = writeln!(
            out,
            "{:<16} {:>12} {:>11.2}% {:>10.4}",
            view.stat, view.points, view.bonus, view.interval
        );
    }
    let _ = writeln!(out, "max bonus per stat: {:.2}%", codec::max_reward());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{encode_profile, ProfileConfig};

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new(26, SettingValue::Int32(58)),
            Entry::new(129, SettingValue::Int32(90)),
            Entry::new(500, SettingValue::Blob(vec![0xAB, 0x01])),
            Entry::new(501, SettingValue::from("hi")),
        ]
    }

    #[test]
    fn notice_only_with_warnings() {
        assert_eq!(advisory_notice(Warnings::none()), None);
        assert_eq!(
            advisory_notice(Warnings::ASSUMED_FORMAT),
            Some(ADVISORY_NOTICE)
        );
    }

    #[test]
    fn inspect_counts_types_and_guesses_game() {
        let config = ProfileConfig::for_testing();
        let (file, _) = encode_profile(&sample_entries(), &config).unwrap();
        let report = inspect_profile(&file, Path::new("Profile.bin"), &config).unwrap();

        assert_eq!(report.entry_count, 4);
        assert_eq!(report.type_counts.get("Int32"), Some(&2));
        assert_eq!(report.type_counts.get("Blob"), Some(&1));
        assert_eq!(report.game, Game::Bl2);
        assert!(report.hash_matches);
        assert_eq!(report.stored_hash.len(), 40);
        assert!(format_inspect_report(&report).contains("entries: 4"));
    }

    #[test]
    fn dump_json_shape() {
        let dump = ProfileDump::new(&sample_entries(), Game::Bl2, Warnings::none());
        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["entries"][0]["type_tag"], "Int32");
        assert_eq!(json["entries"][0]["owner"], "Game");
        assert_eq!(json["entries"][0]["value"], 58);
        assert_eq!(json["entries"][2]["value"], "ab01");
        assert_eq!(json["entries"][3]["value"], "hi");
        assert_eq!(json["game"], "Bl2");
    }

    #[test]
    fn dump_pretty_lists_every_entry() {
        let dump = ProfileDump::new(&sample_entries(), Game::Bl2, Warnings::UNKNOWN_FORMAT);
        let text = format_dump_pretty(&dump);
        assert!(text.contains("\"hi\""));
        assert!(text.contains("ab01"));
        assert!(text.contains("warnings: unknown format"));
        assert_eq!(text.lines().count(), 2 + 4 + 1);
    }

    #[test]
    fn rewards_table() {
        let mut points = RewardPoints::default();
        points.set_points(RewardStat::GunDamage, 16);
        let views = reward_views(&points);
        assert_eq!(views.len(), 14);
        assert_eq!(views[7].stat, "GunDamage");
        assert!((views[7].bonus - 8.0).abs() < 1e-9);
        assert!(format_rewards(&points).contains("GunDamage"));
    }
}
