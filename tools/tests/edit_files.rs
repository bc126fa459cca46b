use std::path::Path;

use bagpipe_tools::{edit, inspect_profile, ProfileDump};
use codec::{
    guess_game, load_profile, Entry, Game, Profile, ProfileConfig, RewardStat, SettingValue,
    PROFILE_VERSION,
};

const REWARDS_ID: u32 = 700;

fn write_sample(path: &Path) {
    let profile = Profile::from_entries(vec![
        Entry::new(PROFILE_VERSION.id, SettingValue::Int32(70)),
        Entry::new(REWARDS_ID, SettingValue::from("")),
        Entry::new(701, SettingValue::Byte(3)),
    ]);
    profile.save(path, &ProfileConfig::for_testing()).unwrap();
}

#[test]
fn reward_edit_persists_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    write_sample(&path);
    let config = ProfileConfig::for_testing();

    let mut profile = load_profile(&path, &config).unwrap().profile;
    edit::set_reward(&mut profile, REWARDS_ID, RewardStat::ShieldCapacity, 27.0).unwrap();
    profile.save(&path, &config).unwrap();

    let loaded = load_profile(&path, &config).unwrap();
    let points = edit::read_rewards(&loaded.profile, REWARDS_ID).unwrap();
    assert_eq!(points.points(RewardStat::ShieldCapacity), 81);
    assert_eq!(guess_game(&path, &loaded.profile), Game::Tps);
}

#[test]
fn inspect_and_dump_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    write_sample(&path);
    let config = ProfileConfig::for_testing();

    let bytes = std::fs::read(&path).unwrap();
    let report = inspect_profile(&bytes, &path, &config).unwrap();
    let loaded = load_profile(&path, &config).unwrap();
    let dump = ProfileDump::new(loaded.profile.entries(), report.game, loaded.warnings);

    assert_eq!(report.entry_count, dump.entries.len());
    assert_eq!(report.file_len, bytes.len());
    assert!(report.warnings.is_empty());
    assert_eq!(dump.entries[2].value, serde_json::json!(3));
}
