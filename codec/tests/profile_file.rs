use std::fs;
use std::sync::{Arc, Mutex};

use codec::{
    decode_profile, guess_game, load_profile, save_profile, CodecError, Entry, Game, OwnerKind,
    Profile, ProfileChange, ProfileConfig, RewardPoints, RewardStat, SettingId, SettingValue,
    TypeTag, Warnings, TRAILING_MARKER,
};

fn sample_profile() -> Profile {
    Profile::from_entries(vec![
        Entry::new(26, SettingValue::Int32(58)),
        Entry::new(129, SettingValue::Float(75.5)).with_owner(OwnerKind::OnlineService),
        Entry::new(300, SettingValue::from("0123456789")),
        Entry::new(301, SettingValue::Blob(vec![0, 255, 0, 0, 12, 2])),
        Entry::new(302, SettingValue::Byte(1)),
    ])
}

fn file_with_payload(payload: &[u8]) -> Vec<u8> {
    wire::encode_envelope(payload).unwrap()
}

#[test]
fn save_then_load_preserves_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    let config = ProfileConfig::for_testing();

    let profile = sample_profile();
    let report = profile.save(&path, &config).unwrap();
    assert!(report.warnings.is_empty());
    assert!(!report.over_size_limit);

    let loaded = load_profile(&path, &config).unwrap();
    assert_eq!(loaded.profile, profile);
    assert!(loaded.warnings.is_empty());
    assert!(loaded.hash_matches);
    assert_eq!(loaded.decompressed_len, report.decompressed_len);
}

#[test]
fn saved_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    save_profile(&path, &[], &ProfileConfig::default()).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[20..24], &[0, 0, 0, 5]);
    let hash = wire::envelope_hash(5, &bytes[24..]);
    assert_eq!(&bytes[..20], &hash);
    assert_eq!(
        wire::decompress(&bytes[24..], 5).unwrap(),
        vec![0, 0, 0, 0, TRAILING_MARKER]
    );
}

#[test]
fn load_into_existing_profile_resets_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    let config = ProfileConfig::for_testing();
    sample_profile().save(&path, &config).unwrap();

    let mut profile = Profile::from_entries(vec![Entry::new(1, SettingValue::Empty)]);
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    profile.subscribe(move |change| sink.lock().unwrap().push(*change));

    let warnings = profile.load(&path, &config).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(profile.len(), 5);
    assert_eq!(*log.lock().unwrap(), vec![ProfileChange::Reset]);
}

#[test]
fn failed_load_leaves_profile_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    fs::write(&path, [0u8; 8]).unwrap();

    let mut profile = sample_profile();
    let err = profile.load(&path, &ProfileConfig::for_testing()).unwrap_err();
    assert!(matches!(err, CodecError::Wire(_)));
    assert_eq!(profile, sample_profile());
}

#[test]
fn empty_profile_with_marker_has_no_warnings() {
    let file = file_with_payload(&[0, 0, 0, 0, 1]);
    let loaded = decode_profile(&file, &ProfileConfig::for_testing()).unwrap();
    assert!(loaded.profile.is_empty());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn zero_padded_tail_is_accepted() {
    let file = file_with_payload(&[0, 0, 0, 0, 0, 0, 0]);
    let loaded = decode_profile(&file, &ProfileConfig::for_testing()).unwrap();
    assert!(!loaded
        .warnings
        .contains(Warnings::UNRECOGNIZED_TRAILING_DATA));
}

#[test]
fn stray_tail_byte_is_flagged() {
    let file = file_with_payload(&[0, 0, 0, 0, 1, 1]);
    let loaded = decode_profile(&file, &ProfileConfig::for_testing()).unwrap();
    assert!(loaded
        .warnings
        .contains(Warnings::UNRECOGNIZED_TRAILING_DATA));
}

#[test]
fn zero_padding_is_normalized_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    let mut payload = vec![0, 0, 0, 1, 2, 0, 0, 0, 9, 8, 4, 0];
    payload.extend_from_slice(&[0; 6]);
    fs::write(&path, file_with_payload(&payload)).unwrap();

    let config = ProfileConfig::for_testing();
    let loaded = load_profile(&path, &config).unwrap();
    let report = loaded.profile.save(&path, &config).unwrap();
    assert_eq!(report.decompressed_len, 13);

    let bytes = fs::read(&path).unwrap();
    let payload = wire::decompress(&bytes[24..], 13).unwrap();
    assert_eq!(payload.last(), Some(&TRAILING_MARKER));
}

#[test]
fn unknown_tag_blocks_save_without_touching_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    // One entry with tag 42 and no payload, then the marker.
    let original = file_with_payload(&[0, 0, 0, 1, 2, 0, 0, 0, 7, 42, 0, 1]);
    fs::write(&path, &original).unwrap();

    let config = ProfileConfig::for_testing();
    let loaded = load_profile(&path, &config).unwrap();
    assert!(loaded.warnings.contains(Warnings::UNKNOWN_FORMAT));
    assert_eq!(loaded.profile.get(0).map(Entry::type_tag), Some(TypeTag::Unknown(42)));

    let err = loaded.profile.save(&path, &config).unwrap_err();
    assert!(matches!(err, CodecError::UnencodableType { id: 7, tag: 42 }));
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("Profile.bin");
    let err = sample_profile()
        .save(&path, &ProfileConfig::for_testing())
        .unwrap_err();
    assert!(matches!(err, CodecError::Io { .. }));
}

#[test]
fn assumed_types_reported_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Profile.bin");
    let profile = Profile::from_entries(vec![Entry::new(1, SettingValue::DateTime(5))]);
    let report = profile.save(&path, &ProfileConfig::for_testing()).unwrap();
    assert_eq!(report.warnings, Warnings::ASSUMED_FORMAT);
}

#[test]
fn rewards_edit_survives_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("My Games")
        .join("Borderlands 2")
        .join("Profile.bin");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let config = ProfileConfig::for_testing();

    let mut profile = sample_profile();
    let index = profile.position(SettingId::new(300)).unwrap();
    profile
        .update(index, |entry| {
            let mut points = RewardPoints::from_entry(entry)?;
            points.set_bonus(RewardStat::GunDamage, 100.0);
            points.write_to_entry(entry)
        })
        .unwrap();
    profile.save(&path, &config).unwrap();

    let loaded = load_profile(&path, &config).unwrap();
    let entry = loaded.profile.find(SettingId::new(300)).unwrap();
    let points = RewardPoints::from_entry(entry).unwrap();
    assert!((points.bonus(RewardStat::GunDamage) - 100.0).abs() < 0.1);
    assert_eq!(guess_game(&path, &loaded.profile), Game::Bl2);
}
