//! Profile codec for bagpipe.
//!
//! This is the main codec crate. It ties the byte primitives of `bitstream`
//! and the file envelope of `wire` into a model of profile files: an ordered
//! list of typed setting entries.
//!
//! # Features
//!
//! - Entry and payload encoding/decoding with advisory [`Warnings`]
//! - File load/save with atomic replace
//! - Observable [`Profile`] container with single and multi-entry moves
//! - Badass rewards text codec and diminishing returns
//! - Game detection, golden keys, badass rank and customization helpers
//!
//! # Design Principles
//!
//! - **Byte-exact round trips** - Entry order, raw owner and advertisement
//!   bytes survive a load/save cycle.
//! - **Advisory is not fatal** - Oddities in the data raise [`Warnings`];
//!   only truncated or malformed structure fails.
//! - **Typed values** - A [`SettingValue`] always matches its entry's tag.
//!
//! # Example
//!
//! ```
//! use codec::{decode_profile, encode_profile, Entry, ProfileConfig, SettingValue};
//!
//! let entries = vec![Entry::new(26, SettingValue::Int32(58))];
//! let config = ProfileConfig::default();
//!
//! let (file, report) = encode_profile(&entries, &config).unwrap();
//! assert!(!report.over_size_limit);
//!
//! let loaded = decode_profile(&file, &config).unwrap();
//! assert_eq!(loaded.profile.entries(), entries.as_slice());
//! assert!(loaded.warnings.is_empty());
//! ```

mod diminishing;
mod entry;
mod error;
mod file;
mod game;
mod keys;
mod known;
mod limits;
mod payload;
mod profile;
mod rewards;
mod types;
mod value;
mod warnings;

pub use diminishing::{
    apply_diminishing_returns, max_reward, reverse_diminishing_returns, reward_interval,
};
pub use entry::{decode_entry, encode_entry, Entry};
pub use error::{CodecError, CodecResult, LimitKind};
pub use file::{decode_profile, encode_profile, load_profile, save_profile, LoadedProfile, SaveReport};
pub use game::{guess_game, guess_game_from_path, guess_game_from_profile, Game};
pub use keys::{
    badass_points_for_rank, badass_rank, customizations_blob, golden_keys_blob,
    golden_keys_counter, golden_keys_from_blob, golden_keys_from_counter, set_badass_rank,
    set_customizations, set_golden_keys_blob, BADASS_POINTS_PER_RANK, CUSTOMIZATIONS_LEN,
    MAX_BLOB_GOLDEN_KEYS,
};
pub use known::{KnownSetting, PLAYER_FOV, PROFILE_VERSION, RESET_CAMERA_ON_SLAM, SHOW_COMPASS};
pub use limits::{CodecLimits, ProfileConfig, DEFAULT_SIZE_LIMIT};
pub use payload::{decode_payload, encode_payload, DecodedPayload, TRAILING_MARKER};
pub use profile::{ObserverId, Profile, ProfileChange};
pub use rewards::{
    decode_reward_words, encode_reward_words, RewardPoints, RewardStat, UnknownRewardStat,
    REWARD_ALPHABET, REWARD_STAT_COUNT, REWARD_XOR_MASK,
};
pub use types::{AdvertisementKind, OwnerKind, SettingId, TypeTag};
pub use value::SettingValue;
pub use warnings::Warnings;
pub use wire::Limits as WireLimits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = SettingId::new(0);
        let _ = WireLimits::default();
        let _ = CodecLimits::default();
        let _ = ProfileConfig::default();
        let _ = Warnings::none();
        let _ = Profile::new();
        let _ = RewardPoints::default();
        let _ = Game::default();
        let _ = TRAILING_MARKER;
        let _ = DEFAULT_SIZE_LIMIT;

        // Error types
        let _: CodecResult<()> = Ok(());
    }

    #[test]
    fn setting_id_usage() {
        let id = SettingId::new(42);
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn profile_entry_usage() {
        let mut profile = Profile::new();
        profile.push(Entry::new(1, SettingValue::Byte(3)));
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.get(0).map(Entry::type_tag), Some(TypeTag::Byte));
    }

    #[test]
    fn rewards_roundtrip_through_entry() {
        let mut entry = Entry::new(1, SettingValue::String(String::new()));
        let mut points = RewardPoints::default();
        points.set_bonus(RewardStat::CritDamage, 12.5);
        points.write_to_entry(&mut entry).unwrap();
        let back = RewardPoints::from_entry(&entry).unwrap();
        assert_eq!(back, points);
        assert!((back.bonus(RewardStat::CritDamage) - 12.5).abs() < 0.1);
    }
}
