//! Guessing which game wrote a profile.
//!
//! All four games share the file format, so the guess relies on where the
//! file lives and on settings only some games write.

use std::fmt;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::known::{PLAYER_FOV, PROFILE_VERSION, RESET_CAMERA_ON_SLAM, SHOW_COMPASS};
use crate::profile::Profile;
use crate::value::SettingValue;

/// Games sharing the profile format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Game {
    #[default]
    None,
    Bl1,
    Bl1Enhanced,
    Bl2,
    Tps,
}

impl Game {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "unknown",
            Self::Bl1 => "Borderlands",
            Self::Bl1Enhanced => "Borderlands GOTY Enhanced",
            Self::Bl2 => "Borderlands 2",
            Self::Tps => "Borderlands: The Pre-Sequel",
        }
    }

    /// Maps a save folder name (the child of `My Games`) to a game.
    #[must_use]
    pub fn from_folder_name(name: &str) -> Option<Self> {
        match name {
            "Borderlands" => Some(Self::Bl1),
            "Borderlands Game of the Year" => Some(Self::Bl1Enhanced),
            "Borderlands 2" => Some(Self::Bl2),
            "Borderlands The Pre-Sequel" => Some(Self::Tps),
            _ => None,
        }
    }

    /// Maps a profile version number to a game.
    ///
    /// The first game used 18 and 20; later games never changed theirs.
    #[must_use]
    pub const fn from_version(version: i32) -> Option<Self> {
        match version {
            i32::MIN..=20 => Some(Self::Bl1),
            21..=39 => Some(Self::Bl1Enhanced),
            40..=66 => Some(Self::Bl2),
            67..=72 => Some(Self::Tps),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guesses the game from the file location alone.
#[must_use]
pub fn guess_game_from_path(path: &Path) -> Option<Game> {
    if path.file_name().is_some_and(|name| name == "Player.wsg") {
        return Some(Game::Bl1);
    }

    // The save folder is the ancestor directly under "My Games".
    let mut folder = path.parent()?;
    loop {
        let parent = folder.parent()?;
        if parent.file_name().is_some_and(|name| name == "My Games") {
            break;
        }
        folder = parent;
    }
    folder
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(Game::from_folder_name)
}

/// Guesses the game from profile contents alone.
#[must_use]
pub fn guess_game_from_profile(profile: &Profile) -> Game {
    let version = profile.find_known(PROFILE_VERSION).map(|entry| entry.value());
    if let Some(SettingValue::Int32(version)) = version {
        if let Some(game) = Game::from_version(*version) {
            return game;
        }
    }

    if profile.find(PLAYER_FOV.id).is_none() {
        Game::Bl1
    } else if profile.find(SHOW_COMPASS.id).is_some() {
        Game::Bl1Enhanced
    } else if profile.find(RESET_CAMERA_ON_SLAM.id).is_some() {
        Game::Tps
    } else {
        Game::Bl2
    }
}

/// Guesses the game from the path, falling back to the contents.
#[must_use]
pub fn guess_game(path: &Path, profile: &Profile) -> Game {
    guess_game_from_path(path).unwrap_or_else(|| guess_game_from_profile(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use std::path::PathBuf;

    fn with_ids(ids: &[u32]) -> Profile {
        Profile::from_entries(
            ids.iter()
                .map(|&id| Entry::new(id, SettingValue::Int32(1)))
                .collect(),
        )
    }

    #[test]
    fn player_wsg_is_first_game() {
        let path = PathBuf::from("saves").join("Player.wsg");
        assert_eq!(guess_game_from_path(&path), Some(Game::Bl1));
    }

    #[test]
    fn folder_under_my_games() {
        let base = PathBuf::from("Documents").join("My Games");
        let cases = [
            ("Borderlands 2", Game::Bl2),
            ("Borderlands The Pre-Sequel", Game::Tps),
            ("Borderlands Game of the Year", Game::Bl1Enhanced),
            ("Borderlands", Game::Bl1),
        ];
        for (folder, game) in cases {
            let path = base
                .join(folder)
                .join("WillowGame")
                .join("SaveData")
                .join("76561198000000000")
                .join("Profile.bin");
            assert_eq!(guess_game_from_path(&path), Some(game), "{folder}");
        }
    }

    #[test]
    fn unrelated_path_has_no_guess() {
        let path = PathBuf::from("tmp").join("copies").join("Profile.bin");
        assert_eq!(guess_game_from_path(&path), None);
        assert_eq!(guess_game_from_path(Path::new("Profile.bin")), None);
    }

    #[test]
    fn version_ranges() {
        assert_eq!(Game::from_version(18), Some(Game::Bl1));
        assert_eq!(Game::from_version(20), Some(Game::Bl1));
        assert_eq!(Game::from_version(39), Some(Game::Bl1Enhanced));
        assert_eq!(Game::from_version(58), Some(Game::Bl2));
        assert_eq!(Game::from_version(72), Some(Game::Tps));
        assert_eq!(Game::from_version(73), None);
    }

    #[test]
    fn version_entry_wins_over_marker_settings() {
        let mut profile = with_ids(&[129, 168]);
        profile.push(Entry::new(26, SettingValue::Int32(58)));
        assert_eq!(guess_game_from_profile(&profile), Game::Bl2);
    }

    #[test]
    fn marker_settings() {
        assert_eq!(guess_game_from_profile(&with_ids(&[1, 2])), Game::Bl1);
        assert_eq!(guess_game_from_profile(&with_ids(&[129, 126])), Game::Bl1Enhanced);
        assert_eq!(guess_game_from_profile(&with_ids(&[129, 168])), Game::Tps);
        assert_eq!(guess_game_from_profile(&with_ids(&[129])), Game::Bl2);
    }

    #[test]
    fn out_of_range_version_falls_through() {
        let mut profile = with_ids(&[129, 126]);
        profile.push(Entry::new(26, SettingValue::Int32(500)));
        assert_eq!(guess_game_from_profile(&profile), Game::Bl1Enhanced);
    }

    #[test]
    fn path_beats_contents() {
        let path = PathBuf::from("My Games")
            .join("Borderlands 2")
            .join("Profile.bin");
        assert_eq!(guess_game(&path, &with_ids(&[])), Game::Bl2);
        assert_eq!(guess_game(Path::new("Profile.bin"), &with_ids(&[])), Game::Bl1);
    }
}
