//! Settings identified by a fixed id and type.

use crate::entry::Entry;
use crate::types::{SettingId, TypeTag};

/// A setting the tools understand.
///
/// Ids are reused across games with different types, so both must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownSetting {
    pub id: SettingId,
    pub type_tag: TypeTag,
}

impl KnownSetting {
    #[must_use]
    pub const fn new(id: u32, type_tag: TypeTag) -> Self {
        Self {
            id: SettingId::new(id),
            type_tag,
        }
    }

    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        entry.id == self.id && entry.type_tag() == self.type_tag
    }
}

/// Profile format version, written by every game.
pub const PROFILE_VERSION: KnownSetting = KnownSetting::new(26, TypeTag::Int32);
/// Field of view slider; absent from the first game.
pub const PLAYER_FOV: KnownSetting = KnownSetting::new(129, TypeTag::Int32);
/// Compass toggle; only the enhanced edition of the first game.
pub const SHOW_COMPASS: KnownSetting = KnownSetting::new(126, TypeTag::Int32);
/// Camera reset on slam; only the pre-sequel.
pub const RESET_CAMERA_ON_SLAM: KnownSetting = KnownSetting::new(168, TypeTag::Int32);
