//! Limits and settings for profile decoding and encoding.

/// Codec-specific limits enforced during payload decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum declared entry count.
    pub max_entries: usize,
    /// Maximum length of a single String or Blob value.
    pub max_value_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_entries: 64 * 1024,
            max_value_bytes: 1024 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_entries: 256,
            max_value_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_entries: usize::MAX,
            max_value_bytes: usize::MAX,
        }
    }
}

/// Decompressed payload size above which the game may reject a profile.
pub const DEFAULT_SIZE_LIMIT: usize = 9000;

/// Everything a load or save needs to know besides the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Envelope limits.
    pub wire: wire::Limits,
    /// Entry limits.
    pub codec: CodecLimits,
    /// Check the stored SHA-1 on load and fail on mismatch.
    ///
    /// Off by default: the game rewrites the hash on every save and
    /// existing tools never check it, so a stale hash is not treated as
    /// corruption.
    pub verify_hash: bool,
    /// Advisory threshold reported by [`SaveReport`](crate::SaveReport).
    pub size_limit: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            wire: wire::Limits::default(),
            codec: CodecLimits::default(),
            verify_hash: false,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

impl ProfileConfig {
    /// Creates a config suitable for testing with smaller limits.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            wire: wire::Limits::for_testing(),
            codec: CodecLimits::for_testing(),
            verify_hash: false,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Returns the config with hash verification switched on or off.
    #[must_use]
    pub const fn with_verify_hash(mut self, verify: bool) -> Self {
        self.verify_hash = verify;
        self
    }
}
