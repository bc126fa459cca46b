//! Configurable limits for bounded decoding.

/// Envelope-level limits for profile decoding.
///
/// These limits are enforced before the decompression buffer is allocated,
/// so a corrupt size field cannot request an unbounded allocation. Entry
/// level limits belong to the codec crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum file size in bytes.
    pub max_file_bytes: usize,

    /// Maximum declared decompressed payload size in bytes.
    pub max_decompressed_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Real profiles stay under 10 KB once decompressed
            max_file_bytes: 16 * 1024 * 1024,
            max_decompressed_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_file_bytes: 64 * 1024,
            max_decompressed_bytes: 64 * 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_file_bytes: usize::MAX,
            max_decompressed_bytes: usize::MAX,
        }
    }
}
