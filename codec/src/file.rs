//! Loading and saving whole profile files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::entry::Entry;
use crate::error::{CodecError, CodecResult};
use crate::limits::ProfileConfig;
use crate::payload::{decode_payload, encode_payload};
use crate::profile::Profile;
use crate::warnings::Warnings;

/// A decoded profile file.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: Profile,
    /// Advisory flags raised while decoding.
    pub warnings: Warnings,
    /// Whether the stored hash matches the content. Only enforced when
    /// [`ProfileConfig::verify_hash`] is set.
    pub hash_matches: bool,
    pub decompressed_len: usize,
    pub compressed_len: usize,
}

/// What a save produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    pub decompressed_len: usize,
    pub compressed_len: usize,
    /// The payload is larger than [`ProfileConfig::size_limit`]; the game
    /// may refuse to load it.
    pub over_size_limit: bool,
    /// Advisory flags raised while encoding.
    pub warnings: Warnings,
}

/// Decodes a complete profile file held in memory.
pub fn decode_profile(buf: &[u8], config: &ProfileConfig) -> CodecResult<LoadedProfile> {
    let envelope = wire::decode_envelope(buf, &config.wire)?;
    let hash_matches = envelope.hash_matches();
    if config.verify_hash {
        envelope.verify_hash()?;
    } else if !hash_matches {
        debug!("stored hash does not match content, ignoring");
    }

    let payload = envelope.decompress(&config.wire)?;
    let decoded = decode_payload(&payload, &config.codec)?;

    Ok(LoadedProfile {
        profile: Profile::from_entries(decoded.entries),
        warnings: decoded.warnings,
        hash_matches,
        decompressed_len: payload.len(),
        compressed_len: envelope.payload.len(),
    })
}

/// Encodes entries into a complete profile file held in memory.
pub fn encode_profile(
    entries: &[Entry],
    config: &ProfileConfig,
) -> CodecResult<(Vec<u8>, SaveReport)> {
    let (payload, warnings) = encode_payload(entries)?;
    let file = wire::encode_envelope(&payload)?;
    let report = SaveReport {
        decompressed_len: payload.len(),
        compressed_len: file.len() - wire::HEADER_SIZE,
        over_size_limit: payload.len() > config.size_limit,
        warnings,
    };
    Ok((file, report))
}

/// Reads and decodes a profile file.
pub fn load_profile(path: &Path, config: &ProfileConfig) -> CodecResult<LoadedProfile> {
    let buf = fs::read(path).map_err(|source| CodecError::Io {
        op: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = decode_profile(&buf, config)?;
    info!(
        path = %path.display(),
        entries = loaded.profile.len(),
        warnings = %loaded.warnings,
        "loaded profile"
    );
    Ok(loaded)
}

/// Encodes entries and replaces the file at `path`.
///
/// The whole file is built in memory and written to a temporary file next
/// to `path`, which then replaces it. On failure the destination is left
/// untouched.
pub fn save_profile(
    path: &Path,
    entries: &[Entry],
    config: &ProfileConfig,
) -> CodecResult<SaveReport> {
    let (file, report) = encode_profile(entries, config)?;
    write_atomic(path, &file)?;
    info!(
        path = %path.display(),
        entries = entries.len(),
        decompressed_len = report.decompressed_len,
        over_size_limit = report.over_size_limit,
        "saved profile"
    );
    Ok(report)
}

fn write_atomic(path: &Path, contents: &[u8]) -> CodecResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let io_err = |op: &'static str| {
        let path = path.to_path_buf();
        move |source| CodecError::Io { op, path, source }
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err("create temporary file for"))?;
    tmp.write_all(contents).map_err(io_err("write"))?;
    tmp.as_file().sync_all().map_err(io_err("sync"))?;
    tmp.persist(path)
        .map_err(|err| io_err("replace")(err.error))?;
    Ok(())
}

impl Profile {
    /// Replaces the contents with the file at `path`.
    ///
    /// Observers see a single [`ProfileChange::Reset`](crate::ProfileChange::Reset).
    /// On failure the profile is unchanged.
    pub fn load(&mut self, path: &Path, config: &ProfileConfig) -> CodecResult<Warnings> {
        let loaded = load_profile(path, config)?;
        self.replace_entries(loaded.profile.into_entries());
        Ok(loaded.warnings)
    }

    /// Writes the profile to `path`.
    pub fn save(&self, path: &Path, config: &ProfileConfig) -> CodecResult<SaveReport> {
        save_profile(path, self.entries(), config)
    }

    /// Whether the encoded payload would exceed `size_limit` bytes.
    pub fn is_over_size_limit(&self, size_limit: usize) -> CodecResult<bool> {
        let (payload, _) = encode_payload(self.entries())?;
        Ok(payload.len() > size_limit)
    }
}
