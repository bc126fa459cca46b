//! Integrity hash over the size field and compressed payload.

use sha1::{Digest, Sha1};

use crate::header::HASH_LEN;

/// Computes the SHA-1 stored in the first 20 bytes of a profile file.
///
/// The digest covers the big-endian decompressed size followed by the
/// compressed payload, exactly as they appear on disk.
#[must_use]
pub fn envelope_hash(decompressed_size: u32, compressed: &[u8]) -> [u8; HASH_LEN] {
    let mut hasher = Sha1::new();
    write_u32(&mut hasher, decompressed_size);
    hasher.update(compressed);

    let digest = hasher.finalize();
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&digest);
    out
}

fn write_u32(hasher: &mut Sha1, value: u32) {
    hasher.update(value.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_hash_is_stable() {
        let hash1 = envelope_hash(5, b"payload");
        let hash2 = envelope_hash(5, b"payload");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn envelope_hash_golden() {
        // SHA-1 of four zero bytes.
        let hash = envelope_hash(0, &[]);
        assert_eq!(
            hex::encode(hash),
            "9069ca78e7450a285173431b3e52c5c25299e473"
        );
        let hash = envelope_hash(5, b"payload");
        assert_eq!(
            hex::encode(hash),
            "b46946c69ebdb10cf2b1fa5bb1743069b181e51a"
        );
    }

    #[test]
    fn envelope_hash_covers_size_field() {
        assert_ne!(envelope_hash(1, b"abc"), envelope_hash(2, b"abc"));
    }

    #[test]
    fn envelope_hash_covers_payload() {
        assert_ne!(envelope_hash(1, b"abc"), envelope_hash(1, b"abd"));
    }
}
