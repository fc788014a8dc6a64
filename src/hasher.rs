//! Input hashing.
//!
//! Two digesters share one interface. SHA-256 is the preferred backend; the
//! rolling hash is a non-cryptographic fallback that produces a digest of the
//! same shape. The backend is picked once, when the engine is built.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Length of every digest, in hex characters.
pub const DIGEST_LEN: usize = 64;

/// Substituted for empty input so absence still hashes to something stable.
pub const EMPTY_INPUT_SENTINEL: &str = "anonymous";

/// Number of 32-bit blocks the rolling digest is built from.
const ROLLING_BLOCKS: usize = DIGEST_LEN / 8;

/// A fixed-length lowercase hexadecimal digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexDigest(String);

impl HexDigest {
    /// Wrap an existing hex string. Callers are trusted to pass hex; any
    /// non-hex character simply reads as a zero nibble.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 0-15 value of the hex digit at `pos`, or 0 if there is none.
    pub fn nibble(&self, pos: usize) -> u8 {
        self.0
            .as_bytes()
            .get(pos)
            .and_then(|&b| (b as char).to_digit(16))
            .map_or(0, |d| d as u8)
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which digester an engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashBackend {
    #[default]
    Sha256,
    Rolling,
}

impl HashBackend {
    pub fn name(self) -> &'static str {
        match self {
            HashBackend::Sha256 => "sha256",
            HashBackend::Rolling => "rolling",
        }
    }

    /// Build the digester for this backend.
    pub fn digester(self) -> Box<dyn Digester> {
        match self {
            HashBackend::Sha256 => Box::new(Sha256Digester),
            HashBackend::Rolling => Box::new(RollingDigester),
        }
    }
}

/// Trait for anything that turns a string into a [`HexDigest`].
pub trait Digester: Send + Sync {
    /// Backend this digester implements.
    fn backend(&self) -> HashBackend;

    /// Digest `input` exactly as given.
    fn digest_raw(&self, input: &str) -> HexDigest;

    /// Digest `input` byte for byte, substituting the sentinel when it is
    /// empty or whitespace only.
    fn digest(&self, input: &str) -> HexDigest {
        if input.trim().is_empty() {
            self.digest_raw(EMPTY_INPUT_SENTINEL)
        } else {
            self.digest_raw(input)
        }
    }
}

/// SHA-256 over the UTF-8 bytes of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digester;

impl Digester for Sha256Digester {
    fn backend(&self) -> HashBackend {
        HashBackend::Sha256
    }

    fn digest_raw(&self, input: &str) -> HexDigest {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        HexDigest(format!("{:x}", hasher.finalize()))
    }
}

/// Polynomial rolling hash over UTF-16 code units.
///
/// The accumulator is `acc * 31 + unit` in wrapping 32-bit arithmetic. The
/// input is folded in [`ROLLING_BLOCKS`] times, carrying the accumulator
/// across passes; each pass contributes the absolute value of the
/// accumulator as eight zero-padded hex digits. The first block is the
/// classic single-pass string hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingDigester;

impl RollingDigester {
    fn fold(acc: i32, units: &[u16]) -> i32 {
        units.iter().fold(acc, |acc, &unit| {
            (acc << 5).wrapping_sub(acc).wrapping_add(i32::from(unit))
        })
    }
}

impl Digester for RollingDigester {
    fn backend(&self) -> HashBackend {
        HashBackend::Rolling
    }

    fn digest_raw(&self, input: &str) -> HexDigest {
        let units: Vec<u16> = input.encode_utf16().collect();
        let mut hex = String::with_capacity(DIGEST_LEN);
        let mut acc = 0i32;

        for _ in 0..ROLLING_BLOCKS {
            acc = Self::fold(acc, &units);
            hex.push_str(&format!("{:08x}", acc.unsigned_abs()));
        }

        HexDigest(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn sha256_known_vector() {
        let digest = Sha256Digester.digest("abc");
        assert_eq!(
            digest.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn rolling_digest_is_pinned() {
        let digest = RollingDigester.digest("1990-05-15");
        assert_eq!(
            digest.as_str(),
            "2120bade5d8c07c40298981a50ea85887da680aa3e44794c64858f6e24bd1cf0"
        );
    }

    #[test]
    fn rolling_first_block_matches_single_pass_hash() {
        // Single pass: h = h * 31 + c, so "a" is 97 = 0x61.
        let digest = RollingDigester.digest("a");
        assert!(digest.as_str().starts_with("00000061"));
    }

    #[test]
    fn both_backends_produce_fixed_length_hex() {
        for backend in [HashBackend::Sha256, HashBackend::Rolling] {
            let digester = backend.digester();
            for input in ["x", "1990-05-15", "日本語", "a much longer input string than usual"] {
                let digest = digester.digest(input);
                assert_eq!(digest.as_str().len(), DIGEST_LEN, "{backend:?} {input}");
                assert!(is_lower_hex(digest.as_str()), "{backend:?} {input}");
            }
        }
    }

    #[test]
    fn digests_are_deterministic() {
        for backend in [HashBackend::Sha256, HashBackend::Rolling] {
            let digester = backend.digester();
            assert_eq!(digester.digest("2001-09-11"), digester.digest("2001-09-11"));
        }
    }

    #[test]
    fn empty_input_hashes_as_sentinel() {
        for backend in [HashBackend::Sha256, HashBackend::Rolling] {
            let digester = backend.digester();
            let sentinel = digester.digest(EMPTY_INPUT_SENTINEL);
            assert_eq!(digester.digest(""), sentinel);
            assert_eq!(digester.digest("   "), sentinel);
        }
    }

    #[test]
    fn surrounding_whitespace_is_hashed() {
        let padded = Sha256Digester.digest(" abc");
        assert_eq!(
            padded.as_str(),
            "d92b1cb3a32147b86a4db0647e4bf6eda6cf160fd3b2da264c5b088c9f9ccbfa"
        );
        assert_ne!(padded, Sha256Digester.digest("abc"));
        assert_ne!(RollingDigester.digest("abc "), RollingDigester.digest("abc"));
    }

    #[test]
    fn nibble_is_total() {
        let digest = HexDigest::from_hex("aF3z");
        assert_eq!(digest.nibble(0), 10);
        assert_eq!(digest.nibble(1), 15);
        assert_eq!(digest.nibble(2), 3);
        assert_eq!(digest.nibble(3), 0);
        assert_eq!(digest.nibble(500), 0);
    }

    #[test]
    fn backend_names_round_trip_through_serde() {
        let json = serde_json::to_string(&HashBackend::Rolling).unwrap();
        assert_eq!(json, "\"rolling\"");
        let parsed: HashBackend = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(parsed, HashBackend::Sha256);
    }
}
