//! Hashing System - SHA-1 Digests as Gene Sources
//!
//! Every pattern is seeded by the SHA-1 digest of its input string. The
//! digest is read back as a sequence of hex "genes" that drive geometry.
//! SHA-256 is used separately to fingerprint rendered output for reports.

use std::fmt;

use serde::Serialize;
use serde_json::{to_string, Value};
use sha1::{Digest as _, Sha1};
use sha2::Sha256;

/// Number of hex characters in a [`Digest`].
pub const DIGEST_LEN: usize = 40;

/// Immutable lowercase hex digest of an input string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Hash `input` with SHA-1.
    pub fn of(input: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(input.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `length` hex characters starting at `index` as an integer.
    ///
    /// Reads stop at the end of the digest; a slice that lies entirely past
    /// the end yields 0.
    pub fn extract(&self, index: usize, length: usize) -> u32 {
        let start = index.min(self.0.len());
        let end = index.saturating_add(length).min(self.0.len());
        self.0[start..end]
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0, |acc, d| (acc << 4) | d)
    }

    /// Single hex character at `index`, in `0..=15`.
    pub fn gene(&self, index: usize) -> u32 {
        self.extract(index, 1)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
