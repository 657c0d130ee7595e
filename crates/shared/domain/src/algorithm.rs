//! Supported password hashing algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{PREFIXES_BCRYPT, PREFIX_ARGON2I, PREFIX_ARGON2ID};
use crate::error::DomainError;

/// Adaptive hashing algorithms this system can produce and verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Memory-hard hybrid variant (preferred)
    Argon2id,
    /// Data-independent Argon2 variant
    Argon2i,
    /// bcrypt fallback
    Bcrypt,
}

impl HashAlgorithm {
    /// Stable lowercase name, also accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Argon2id => "argon2id",
            HashAlgorithm::Argon2i => "argon2i",
            HashAlgorithm::Bcrypt => "bcrypt",
        }
    }

    /// True for the memory-hard Argon2 family.
    pub fn is_argon2(&self) -> bool {
        matches!(self, HashAlgorithm::Argon2id | HashAlgorithm::Argon2i)
    }

    /// Read the algorithm from an encoded hash's prefix.
    ///
    /// Only the identifier is inspected; the rest of the hash stays opaque.
    pub fn detect(encoded: &str) -> Option<Self> {
        if encoded.starts_with(PREFIX_ARGON2ID) {
            Some(HashAlgorithm::Argon2id)
        } else if encoded.starts_with(PREFIX_ARGON2I) {
            Some(HashAlgorithm::Argon2i)
        } else if PREFIXES_BCRYPT.iter().any(|p| encoded.starts_with(p)) {
            Some(HashAlgorithm::Bcrypt)
        } else {
            None
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argon2id" | "argon2" => Ok(HashAlgorithm::Argon2id),
            "argon2i" => Ok(HashAlgorithm::Argon2i),
            "bcrypt" => Ok(HashAlgorithm::Bcrypt),
            other => Err(DomainError::unsupported(other)),
        }
    }
}
