//! Password value objects.
//!
//! `PasswordInput` is the plaintext held for a single request and
//! `PasswordHash` is the opaque encoded output of the hashing primitive.

use std::fmt;

use crate::algorithm::HashAlgorithm;

/// Plaintext password bytes.
///
/// The bytes need not be valid UTF-8 and may be empty.
#[derive(Clone, Default)]
pub struct PasswordInput {
    bytes: Vec<u8>,
}

// Never expose the plaintext in debug output
impl fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordInput")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl PasswordInput {
    /// Wrap raw plaintext bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Plaintext bytes fed to the primitive.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for PasswordInput {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<Vec<u8>> for PasswordInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Encoded hash string (algorithm, parameters, salt and digest).
///
/// Treated as an opaque blob; only the algorithm prefix is ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    encoded: String,
}

impl PasswordHash {
    /// Wrap an encoded hash, e.g. one received from a client.
    ///
    /// No validation happens here: a malformed value simply never verifies.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Get the encoded string.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Consume and return the encoded string.
    pub fn into_string(self) -> String {
        self.encoded
    }

    /// Algorithm named by the hash prefix, if recognised.
    pub fn algorithm(&self) -> Option<HashAlgorithm> {
        HashAlgorithm::detect(&self.encoded)
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> Self {
        hash.encoded
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}
