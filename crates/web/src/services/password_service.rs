//! Password service - Runs the hashing core off the async runtime.
//!
//! Hashing is deliberately CPU-expensive, so every call moves to the
//! blocking thread pool instead of stalling a runtime worker.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{HashAlgorithm, Hasher, PasswordHash, PasswordInput};

/// Password service trait for dependency injection.
#[async_trait]
pub trait PasswordService: Send + Sync {
    /// Algorithm chosen at startup
    fn algorithm(&self) -> HashAlgorithm;

    /// Hash a password with a fresh salt
    async fn hash(&self, input: PasswordInput) -> AppResult<PasswordHash>;

    /// Check a password against a hash; malformed hashes never match
    async fn verify(&self, input: PasswordInput, hash: PasswordHash) -> bool;
}

/// `PasswordService` backed by the domain [`Hasher`].
pub struct HashingService {
    hasher: Arc<Hasher>,
}

impl HashingService {
    pub fn new(hasher: Hasher) -> Self {
        Self {
            hasher: Arc::new(hasher),
        }
    }
}

#[async_trait]
impl PasswordService for HashingService {
    fn algorithm(&self) -> HashAlgorithm {
        self.hasher.algorithm()
    }

    async fn hash(&self, input: PasswordInput) -> AppResult<PasswordHash> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&input))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(AppError::from)
    }

    async fn verify(&self, input: PasswordInput, hash: PasswordHash) -> bool {
        let hasher = Arc::clone(&self.hasher);
        match tokio::task::spawn_blocking(move || hasher.verify(&input, &hash)).await {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!("Verification task failed: {}", e);
                false
            }
        }
    }
}
