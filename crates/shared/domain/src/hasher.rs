//! Password hasher with one-time algorithm selection.
//!
//! `Hasher::probe` decides at startup whether Argon2 can be used with the
//! configured parameters and falls back to bcrypt otherwise. The decision is
//! stored in the returned value and never re-evaluated per call.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::algorithm::HashAlgorithm;
use crate::constants::{
    DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB, DEFAULT_ARGON2_PARALLELISM,
    DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MAX_VERIFY_ARGON2_ITERATIONS,
    MAX_VERIFY_ARGON2_MEMORY_KIB, MAX_VERIFY_ARGON2_WORK, MIN_BCRYPT_COST, PROBE_PASSWORD,
};
use crate::error::{DomainError, DomainResult};
use crate::password::{PasswordHash, PasswordInput};

/// Hashing configuration handed to [`Hasher::probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasherConfig {
    /// Preferred algorithm; `Bcrypt` skips the Argon2 probe entirely
    pub algorithm: HashAlgorithm,
    /// Argon2 memory cost in KiB
    pub argon2_memory_kib: u32,
    /// Argon2 iterations
    pub argon2_iterations: u32,
    /// Argon2 lanes
    pub argon2_parallelism: u32,
    /// bcrypt cost, used when bcrypt is selected
    pub bcrypt_cost: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Argon2id,
            argon2_memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            argon2_iterations: DEFAULT_ARGON2_ITERATIONS,
            argon2_parallelism: DEFAULT_ARGON2_PARALLELISM,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Hashes and verifies passwords with the algorithm chosen at startup.
#[derive(Debug, Clone)]
pub struct Hasher {
    algorithm: HashAlgorithm,
    argon2_params: Option<Params>,
    bcrypt_cost: u32,
}

impl Hasher {
    /// Run the capability probe and build a hasher.
    ///
    /// # Errors
    /// Returns a validation error if the bcrypt cost is out of range, since
    /// the fallback itself would then be unusable.
    pub fn probe(config: &HasherConfig) -> DomainResult<Self> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&config.bcrypt_cost) {
            return Err(DomainError::validation(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, config.bcrypt_cost
            )));
        }

        let fallback = Self {
            algorithm: HashAlgorithm::Bcrypt,
            argon2_params: None,
            bcrypt_cost: config.bcrypt_cost,
        };

        if !config.algorithm.is_argon2() {
            tracing::info!(cost = config.bcrypt_cost, "Password hashing uses bcrypt");
            return Ok(fallback);
        }

        match Self::probe_argon2(config) {
            Ok(params) => {
                tracing::info!(
                    algorithm = %config.algorithm,
                    memory_kib = params.m_cost(),
                    iterations = params.t_cost(),
                    parallelism = params.p_cost(),
                    "Password hashing uses Argon2"
                );
                Ok(Self {
                    algorithm: config.algorithm,
                    argon2_params: Some(params),
                    bcrypt_cost: config.bcrypt_cost,
                })
            }
            Err(e) => {
                tracing::warn!(
                    "{} unavailable ({}), falling back to bcrypt",
                    config.algorithm,
                    e
                );
                Ok(fallback)
            }
        }
    }

    /// Algorithm selected by the probe.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash a password with a fresh random salt.
    ///
    /// Two calls with the same input return different hashes. With bcrypt,
    /// passwords longer than [`MAX_BCRYPT_PASSWORD_BYTES`] are rejected
    /// instead of being silently truncated.
    ///
    /// [`MAX_BCRYPT_PASSWORD_BYTES`]: crate::constants::MAX_BCRYPT_PASSWORD_BYTES
    pub fn hash(&self, input: &PasswordInput) -> DomainResult<PasswordHash> {
        let encoded = match &self.argon2_params {
            Some(params) => {
                let salt = SaltString::generate(&mut OsRng);
                argon2_with(self.algorithm, params.clone())?
                    .hash_password(input.as_bytes(), &salt)
                    .map_err(|e| DomainError::hashing(e.to_string()))?
                    .to_string()
            }
            None => bcrypt::non_truncating_hash(input.as_bytes(), self.bcrypt_cost)
                .map_err(|e| DomainError::hashing(e.to_string()))?,
        };

        Ok(PasswordHash::from_encoded(encoded))
    }

    /// Check a password against an encoded hash.
    ///
    /// The hash's own prefix decides which primitive verifies it, so hashes
    /// from either algorithm are accepted whatever this hasher selected.
    /// Malformed hashes return `false`.
    pub fn verify(&self, input: &PasswordInput, hash: &PasswordHash) -> bool {
        Self::verify_hash(input, hash).unwrap_or(false)
    }

    fn verify_hash(input: &PasswordInput, hash: &PasswordHash) -> DomainResult<bool> {
        let algorithm = hash
            .algorithm()
            .ok_or_else(|| DomainError::malformed("unrecognised hash prefix"))?;

        if algorithm.is_argon2() {
            let parsed = PhcHash::new(hash.as_str())
                .map_err(|e| DomainError::malformed(format!("Invalid hash format: {}", e)))?;
            let params = Params::try_from(&parsed)
                .map_err(|e| DomainError::malformed(format!("Invalid hash params: {}", e)))?;
            // Client-supplied hashes must not pin a worker with unbounded cost
            check_argon2_cost(params.m_cost(), params.t_cost())
                .map_err(|e| DomainError::malformed(e.to_string()))?;
            // Cost parameters and variant come from the parsed hash
            Ok(Argon2::default()
                .verify_password(input.as_bytes(), &parsed)
                .is_ok())
        } else {
            bcrypt::non_truncating_verify(input.as_bytes(), hash.as_str())
                .map_err(|e| DomainError::malformed(e.to_string()))
        }
    }

    fn probe_argon2(config: &HasherConfig) -> DomainResult<Params> {
        // Hashes we produce must pass our own verification bound
        check_argon2_cost(config.argon2_memory_kib, config.argon2_iterations)?;

        let params = Params::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
            None,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        let salt = SaltString::generate(&mut OsRng);
        argon2_with(config.algorithm, params.clone())?
            .hash_password(PROBE_PASSWORD, &salt)
            .map_err(|e| DomainError::hashing(e.to_string()))?;

        Ok(params)
    }
}

/// Reject Argon2 costs above the verification limits.
fn check_argon2_cost(memory_kib: u32, iterations: u32) -> DomainResult<()> {
    if memory_kib > MAX_VERIFY_ARGON2_MEMORY_KIB {
        return Err(DomainError::validation(format!(
            "Argon2 memory cost {} KiB exceeds {} KiB",
            memory_kib, MAX_VERIFY_ARGON2_MEMORY_KIB
        )));
    }
    if iterations > MAX_VERIFY_ARGON2_ITERATIONS {
        return Err(DomainError::validation(format!(
            "Argon2 iterations {} exceed {}",
            iterations, MAX_VERIFY_ARGON2_ITERATIONS
        )));
    }
    let work = u64::from(memory_kib) * u64::from(iterations);
    if work > MAX_VERIFY_ARGON2_WORK {
        return Err(DomainError::validation(format!(
            "Argon2 cost {} KiB x {} iterations exceeds {}",
            memory_kib, iterations, MAX_VERIFY_ARGON2_WORK
        )));
    }
    Ok(())
}

fn argon2_with(algorithm: HashAlgorithm, params: Params) -> DomainResult<Argon2<'static>> {
    let variant = match algorithm {
        HashAlgorithm::Argon2id => Algorithm::Argon2id,
        HashAlgorithm::Argon2i => Algorithm::Argon2i,
        HashAlgorithm::Bcrypt => {
            return Err(DomainError::unsupported("bcrypt is not an Argon2 variant"))
        }
    };
    Ok(Argon2::new(variant, Version::V0x13, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_BCRYPT_PASSWORD_BYTES;
    use proptest::prelude::*;

    const ALL_ALGORITHMS: [HashAlgorithm; 3] =
        [HashAlgorithm::Argon2id, HashAlgorithm::Argon2i, HashAlgorithm::Bcrypt];

    fn fast_config(algorithm: HashAlgorithm) -> HasherConfig {
        HasherConfig {
            algorithm,
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
            argon2_parallelism: 1,
            bcrypt_cost: MIN_BCRYPT_COST,
        }
    }

    fn hasher(algorithm: HashAlgorithm) -> Hasher {
        Hasher::probe(&fast_config(algorithm)).unwrap()
    }

    #[test]
    fn test_probe_selects_preferred_argon2() {
        assert_eq!(hasher(HashAlgorithm::Argon2id).algorithm(), HashAlgorithm::Argon2id);
        assert_eq!(hasher(HashAlgorithm::Argon2i).algorithm(), HashAlgorithm::Argon2i);
    }

    #[test]
    fn test_probe_falls_back_on_invalid_argon2_params() {
        let mut config = fast_config(HashAlgorithm::Argon2id);
        config.argon2_memory_kib = 0;

        let hasher = Hasher::probe(&config).unwrap();
        assert_eq!(hasher.algorithm(), HashAlgorithm::Bcrypt);

        let hash = hasher.hash(&PasswordInput::from("MyPasswordIsSecret")).unwrap();
        assert!(hash.as_str().starts_with("$2b$"));
    }

    #[test]
    fn test_probe_falls_back_on_unverifiable_argon2_cost() {
        let mut config = fast_config(HashAlgorithm::Argon2id);
        config.argon2_iterations = MAX_VERIFY_ARGON2_ITERATIONS + 1;
        assert_eq!(Hasher::probe(&config).unwrap().algorithm(), HashAlgorithm::Bcrypt);

        // Each bound holds alone, the product does not
        let mut config = fast_config(HashAlgorithm::Argon2id);
        config.argon2_memory_kib = MAX_VERIFY_ARGON2_MEMORY_KIB;
        config.argon2_iterations = 8;
        assert_eq!(Hasher::probe(&config).unwrap().algorithm(), HashAlgorithm::Bcrypt);
    }

    #[test]
    fn test_default_argon2_cost_is_verifiable() {
        let config = HasherConfig::default();
        assert!(check_argon2_cost(config.argon2_memory_kib, config.argon2_iterations).is_ok());
    }

    #[test]
    fn test_probe_is_deterministic() {
        let config = fast_config(HashAlgorithm::Argon2id);
        let first = Hasher::probe(&config).unwrap().algorithm();
        for _ in 0..3 {
            assert_eq!(Hasher::probe(&config).unwrap().algorithm(), first);
        }
    }

    #[test]
    fn test_probe_rejects_bad_bcrypt_cost() {
        let mut config = fast_config(HashAlgorithm::Bcrypt);
        config.bcrypt_cost = 2;
        assert!(matches!(Hasher::probe(&config), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_hash_and_verify() {
        for algorithm in ALL_ALGORITHMS {
            let hasher = hasher(algorithm);
            let hash = hasher.hash(&PasswordInput::from("MyPasswordIsSecret")).unwrap();

            assert_eq!(hash.algorithm(), Some(algorithm));
            assert!(hasher.verify(&PasswordInput::from("MyPasswordIsSecret"), &hash));
            assert!(!hasher.verify(&PasswordInput::from("WrongPassword"), &hash));
        }
    }

    #[test]
    fn test_same_password_different_salts() {
        for algorithm in ALL_ALGORITHMS {
            let hasher = hasher(algorithm);
            let plain = PasswordInput::from("MyPasswordIsSecret");
            let first = hasher.hash(&plain).unwrap();
            let second = hasher.hash(&plain).unwrap();

            // Different salts produce different hashes
            assert_ne!(first, second, "{}", algorithm);
            // But both verify correctly
            assert!(hasher.verify(&plain, &first));
            assert!(hasher.verify(&plain, &second));
        }
    }

    #[test]
    fn test_shared_prefix_does_not_verify() {
        let prefix = "a".repeat(72);
        let secret = PasswordInput::from(format!("{}SECRET-TAIL", prefix).as_str());
        let other = PasswordInput::from(format!("{}other", prefix).as_str());

        for algorithm in [HashAlgorithm::Argon2id, HashAlgorithm::Argon2i] {
            let hasher = hasher(algorithm);
            let hash = hasher.hash(&secret).unwrap();
            assert!(hasher.verify(&secret, &hash));
            assert!(!hasher.verify(&other, &hash));
        }
    }

    #[test]
    fn test_bcrypt_rejects_long_password() {
        let bcrypt = hasher(HashAlgorithm::Bcrypt);
        let longest = PasswordInput::new(vec![b'a'; MAX_BCRYPT_PASSWORD_BYTES]);
        let too_long = PasswordInput::new(vec![b'a'; MAX_BCRYPT_PASSWORD_BYTES + 1]);

        let hash = bcrypt.hash(&longest).unwrap();
        assert!(bcrypt.verify(&longest, &hash));
        assert!(!bcrypt.verify(&too_long, &hash));

        assert!(matches!(bcrypt.hash(&too_long), Err(DomainError::Hashing(_))));
    }

    #[test]
    fn test_bcrypt_never_verifies_past_truncation_point() {
        let bcrypt = hasher(HashAlgorithm::Bcrypt);
        // Hash of the first 71 bytes; any longer password sharing them fails
        let prefix = PasswordInput::new(vec![b'a'; MAX_BCRYPT_PASSWORD_BYTES]);
        let hash = bcrypt.hash(&prefix).unwrap();

        for tail in ["a", "SECRET-TAIL", "other"] {
            let mut longer = vec![b'a'; MAX_BCRYPT_PASSWORD_BYTES];
            longer.extend_from_slice(tail.as_bytes());
            assert!(!bcrypt.verify(&PasswordInput::new(longer), &hash));
        }
    }

    #[test]
    fn test_long_password_round_trip_with_argon2() {
        let hasher = hasher(HashAlgorithm::Argon2id);
        let long = PasswordInput::new(vec![b'x'; 3072]);
        let hash = hasher.hash(&long).unwrap();

        assert!(hasher.verify(&long, &hash));
        assert!(!hasher.verify(&PasswordInput::new(vec![b'x'; 3071]), &hash));
    }

    #[test]
    fn test_empty_password() {
        for algorithm in [HashAlgorithm::Argon2id, HashAlgorithm::Bcrypt] {
            let hasher = hasher(algorithm);
            let empty = PasswordInput::default();
            let hash = hasher.hash(&empty).unwrap();

            assert!(!hash.as_str().is_empty());
            assert!(hasher.verify(&empty, &hash));
            assert!(!hasher.verify(&PasswordInput::from(" "), &hash));
        }
    }

    #[test]
    fn test_verify_accepts_hashes_from_either_algorithm() {
        let argon = hasher(HashAlgorithm::Argon2id);
        let bcrypt = hasher(HashAlgorithm::Bcrypt);
        let plain = PasswordInput::from("MyPasswordIsSecret");

        let from_argon = argon.hash(&plain).unwrap();
        let from_bcrypt = bcrypt.hash(&plain).unwrap();

        assert!(argon.verify(&plain, &from_bcrypt));
        assert!(bcrypt.verify(&plain, &from_argon));
    }

    #[test]
    fn test_verify_legacy_2y_bcrypt_hash() {
        let bcrypt = hasher(HashAlgorithm::Bcrypt);
        let hash = bcrypt.hash(&PasswordInput::from("secret")).unwrap();
        let legacy = PasswordHash::from_encoded(hash.as_str().replacen("$2b$", "$2y$", 1));

        assert!(bcrypt.verify(&PasswordInput::from("secret"), &legacy));
    }

    #[test]
    fn test_verify_non_utf8_password() {
        let hasher = hasher(HashAlgorithm::Argon2id);
        let plain = PasswordInput::new(vec![0xff, 0xfe, b'$', b'+', 0x07]);
        let hash = hasher.hash(&plain).unwrap();

        assert!(hasher.verify(&plain, &hash));
        assert!(!hasher.verify(&PasswordInput::new(vec![0xff, 0xfe]), &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let hasher = hasher(HashAlgorithm::Argon2id);
        let plain = PasswordInput::from("MyPasswordIsSecret");

        for garbage in [
            "",
            "not a hash",
            "$argon2id$",
            "$argon2id$v=19$m=abc",
            "$2b$12$tooshort",
            "$argon2d$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g",
            "$argon2id$v=19$m=4194304,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
        ] {
            assert!(!hasher.verify(&plain, &PasswordHash::from_encoded(garbage)));
        }
    }

    #[test]
    fn test_expensive_argon2_hash_is_rejected() {
        let hasher = hasher(HashAlgorithm::Argon2id);
        let plain = PasswordInput::from("MyPasswordIsSecret");

        for costly in [
            "$argon2id$v=19$m=8,t=4294967295,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
            "$argon2id$v=19$m=262144,t=50,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
            "$argon2id$v=19$m=262144,t=5,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
        ] {
            let hash = PasswordHash::from_encoded(costly);
            assert!(matches!(
                Hasher::verify_hash(&plain, &hash),
                Err(DomainError::MalformedInput(_))
            ));
            assert!(!hasher.verify(&plain, &hash));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_only_the_hashed_password_verifies(
            password in proptest::collection::vec(any::<u8>(), 0..=MAX_BCRYPT_PASSWORD_BYTES),
            other in proptest::collection::vec(any::<u8>(), 0..=MAX_BCRYPT_PASSWORD_BYTES),
        ) {
            prop_assume!(password != other);
            for algorithm in [HashAlgorithm::Argon2id, HashAlgorithm::Bcrypt] {
                let hasher = hasher(algorithm);
                let plain = PasswordInput::new(password.clone());
                let hash = hasher.hash(&plain).unwrap();

                prop_assert!(hasher.verify(&plain, &hash));
                prop_assert!(!hasher.verify(&PasswordInput::new(other.clone()), &hash));
            }
        }
    }
}
