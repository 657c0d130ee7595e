//! Domain-level constants.
//!
//! Default cost parameters and the fixed values used by the capability probe.

// =============================================================================
// Argon2
// =============================================================================

/// Default Argon2 memory cost in KiB (~19 MiB)
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19 * 1024;

/// Default Argon2 time cost (iterations)
pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;

/// Default Argon2 degree of parallelism (lanes)
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1;

/// Largest Argon2 memory cost accepted from a hash being verified (256 MiB)
pub const MAX_VERIFY_ARGON2_MEMORY_KIB: u32 = 256 * 1024;

/// Largest Argon2 iteration count accepted from a hash being verified
pub const MAX_VERIFY_ARGON2_ITERATIONS: u32 = 16;

/// Largest memory × iterations product (KiB passes) accepted from a hash
/// being verified, e.g. 256 MiB over 4 iterations
pub const MAX_VERIFY_ARGON2_WORK: u64 = 1024 * 1024;

// =============================================================================
// bcrypt
// =============================================================================

/// Default bcrypt cost used by the fallback algorithm
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Longest password bcrypt hashes without truncation (the primitive appends
/// a NUL terminator inside its 72-byte key)
pub const MAX_BCRYPT_PASSWORD_BYTES: usize = 71;

// =============================================================================
// Capability probe
// =============================================================================

/// Plaintext hashed once at startup to check the preferred algorithm works
pub const PROBE_PASSWORD: &[u8] = b"capability-probe";

// =============================================================================
// Hash prefixes
// =============================================================================

/// PHC prefix of Argon2id hashes
pub const PREFIX_ARGON2ID: &str = "$argon2id$";

/// PHC prefix of Argon2i hashes
pub const PREFIX_ARGON2I: &str = "$argon2i$";

/// Modular crypt prefixes of bcrypt hashes
pub const PREFIXES_BCRYPT: &[&str] = &["$2a$", "$2b$", "$2x$", "$2y$"];
