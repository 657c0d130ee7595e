//! Web service configuration.

use std::env;
use std::str::FromStr;

use common::{ServiceConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use domain::{
    HashAlgorithm, HasherConfig, DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB,
    DEFAULT_ARGON2_PARALLELISM, DEFAULT_BCRYPT_COST,
};

/// Web service configuration.
#[derive(Debug, Clone, Default)]
pub struct WebConfig {
    /// Bind address and request limits
    pub service: ServiceConfig,
    /// Hashing parameters fed to the startup probe
    pub hasher: HasherConfig,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let algorithm = match env::var("HASH_ALGORITHM") {
            Ok(name) => name.parse::<HashAlgorithm>().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, HashAlgorithm::Argon2id);
                HashAlgorithm::Argon2id
            }),
            Err(_) => HashAlgorithm::Argon2id,
        };

        Self {
            service: ServiceConfig {
                service_name: "password-demo".to_string(),
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
                max_body_bytes: env_or("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            },
            hasher: HasherConfig {
                algorithm,
                argon2_memory_kib: env_or("ARGON2_MEMORY_KIB", DEFAULT_ARGON2_MEMORY_KIB),
                argon2_iterations: env_or("ARGON2_ITERATIONS", DEFAULT_ARGON2_ITERATIONS),
                argon2_parallelism: env_or("ARGON2_PARALLELISM", DEFAULT_ARGON2_PARALLELISM),
                bcrypt_cost: env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST),
            },
        }
    }

    /// Override the bind address with whichever CLI flags were given.
    ///
    /// Flags win over the environment; absent flags keep the loaded value.
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
