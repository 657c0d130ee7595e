//! Domain layer - Password hashing core.
//!
//! This crate holds the hashing and verification logic with no transport
//! concerns: it knows nothing about HTTP, JSON or base64.

pub mod algorithm;
pub mod constants;
pub mod error;
pub mod hasher;
pub mod password;

pub use algorithm::HashAlgorithm;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use hasher::{Hasher, HasherConfig};
pub use password::{PasswordHash, PasswordInput};
