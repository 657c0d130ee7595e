//! Commands module - CLI command implementations.

pub mod password;
pub mod serve;
