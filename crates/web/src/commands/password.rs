//! Hash and verify commands - the hashing core from the terminal.
//!
//! The password is read from stdin rather than argv so it stays out of
//! shell history and process listings.

use std::io::BufRead;

use common::{AppError, AppResult};
use domain::{Hasher, PasswordHash, PasswordInput};

use crate::config::WebConfig;

/// Hash the password on the first line of `reader`.
pub fn hash(config: &WebConfig, reader: impl BufRead) -> AppResult<PasswordHash> {
    let hasher = Hasher::probe(&config.hasher)?;
    let input = read_password(reader)?;
    Ok(hasher.hash(&input)?)
}

/// Verify the password on the first line of `reader` against `hash`.
pub fn verify(config: &WebConfig, hash: &str, reader: impl BufRead) -> AppResult<bool> {
    let hasher = Hasher::probe(&config.hasher)?;
    let input = read_password(reader)?;
    Ok(hasher.verify(&input, &PasswordHash::from_encoded(hash.trim())))
}

/// Read one line, dropping only the line terminator.
fn read_password(mut reader: impl BufRead) -> AppResult<PasswordInput> {
    let mut line = Vec::new();
    reader
        .read_until(b'\n', &mut line)
        .map_err(|e| AppError::internal(format!("Failed to read password: {}", e)))?;

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(PasswordInput::new(line))
}
