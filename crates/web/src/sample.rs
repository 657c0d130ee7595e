//! Usage sample returned alongside a fresh hash.

use domain::{HashAlgorithm, PasswordHash};

/// Render a short Rust snippet that verifies a password against `hash`.
///
/// The verifying crate follows the hash's own algorithm prefix.
pub fn render(hash: &PasswordHash) -> String {
    let stored = hash.as_str();
    match hash.algorithm() {
        Some(HashAlgorithm::Bcrypt) => format!(
            r#"// 1. Load the hash, for instance from a protected file outside the public folder
let stored = std::fs::read_to_string("password.hash")?;

// stored now holds the output of hashing "your_password", for instance
// {stored}

// 2. Get the submitted password, for instance from a form field
let password = form.password;

// 3. Verify the submitted password against the stored hash
if bcrypt::verify(password.as_bytes(), stored.trim())? {{
    println!("You can enter this room, the password is correct.");
}}
"#
        ),
        _ => format!(
            r#"use argon2::{{Argon2, PasswordHash, PasswordVerifier}};

// 1. Load the hash, for instance from a protected file outside the public folder
let stored = std::fs::read_to_string("password.hash")?;

// stored now holds the output of hashing "your_password", for instance
// {stored}

// 2. Get the submitted password, for instance from a form field
let password = form.password;

// 3. Verify the submitted password against the stored hash
let parsed = PasswordHash::new(stored.trim())?;
if Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok() {{
    println!("You can enter this room, the password is correct.");
}}
"#
        ),
    }
}
