//! Application services.

pub mod password_service;

pub use password_service::{HashingService, PasswordService};
