//! Password hashing demo service.
//!
//! This crate provides the HTTP layer around the domain hasher: a demo page
//! plus the `hash` and `login` tasks it posts as JSON or form bodies.
//! Transport concerns (base64, JSON, routing) live here, not in `domain`.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod sample;
pub mod services;
pub mod state;

pub use config::WebConfig;
pub use routes::create_router;
pub use state::AppState;
