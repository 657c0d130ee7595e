//! Application state for dependency injection.

use std::sync::Arc;

use domain::Hasher;

use crate::config::WebConfig;
use crate::services::{HashingService, PasswordService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub password_service: Arc<dyn PasswordService>,
    pub config: WebConfig,
}

impl AppState {
    /// Create new app state with an injected service.
    pub fn new(password_service: Arc<dyn PasswordService>, config: WebConfig) -> Self {
        Self {
            password_service,
            config,
        }
    }

    /// Create app state around a probed hasher.
    pub fn from_hasher(hasher: Hasher, config: WebConfig) -> Self {
        Self::new(Arc::new(HashingService::new(hasher)), config)
    }
}
