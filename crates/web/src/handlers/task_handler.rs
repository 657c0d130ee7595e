//! Task handlers - `hash` and `login` requests posted to `/`.
//!
//! Both requests carry base64 fields. Decoding happens here so the domain
//! hasher only ever sees plaintext bytes and encoded hash strings.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use common::{AppError, AppResult};
use domain::{HashAlgorithm, PasswordHash, PasswordInput};

use crate::codec;
use crate::extractors::ValidatedPayload;
use crate::sample;
use crate::state::AppState;

/// Longest accepted base64 field
pub const MAX_ENCODED_FIELD_LENGTH: u64 = 4096;

/// Status fragment returned when the password matches the hash
pub const STATUS_SUCCESS: &str = r#"<span style="color:green;">(success, hash validated)</span>"#;

/// Status fragment returned on mismatch or malformed input
pub const STATUS_FAILURE: &str =
    r#"<span style="color:red;font-weight:bolder;">(FAILURE, an error has occurred)</span>"#;

/// Raw body posted by the page, before dispatch on `task`.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskPayload {
    /// Requested operation
    #[serde(default)]
    pub task: String,
    /// base64 plaintext password
    #[serde(default, alias = "PWD")]
    #[validate(length(
        max = MAX_ENCODED_FIELD_LENGTH,
        message = "pwd must be at most 4096 characters"
    ))]
    pub pwd: String,
    /// base64 encoded hash (login only)
    #[serde(default)]
    #[validate(length(
        max = MAX_ENCODED_FIELD_LENGTH,
        message = "hash must be at most 4096 characters"
    ))]
    pub hash: String,
}

/// Hash request: base64 plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRequest {
    pub pwd: String,
}

/// Login request: base64 plaintext and base64 hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub pwd: String,
    pub hash: String,
}

/// Exactly the operations this service performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRequest {
    Hash(HashRequest),
    Login(LoginRequest),
}

impl TryFrom<TaskPayload> for TaskRequest {
    type Error = AppError;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        match payload.task.trim() {
            "hash" => Ok(TaskRequest::Hash(HashRequest { pwd: payload.pwd })),
            "login" => Ok(TaskRequest::Login(LoginRequest {
                pwd: payload.pwd,
                hash: payload.hash,
            })),
            other => Err(AppError::unknown_task(other)),
        }
    }
}

/// Hash response; `hash` is empty when hashing failed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashResponse {
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<HashAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
}

impl HashResponse {
    /// Successful hash with its algorithm and usage sample, all encoded.
    pub fn success(hash: &PasswordHash) -> Self {
        Self {
            hash: codec::encode(hash.as_str()),
            algorithm: hash.algorithm(),
            sample: Some(codec::encode(sample::render(hash))),
        }
    }

    /// Empty sentinel returned on failure.
    pub fn failure() -> Self {
        Self {
            hash: String::new(),
            algorithm: None,
            sample: None,
        }
    }
}

/// Dispatch a posted task.
pub async fn dispatch(
    State(state): State<AppState>,
    ValidatedPayload(payload): ValidatedPayload<TaskPayload>,
) -> AppResult<Response> {
    let request = TaskRequest::try_from(payload).map_err(|e| {
        tracing::warn!("Rejected request: {}", e);
        e
    })?;

    let response = match request {
        TaskRequest::Hash(request) => Json(hash(&state, request).await).into_response(),
        TaskRequest::Login(request) => login(&state, request).await.into_response(),
    };

    Ok(response)
}

/// Hash a password; any failure yields the empty sentinel.
pub async fn hash(state: &AppState, request: HashRequest) -> HashResponse {
    let input = match codec::decode(&request.pwd) {
        Ok(bytes) => PasswordInput::new(bytes),
        Err(e) => {
            tracing::warn!("Hash request rejected: {}", e);
            return HashResponse::failure();
        }
    };

    match state.password_service.hash(input).await {
        Ok(hash) => {
            tracing::debug!(algorithm = ?hash.algorithm(), "Password hashed");
            HashResponse::success(&hash)
        }
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            HashResponse::failure()
        }
    }
}

/// Verify a password; returns the base64 status fragment as plain text.
pub async fn login(state: &AppState, request: LoginRequest) -> impl IntoResponse {
    let matched = match decode_login(&request) {
        Ok((input, hash)) => state.password_service.verify(input, hash).await,
        Err(e) => {
            tracing::debug!("Login request has malformed input: {}", e);
            false
        }
    };

    tracing::debug!(matched, "Password verified");

    let fragment = if matched {
        STATUS_SUCCESS
    } else {
        STATUS_FAILURE
    };

    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        codec::encode(fragment),
    )
}

fn decode_login(request: &LoginRequest) -> AppResult<(PasswordInput, PasswordHash)> {
    let input = PasswordInput::new(codec::decode(&request.pwd)?);
    let hash = PasswordHash::from_encoded(codec::decode_string(&request.hash)?);
    Ok((input, hash))
}
