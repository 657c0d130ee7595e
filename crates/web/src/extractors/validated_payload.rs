//! Validated payload extractor.
//!
//! Accepts either a JSON body or a form-encoded body, chosen by the
//! `Content-Type` header, then runs `validator` rules on the result.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body extractor that automatically validates the payload.
///
/// Bodies without a form content type are parsed as JSON, with or without
/// an `application/json` header.
pub struct ValidatedPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with(FORM_CONTENT_TYPE))
            .unwrap_or(false);

        let value = if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            value
        } else {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            serde_json::from_slice(&body)
                .map_err(|e| AppError::validation(format!("Invalid JSON body: {}", e)))?
        };

        // Validate
        value.validate().map_err(|e| {
            // Get first validation error message
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            AppError::validation(message)
        })?;

        Ok(ValidatedPayload(value))
    }
}
