//! Custom request extractors.

pub mod validated_payload;

pub use validated_payload::ValidatedPayload;
