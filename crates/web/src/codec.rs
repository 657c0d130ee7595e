//! Transport encoding for passwords and hashes.
//!
//! Standard base64 with padding, so binary-unsafe characters such as `$`
//! or `+` survive JSON and form bodies untouched.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use common::{AppError, AppResult};

/// Encode bytes for transport.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    BASE64.encode(bytes)
}

/// Decode a transport field. Surrounding whitespace is ignored.
pub fn decode(encoded: &str) -> AppResult<Vec<u8>> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| AppError::malformed(format!("Failed to decode base64: {}", e)))
}

/// Decode a transport field that must hold UTF-8 text.
pub fn decode_string(encoded: &str) -> AppResult<String> {
    String::from_utf8(decode(encoded)?)
        .map_err(|_| AppError::malformed("Decoded value is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_unsafe_bytes() {
        let raw: &[u8] = b"$argon2id$v=19+/=\x00\x01\x1f\x7f\xff";
        assert_eq!(decode(&encode(raw)).unwrap(), raw);
    }

    #[test]
    fn test_known_value() {
        assert_eq!(encode("MyPasswordIsSecret"), "TXlQYXNzd29yZElzU2VjcmV0");
        assert_eq!(decode_string("TXlQYXNzd29yZElzU2VjcmV0").unwrap(), "MyPasswordIsSecret");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(encode(""), "");
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(decode("  YWJj\n").unwrap(), b"abc");
    }

    #[test]
    fn test_invalid_base64() {
        let result = decode("not-valid-base64!!!");
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn test_non_utf8_string() {
        let result = decode_string(&encode([0xff, 0xfe]));
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }
}
