//! Base64 encoding
//!
//! Each character is one 8-bit code unit. Characters above U+00FF have no
//! single-byte form and are rejected rather than widened to UTF-8.

use super::Cipher;
use crate::{CipherKind, Error, Result};

pub struct Base64;

impl Cipher for Base64 {
    fn kind(&self) -> CipherKind {
        CipherKind::Base64
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let bytes = text
            .chars()
            .map(|c| {
                u8::try_from(u32::from(c)).map_err(|_| Error::UnsupportedCharacter {
                    cipher: CipherKind::Base64,
                    ch: c,
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            bytes,
        ))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, compact)
            .map_err(|e| Error::DecodingFailed(format!("Base64: {}", e)))?;

        Ok(bytes.into_iter().map(char::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64() {
        assert_eq!(Base64.encrypt("Hello World").unwrap(), "SGVsbG8gV29ybGQ=");
        assert_eq!(Base64.decrypt("SGVsbG8gV29ybGQ=").unwrap(), "Hello World");
    }

    #[test]
    fn test_latin1_is_one_byte() {
        assert_eq!(Base64.encrypt("é").unwrap(), "6Q==");
        assert_eq!(Base64.decrypt("6Q==").unwrap(), "é");
    }

    #[test]
    fn test_rejects_wide_characters() {
        match Base64.encrypt("5€") {
            Err(Error::UnsupportedCharacter { ch, .. }) => assert_eq!(ch, '€'),
            other => panic!("expected UnsupportedCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(Base64.decrypt("not base64!"), Err(Error::DecodingFailed(_))));
    }

    #[test]
    fn test_ignores_line_breaks() {
        assert_eq!(Base64.decrypt("SGVsbG8g\nV29ybGQ=").unwrap(), "Hello World");
    }
}
