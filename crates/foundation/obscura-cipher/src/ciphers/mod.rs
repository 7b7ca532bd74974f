//! Classic Ciphers
//!
//! Every algorithm implements [`Cipher`]. Instances are built from a
//! [`CipherConfig`] by [`build`], which validates the config first, so a
//! constructed cipher never fails because of its own parameters.

use serde::Serialize;
use serde_json::Value;

use crate::{CipherConfig, CipherKind, Result};

pub mod atbash;
pub mod baconian;
pub mod base64;
pub mod caesar;
pub mod morse;
pub mod polybius;
pub mod rail_fence;
pub mod vigenere;

pub use self::atbash::Atbash;
pub use self::baconian::Baconian;
pub use self::base64::Base64;
pub use self::caesar::Caesar;
pub use self::morse::Morse;
pub use self::polybius::Polybius;
pub use self::rail_fence::RailFence;
pub use self::vigenere::Vigenere;

/// Common contract for all algorithms
pub trait Cipher: Send + Sync {
    /// Which algorithm this is
    fn kind(&self) -> CipherKind;

    /// Transform plaintext into ciphertext
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Transform ciphertext back into plaintext
    fn decrypt(&self, text: &str) -> Result<String>;

    /// Parameters worth reporting alongside results
    fn parameters(&self) -> Value {
        Value::Null
    }

    fn metadata(&self) -> AlgorithmMetadata {
        AlgorithmMetadata {
            kind: self.kind(),
            name: self.kind().name(),
            category: self.kind().category(),
            parameters: self.parameters(),
        }
    }
}

/// Descriptor of a configured algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmMetadata {
    #[serde(rename = "type")]
    pub kind: CipherKind,
    pub name: &'static str,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub parameters: Value,
}

/// Construct a validated algorithm instance
pub fn build(config: &CipherConfig) -> Result<Box<dyn Cipher>> {
    let cipher: Box<dyn Cipher> = match config {
        CipherConfig::Caesar { shift } => Box::new(Caesar::new(*shift)?),
        CipherConfig::Vigenere { key } => Box::new(Vigenere::new(key)?),
        CipherConfig::Atbash => Box::new(Atbash),
        CipherConfig::Base64 => Box::new(Base64),
        CipherConfig::Baconian => Box::new(Baconian),
        CipherConfig::Polybius { grid } => Box::new(Polybius::new(grid.as_deref())?),
        CipherConfig::RailFence { rails } => Box::new(RailFence::new(*rails)?),
        CipherConfig::Morse {
            letter_separator,
            word_separator,
        } => Box::new(Morse::new(
            letter_separator.as_deref(),
            word_separator.as_deref(),
        )?),
    };

    tracing::debug!(cipher = %config.kind(), "built cipher");
    Ok(cipher)
}

/// Shift an ASCII letter forward, preserving case; other characters pass through
pub(crate) fn shift_letter(c: char, shift: u8) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };
    ((c as u8 - base + shift % 26) % 26 + base) as char
}
