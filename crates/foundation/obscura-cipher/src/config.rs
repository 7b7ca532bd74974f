//! Cipher configuration
//!
//! One arm per cipher type, each carrying only the fields that type needs.
//! On the wire a configured cipher is `{"type": "caesar", "config": {"shift": 3}}`;
//! a missing or `null` config is read as `{}`, and fields that do not belong
//! to the declared type are rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ciphers;
use crate::{CipherKind, Error, Result};

/// Configuration for a single cipher layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum CipherConfig {
    Caesar {
        shift: i64,
    },
    Vigenere {
        key: String,
    },
    Atbash,
    Base64,
    Baconian,
    Polybius {
        #[serde(skip_serializing_if = "Option::is_none")]
        grid: Option<String>,
    },
    RailFence {
        rails: usize,
    },
    Morse {
        #[serde(rename = "letterSeparator", skip_serializing_if = "Option::is_none")]
        letter_separator: Option<String>,
        #[serde(rename = "wordSeparator", skip_serializing_if = "Option::is_none")]
        word_separator: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CaesarParams {
    shift: i64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VigenereParams {
    key: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RailFenceParams {
    rails: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PolybiusParams {
    #[serde(default)]
    grid: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct MorseParams {
    #[serde(default, alias = "letter_separator")]
    letter_separator: Option<String>,
    #[serde(default, alias = "word_separator")]
    word_separator: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NoParams {}

/// Untrusted `{type, config}` pair as it arrives from a caller
#[derive(Deserialize)]
struct RawLayer {
    #[serde(rename = "type")]
    cipher_type: Option<String>,
    #[serde(default)]
    config: Value,
}

impl CipherConfig {
    pub fn caesar(shift: i64) -> Self {
        CipherConfig::Caesar { shift }
    }

    pub fn vigenere(key: impl Into<String>) -> Self {
        CipherConfig::Vigenere { key: key.into() }
    }

    pub fn rail_fence(rails: usize) -> Self {
        CipherConfig::RailFence { rails }
    }

    pub fn polybius() -> Self {
        CipherConfig::Polybius { grid: None }
    }

    pub fn morse() -> Self {
        CipherConfig::Morse {
            letter_separator: None,
            word_separator: None,
        }
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            CipherConfig::Caesar { .. } => CipherKind::Caesar,
            CipherConfig::Vigenere { .. } => CipherKind::Vigenere,
            CipherConfig::Atbash => CipherKind::Atbash,
            CipherConfig::Base64 => CipherKind::Base64,
            CipherConfig::Baconian => CipherKind::Baconian,
            CipherConfig::Polybius { .. } => CipherKind::Polybius,
            CipherConfig::RailFence { .. } => CipherKind::RailFence,
            CipherConfig::Morse { .. } => CipherKind::Morse,
        }
    }

    /// Parse a type name plus a JSON config object
    pub fn from_parts(cipher_type: &str, config: &Value) -> Result<Self> {
        let kind: CipherKind = cipher_type.parse()?;
        Self::from_kind(kind, config)
    }

    /// Parse the JSON config object for an already-resolved type
    pub fn from_kind(kind: CipherKind, config: &Value) -> Result<Self> {
        let config = match config {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        let invalid = |e: serde_json::Error| Error::invalid_config(kind, e.to_string());

        Ok(match kind {
            CipherKind::Caesar => {
                let p: CaesarParams = serde_json::from_value(config).map_err(invalid)?;
                CipherConfig::Caesar { shift: p.shift }
            }
            CipherKind::Vigenere => {
                let p: VigenereParams = serde_json::from_value(config).map_err(invalid)?;
                CipherConfig::Vigenere { key: p.key }
            }
            CipherKind::RailFence => {
                let p: RailFenceParams = serde_json::from_value(config).map_err(invalid)?;
                CipherConfig::RailFence { rails: p.rails }
            }
            CipherKind::Polybius => {
                let p: PolybiusParams = serde_json::from_value(config).map_err(invalid)?;
                CipherConfig::Polybius { grid: p.grid }
            }
            CipherKind::Morse => {
                let p: MorseParams = serde_json::from_value(config).map_err(invalid)?;
                CipherConfig::Morse {
                    letter_separator: p.letter_separator,
                    word_separator: p.word_separator,
                }
            }
            CipherKind::Atbash | CipherKind::Base64 | CipherKind::Baconian => {
                let _: NoParams = serde_json::from_value(config).map_err(invalid)?;
                match kind {
                    CipherKind::Atbash => CipherConfig::Atbash,
                    CipherKind::Base64 => CipherConfig::Base64,
                    _ => CipherConfig::Baconian,
                }
            }
        })
    }

    /// Parse a `{"type": ..., "config": ...}` object
    pub fn from_value(layer: &Value) -> Result<Self> {
        let raw: RawLayer = serde_json::from_value(layer.clone())
            .map_err(|e| Error::InvalidChain(format!("layer must be an object with a type: {}", e)))?;
        let cipher_type = raw.cipher_type.ok_or(Error::MissingCipherType)?;
        Self::from_parts(&cipher_type, &raw.config)
    }

    /// Check the config against the rules of its cipher
    pub fn validate(&self) -> Result<()> {
        ciphers::build(self).map(|_| ())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<'de> Deserialize<'de> for CipherConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawLayer::deserialize(deserializer)?;
        let cipher_type = raw
            .cipher_type
            .ok_or_else(|| serde::de::Error::custom(Error::MissingCipherType))?;
        CipherConfig::from_parts(&cipher_type, &raw.config).map_err(serde::de::Error::custom)
    }
}
