//! Cipher chains
//!
//! A chain is an ordered list of configured ciphers. Encryption runs the
//! layers first to last, decryption last to first. Every layer is built
//! before any text is touched, and the first failing layer aborts the whole
//! operation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ciphers::{self, AlgorithmMetadata, Cipher};
use crate::{CipherConfig, CipherKind, Error, Result};

/// Ordered, non-empty list of cipher layers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChainSpec {
    pub(crate) layers: Vec<CipherConfig>,
}

impl ChainSpec {
    pub fn new(layers: Vec<CipherConfig>) -> Result<Self> {
        if layers.is_empty() {
            return Err(Error::InvalidChain("chain must contain at least one layer".into()));
        }
        Ok(Self { layers })
    }

    /// Parse a JSON array of `{type, config}` objects
    pub fn parse(chain: &Value) -> Result<Self> {
        let entries = chain
            .as_array()
            .ok_or_else(|| Error::InvalidChain("chain must be an array".into()))?;

        let layers = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let name = entry.get("type").and_then(Value::as_str).unwrap_or("?");
                CipherConfig::from_value(entry).map_err(|e| e.at_layer(i + 1, name))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(layers)
    }

    pub fn layers(&self) -> &[CipherConfig] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Construct every layer, failing on the first invalid config
    fn build(&self) -> Result<Vec<Box<dyn Cipher>>> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, config)| {
                ciphers::build(config).map_err(|e| {
                    tracing::warn!(layer = i + 1, cipher = %config.kind(), error = %e, "chain layer rejected");
                    e.at_layer(i + 1, config.kind().as_str())
                })
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for ChainSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let layers = Vec::<CipherConfig>::deserialize(deserializer)?;
        ChainSpec::new(layers).map_err(serde::de::Error::custom)
    }
}

/// What happened at one layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerReport {
    /// 1-based position in the chain as written
    pub layer: usize,
    #[serde(rename = "type")]
    pub kind: CipherKind,
    pub metadata: AlgorithmMetadata,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncryptedChain {
    pub ciphertext: String,
    pub layers: usize,
    pub chain: Vec<LayerReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecryptedChain {
    pub plaintext: String,
    pub layers: usize,
    /// Reports in the order the layers were undone
    pub chain: Vec<LayerReport>,
}

/// Structural check of an untrusted chain description
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub layer_count: usize,
}

/// Run `layer` over `text`, tagging errors with its position
fn run_layer(
    text: &str,
    position: usize,
    cipher: &dyn Cipher,
    op: fn(&dyn Cipher, &str) -> Result<String>,
) -> Result<(String, LayerReport)> {
    let output = op(cipher, text).map_err(|e| {
        tracing::warn!(layer = position, cipher = %cipher.kind(), error = %e, "chain aborted");
        e.at_layer(position, cipher.kind().as_str())
    })?;
    tracing::debug!(layer = position, cipher = %cipher.kind(), "layer applied");

    let report = LayerReport {
        layer: position,
        kind: cipher.kind(),
        metadata: cipher.metadata(),
        success: true,
    };
    Ok((output, report))
}

pub fn encrypt_chain(plaintext: &str, chain: &ChainSpec) -> Result<EncryptedChain> {
    let layers = chain.build()?;
    let mut text = plaintext.to_string();
    let mut reports = Vec::with_capacity(layers.len());

    for (i, cipher) in layers.iter().enumerate() {
        let (output, report) = run_layer(&text, i + 1, cipher.as_ref(), |c, t| c.encrypt(t))?;
        text = output;
        reports.push(report);
    }

    Ok(EncryptedChain {
        ciphertext: text,
        layers: layers.len(),
        chain: reports,
    })
}

/// `chain` is given in encryption order; it is undone back to front
pub fn decrypt_chain(ciphertext: &str, chain: &ChainSpec) -> Result<DecryptedChain> {
    let layers = chain.build()?;
    let mut text = ciphertext.to_string();
    let mut reports = Vec::with_capacity(layers.len());

    for (i, cipher) in layers.iter().enumerate().rev() {
        let (output, report) = run_layer(&text, i + 1, cipher.as_ref(), |c, t| c.decrypt(t))?;
        text = output;
        reports.push(report);
    }

    Ok(DecryptedChain {
        plaintext: text,
        layers: layers.len(),
        chain: reports,
    })
}

/// Report every problem in `chain` instead of stopping at the first
pub fn validate_chain(chain: &Value, max_recommended_layers: usize) -> ChainValidation {
    let mut report = ChainValidation::default();

    let entries = match chain.as_array() {
        Some(entries) => entries,
        None => {
            report.errors.push("Chain must be an array".to_string());
            return report;
        }
    };

    report.layer_count = entries.len();
    if entries.is_empty() {
        report.errors.push("Chain must contain at least one layer".to_string());
        return report;
    }

    for (i, entry) in entries.iter().enumerate() {
        let problem = CipherConfig::from_value(entry).and_then(|config| config.validate());
        if let Err(e) = problem {
            report.errors.push(format!("Layer {}: {}", i + 1, e));
        }
    }

    if entries.len() > max_recommended_layers {
        report.warnings.push(format!(
            "Chain has {} layers; more than {} is slow to undo and hard to reason about",
            entries.len(),
            max_recommended_layers
        ));
    }

    report.valid = report.errors.is_empty();
    if !report.valid {
        tracing::warn!(errors = report.errors.len(), "chain failed validation");
    }
    report
}
