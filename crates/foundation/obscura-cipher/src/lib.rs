//! Obscura Cipher Engine
//!
//! Classical ciphers behind one contract, layered cipher chains, and the
//! heuristics used to attack them. None of this is secure cryptography.
//!
//! # Modules
//! - `kind` - Cipher type names, descriptions, categories
//! - `config` - Per-type configuration (`{"type": ..., "config": {...}}`)
//! - `ciphers` - Caesar, Vigenère, Atbash, Base64, Baconian, Polybius, Rail Fence, Morse
//! - `chain` - Layered encryption/decryption and chain validation
//! - `engine` - Registry facade used by callers
//! - `analysis` - Frequency analysis, IoC, Chi-squared
//! - `identifier` - Pattern-based guesses at the cipher family
//! - `solver` - Vigenère key recovery, Caesar cracking
//! - `presets` - Named configurations for common scenarios
//! - `settings` - Chain warning threshold and solver tuning

pub mod analysis;
pub mod chain;
pub mod ciphers;
pub mod config;
pub mod engine;
pub mod identifier;
pub mod kind;
pub mod presets;
pub mod settings;
pub mod solver;

pub use analysis::FrequencyAnalysis;
pub use chain::{ChainSpec, ChainValidation, DecryptedChain, EncryptedChain, LayerReport};
pub use ciphers::{AlgorithmMetadata, Cipher};
pub use config::CipherConfig;
pub use engine::CipherEngine;
pub use identifier::{analyze_cipher, AnalysisResult, Suggestion};
pub use kind::{CipherInfo, CipherKind};
pub use presets::{presets, Preset, Presets};
pub use settings::{EngineSettings, SolverSettings};
pub use solver::{solve_caesar, solve_vigenere, CaesarEstimate, VigenereEstimate};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown cipher type: {0}")]
    UnknownCipher(String),

    #[error("Missing cipher type")]
    MissingCipherType,

    #[error("Invalid {cipher} config: {reason}")]
    InvalidConfig { cipher: CipherKind, reason: String },

    #[error("{cipher} ciphertext length mismatch: {found} symbols is not a multiple of {multiple}")]
    LengthMismatch {
        cipher: CipherKind,
        found: usize,
        multiple: usize,
    },

    #[error("Unsupported character {ch:?} for {cipher}")]
    UnsupportedCharacter { cipher: CipherKind, ch: char },

    #[error("Decoding failed: {0}")]
    DecodingFailed(String),

    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    #[error("Layer {layer} ({cipher}) failed: {source}")]
    ChainLayer {
        layer: usize,
        cipher: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn invalid_config(cipher: CipherKind, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            cipher,
            reason: reason.into(),
        }
    }

    pub(crate) fn at_layer(self, layer: usize, cipher: impl Into<String>) -> Self {
        Error::ChainLayer {
            layer,
            cipher: cipher.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
