//! Cipher engine
//!
//! Registry facade over the cipher, chain and cryptanalysis modules. The
//! engine holds only settings, so one instance can be shared freely.

use serde_json::Value;

use crate::chain::{self, ChainSpec, ChainValidation, DecryptedChain, EncryptedChain};
use crate::ciphers::{self, Cipher};
use crate::identifier::{self, AnalysisResult};
use crate::presets::{self, Presets};
use crate::solver::{self, CaesarEstimate, VigenereEstimate};
use crate::{CipherConfig, CipherInfo, CipherKind, EngineSettings, Result, SolverSettings};

#[derive(Debug, Clone, Default)]
pub struct CipherEngine {
    settings: EngineSettings,
    solver: SolverSettings,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings, solver: SolverSettings) -> Self {
        Self { settings, solver }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn solver_settings(&self) -> &SolverSettings {
        &self.solver
    }

    /// `[{type, name, description}]` in registry order
    pub fn available_ciphers(&self) -> Vec<CipherInfo> {
        CipherKind::ALL.iter().map(CipherKind::info).collect()
    }

    /// Build a validated instance from a type name and JSON config
    pub fn create(&self, cipher_type: &str, config: &Value) -> Result<Box<dyn Cipher>> {
        ciphers::build(&CipherConfig::from_parts(cipher_type, config)?)
    }

    pub fn encrypt(&self, plaintext: &str, cipher_type: &str, config: &Value) -> Result<String> {
        self.create(cipher_type, config)?.encrypt(plaintext)
    }

    pub fn decrypt(&self, ciphertext: &str, cipher_type: &str, config: &Value) -> Result<String> {
        self.create(cipher_type, config)?.decrypt(ciphertext)
    }

    pub fn encrypt_chain(&self, plaintext: &str, chain: &ChainSpec) -> Result<EncryptedChain> {
        chain::encrypt_chain(plaintext, chain)
    }

    pub fn decrypt_chain(&self, ciphertext: &str, chain: &ChainSpec) -> Result<DecryptedChain> {
        chain::decrypt_chain(ciphertext, chain)
    }

    pub fn validate_chain(&self, chain: &Value) -> ChainValidation {
        chain::validate_chain(chain, self.settings.max_recommended_layers)
    }

    pub fn analyze(&self, ciphertext: &str) -> AnalysisResult {
        identifier::analyze_cipher(ciphertext)
    }

    pub fn solve_vigenere(&self, ciphertext: &str) -> Option<VigenereEstimate> {
        solver::solve_vigenere_with(ciphertext, &self.solver)
    }

    pub fn solve_caesar(&self, ciphertext: &str) -> Option<CaesarEstimate> {
        solver::solve_caesar(ciphertext)
    }

    pub fn presets(&self) -> Presets {
        presets::presets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_available_ciphers() {
        let ciphers = CipherEngine::new().available_ciphers();
        assert_eq!(ciphers.len(), 8);
        assert_eq!(ciphers[0].kind, CipherKind::Caesar);

        let value = serde_json::to_value(&ciphers[6]).unwrap();
        assert_eq!(value["type"], "railfence");
        assert_eq!(value["name"], "Rail Fence Cipher");
    }

    #[test]
    fn test_encrypt_decrypt() {
        let engine = CipherEngine::new();
        let config = json!({"key": "LEMON"});
        let ciphertext = engine.encrypt("Attack at Dawn", "vigenere", &config).unwrap();
        assert_eq!(ciphertext, "Lxfopv ef Rnhr");
        assert_eq!(engine.decrypt(&ciphertext, "vigenere", &config).unwrap(), "Attack at Dawn");
    }

    #[test]
    fn test_unknown_cipher_names_the_type() {
        match CipherEngine::new().encrypt("x", "enigma", &Value::Null) {
            Err(Error::UnknownCipher(name)) => assert_eq!(name, "enigma"),
            other => panic!("expected UnknownCipher, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_fails_before_transform() {
        let engine = CipherEngine::new();
        assert!(matches!(
            engine.create("caesar", &json!({"shift": 26})),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            engine.create("railfence", &json!({"rails": 1})),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_warning_threshold_from_settings() {
        let engine = CipherEngine::with_settings(
            EngineSettings {
                max_recommended_layers: 1,
            },
            SolverSettings::default(),
        );
        let report = engine.validate_chain(&json!([{"type": "atbash"}, {"type": "atbash"}]));
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
    }
}
