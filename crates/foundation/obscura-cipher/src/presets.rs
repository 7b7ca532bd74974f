//! Named configurations for common scenarios

use serde::{Deserialize, Serialize};

use crate::{ChainSpec, CipherConfig};

/// A single cipher or a whole chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Preset {
    Single(CipherConfig),
    Chain(ChainSpec),
}

impl Preset {
    /// Every preset can run as a chain; a single cipher is a one-layer chain
    pub fn as_chain(&self) -> ChainSpec {
        match self {
            Preset::Single(config) => ChainSpec {
                layers: vec![config.clone()],
            },
            Preset::Chain(chain) => chain.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presets {
    pub rot13: Preset,
    pub obscura_key: Preset,
    pub polybius_morse: Preset,
    pub complex_chain: Preset,
}

impl Presets {
    pub const NAMES: [&'static str; 4] = ["rot13", "obscuraKey", "polybiusMorse", "complexChain"];

    /// Look up a preset by its camelCase or snake_case name
    pub fn get(&self, name: &str) -> Option<&Preset> {
        match name {
            "rot13" => Some(&self.rot13),
            "obscuraKey" | "obscura_key" => Some(&self.obscura_key),
            "polybiusMorse" | "polybius_morse" => Some(&self.polybius_morse),
            "complexChain" | "complex_chain" => Some(&self.complex_chain),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Preset)> {
        Self::NAMES
            .into_iter()
            .zip([&self.rot13, &self.obscura_key, &self.polybius_morse, &self.complex_chain])
    }
}

pub fn presets() -> Presets {
    Presets {
        rot13: Preset::Single(CipherConfig::caesar(13)),
        obscura_key: Preset::Single(CipherConfig::vigenere("OBSCURA")),
        polybius_morse: Preset::Chain(ChainSpec {
            layers: vec![CipherConfig::polybius(), CipherConfig::morse()],
        }),
        complex_chain: Preset::Chain(ChainSpec {
            layers: vec![
                CipherConfig::caesar(7),
                CipherConfig::vigenere("CIPHER"),
                CipherConfig::rail_fence(3),
                CipherConfig::Base64,
            ],
        }),
    }
}
