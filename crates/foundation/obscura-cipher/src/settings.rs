//! Engine tuning knobs
//!
//! Loaded from the `engine` and `solver` sections of the config file.

use serde::{Deserialize, Serialize};

use crate::analysis::ENGLISH_IC;

/// Chain processing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Chains longer than this validate with a warning
    pub max_recommended_layers: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_recommended_layers: 5,
        }
    }
}

/// Vigenère estimator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Longest key length the search will try
    pub max_key_length: usize,
    /// Index of Coincidence the key-length search aims for
    pub target_ic: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_key_length: 20,
            target_ic: ENGLISH_IC,
        }
    }
}
