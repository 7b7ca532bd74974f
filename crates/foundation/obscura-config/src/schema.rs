//! Config file layout

use std::fmt;

use obscura_cipher::{EngineSettings, SolverSettings};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

pub const ENV_LOG_LEVEL: &str = "OBSCURA_LOG_LEVEL";
pub const ENV_MAX_LAYERS: &str = "OBSCURA_MAX_LAYERS";
pub const ENV_MAX_KEY_LENGTH: &str = "OBSCURA_MAX_KEY_LENGTH";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObscuraConfig {
    pub engine: EngineSettings,
    pub solver: SolverSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, `RUST_LOG` wins when set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// An environment override that was present but could not be applied
#[derive(Debug, Clone, PartialEq)]
pub struct IgnoredOverride {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for IgnoredOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}: {}", self.var, self.value, self.reason)
    }
}

impl ObscuraConfig {
    pub fn validate(&self) -> Result<()> {
        if self.engine.max_recommended_layers == 0 {
            return Err(ConfigError::Invalid {
                field: "engine.max_recommended_layers",
                reason: "must be at least 1".into(),
            });
        }
        if self.solver.max_key_length == 0 {
            return Err(ConfigError::Invalid {
                field: "solver.max_key_length",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.solver.target_ic > 0.0 && self.solver.target_ic < 1.0) {
            return Err(ConfigError::Invalid {
                field: "solver.target_ic",
                reason: format!("must be between 0 and 1, got {}", self.solver.target_ic),
            });
        }
        Ok(())
    }

    /// Apply `OBSCURA_*` variables from the process environment
    pub fn apply_env_overrides(&mut self) -> Vec<IgnoredOverride> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// Unparsable numbers leave the current value in place and are returned
    /// for the caller to report once logging is up.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<IgnoredOverride>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(n) = parse_override(&lookup, ENV_MAX_LAYERS, &mut ignored) {
            self.engine.max_recommended_layers = n;
        }
        if let Some(n) = parse_override(&lookup, ENV_MAX_KEY_LENGTH, &mut ignored) {
            self.solver.max_key_length = n;
        }
        ignored
    }
}

fn parse_override<F>(lookup: &F, var: &'static str, ignored: &mut Vec<IgnoredOverride>) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var)?;
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            ignored.push(IgnoredOverride {
                var,
                value,
                reason: e.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ObscuraConfig::default();
        assert_eq!(config.engine.max_recommended_layers, 5);
        assert_eq!(config.solver.max_key_length, 20);
        assert_eq!(config.solver.target_ic, 0.067);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ObscuraConfig = serde_yaml::from_str("solver:\n  max_key_length: 8\n").unwrap();
        assert_eq!(config.solver.max_key_length, 8);
        assert_eq!(config.solver.target_ic, 0.067);
        assert_eq!(config.engine.max_recommended_layers, 5);
    }

    #[test]
    fn test_validate() {
        let mut config = ObscuraConfig::default();
        config.solver.max_key_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "solver.max_key_length", .. })
        ));

        let mut config = ObscuraConfig::default();
        config.solver.target_ic = 1.5;
        assert!(config.validate().is_err());

        let mut config = ObscuraConfig::default();
        config.engine.max_recommended_layers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = ObscuraConfig::default();
        let ignored = config.apply_overrides(|name| match name {
            ENV_LOG_LEVEL => Some("debug".to_string()),
            ENV_MAX_LAYERS => Some("8".to_string()),
            ENV_MAX_KEY_LENGTH => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.engine.max_recommended_layers, 8);
        assert_eq!(config.solver.max_key_length, 20);

        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].var, ENV_MAX_KEY_LENGTH);
        assert_eq!(ignored[0].value, "lots");
        assert!(ignored[0].to_string().starts_with("OBSCURA_MAX_KEY_LENGTH=\"lots\": "));
    }

    #[test]
    fn test_valid_overrides_report_nothing() {
        let mut config = ObscuraConfig::default();
        let ignored = config.apply_overrides(|name| match name {
            ENV_MAX_KEY_LENGTH => Some(" 12 ".to_string()),
            _ => None,
        });
        assert!(ignored.is_empty());
        assert_eq!(config.solver.max_key_length, 12);
    }
}
