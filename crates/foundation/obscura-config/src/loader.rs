use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::IgnoredOverride;
use crate::{ConfigError, ObscuraConfig, Result};

/// Standard config file names, checked in order
const CONFIG_FILENAMES: &[&str] = &["obscura.yaml", "obscura.yml", "obscura.json"];

/// Load and validate a config file; env overrides are not applied
pub fn load_from(path: &Path) -> Result<ObscuraConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let config: ObscuraConfig = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&raw)?,
        "json" => serde_json::from_str(&raw)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    config.validate()?;
    Ok(config)
}

/// User-global config directory (`~/.config/obscura/` on Linux)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("obscura"))
}

/// First config file in `dir`, by `CONFIG_FILENAMES` order
fn find_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Project-local first, then user-global
pub fn find_config_file() -> Option<PathBuf> {
    find_in(Path::new(".")).or_else(|| config_dir().and_then(|dir| find_in(&dir)))
}

/// Outcome of loading, kept until a subscriber exists to report it
#[derive(Debug)]
pub struct LoadReport {
    /// Config with env overrides applied, not yet validated
    pub config: ObscuraConfig,
    /// File that was read, if any
    pub source: Option<PathBuf>,
    /// Why `source` was discarded in favor of defaults
    pub fallback: Option<ConfigError>,
    pub ignored: Vec<IgnoredOverride>,
}

impl LoadReport {
    pub fn log_diagnostics(&self) {
        match (&self.source, &self.fallback) {
            (Some(path), Some(e)) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults")
            }
            (Some(path), None) => debug!(path = %path.display(), "loaded config"),
            (None, _) => debug!("no config file found, using defaults"),
        }
        for o in &self.ignored {
            warn!(var = o.var, value = %o.value, reason = %o.reason, "ignoring invalid override");
        }
    }
}

/// Discover, load and apply env overrides.
///
/// Falls back to defaults when no file exists or the file found is broken;
/// the error is kept in [`LoadReport::fallback`].
pub fn discover_and_load() -> LoadReport {
    resolve(find_config_file(), |name| std::env::var(name).ok())
}

/// Load a file the user named; unlike discovery, a broken file is an error
pub fn load_explicit(path: &Path) -> Result<LoadReport> {
    let mut config = load_from(path)?;
    let ignored = config.apply_env_overrides();
    Ok(LoadReport {
        config,
        source: Some(path.to_path_buf()),
        fallback: None,
        ignored,
    })
}

fn resolve<F>(found: Option<PathBuf>, lookup: F) -> LoadReport
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, fallback) = match &found {
        Some(path) => match load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (ObscuraConfig::default(), Some(e)),
        },
        None => (ObscuraConfig::default(), None),
    };

    let ignored = config.apply_overrides(lookup);
    LoadReport {
        config,
        source: found,
        fallback,
        ignored,
    }
}
