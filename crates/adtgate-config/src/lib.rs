use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use adtgate_types::PolicySource;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Config directory not found")]
    NoDirFound,
}

/// Top-level adtgate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdtGateConfig {
    /// Where the disabled set comes from at startup.
    #[serde(default)]
    pub policy: PolicySource,
}

/// Resolve the adtgate config directory (~/.adtgate/).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|h| h.join(".adtgate"))
        .ok_or(ConfigError::NoDirFound)
}

/// Resolve the config file path (~/.adtgate/config.json5).
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json5"))
}

/// Load configuration from the default path, falling back to defaults.
pub fn load_config() -> Result<AdtGateConfig, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let path = config_file_path()?;
    load_config_from(&path)
}

/// Load configuration from a specific path, falling back to defaults if not found.
pub fn load_config_from(path: &Path) -> Result<AdtGateConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(AdtGateConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: AdtGateConfig = json5::from_str(&content)?;
    Ok(config)
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Save configuration to the default path.
pub fn save_config(config: &AdtGateConfig) -> Result<(), ConfigError> {
    let dir = ensure_config_dir()?;
    save_config_to(config, &dir.join("config.json5"))
}

/// Save configuration to a specific path.
pub fn save_config_to(config: &AdtGateConfig, path: &Path) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::Io(std::io::Error::other(e)))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdtGateConfig::default();
        assert!(matches!(config.policy, PolicySource::Default));
    }

    #[test]
    fn test_json5_parse_preset() {
        let json5_str = r#"{
            policy: { source: "preset", name: "read-only" },
        }"#;
        let config: AdtGateConfig = json5::from_str(json5_str).unwrap();
        assert!(
            matches!(config.policy, PolicySource::Preset { ref name } if name == "read-only")
        );
    }

    #[test]
    fn test_json5_parse_explicit_with_group() {
        let json5_str = r#"{
            // comments and trailing commas are fine in json5
            policy: {
                source: "explicit",
                disabled: ["deleteObject", "group:debugger"],
            },
        }"#;
        let config: AdtGateConfig = json5::from_str(json5_str).unwrap();
        match config.policy {
            PolicySource::Explicit { disabled } => {
                assert_eq!(disabled, vec!["deleteObject", "group:debugger"]);
            }
            other => panic!("unexpected policy source: {other:?}"),
        }
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: AdtGateConfig = json5::from_str("{}").unwrap();
        assert!(matches!(config.policy, PolicySource::Default));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.json5")).unwrap();
        assert!(matches!(config.policy, PolicySource::Default));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json5");
        let config = AdtGateConfig {
            policy: PolicySource::Explicit {
                disabled: vec!["deleteObject".to_string()],
            },
        };
        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        match loaded.policy {
            PolicySource::Explicit { disabled } => assert_eq!(disabled, vec!["deleteObject"]),
            other => panic!("unexpected policy source: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ policy: ").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Json5(_))
        ));
    }
}
