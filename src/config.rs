use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

use crate::errors::ConfigError;

const DEFAULT_REGISTRY_NAME: &str = "default";

/// Registry configuration
///
/// ```toml
/// name = "app"
/// collect_stats = true
///
/// [values]
/// greeting = "hello"
/// port = 8080
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Label used in log events
    pub name: String,
    pub collect_stats: bool,
    /// Literal entries, each defined as a value entry holding a `toml::Value`
    pub values: BTreeMap<String, toml::Value>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_REGISTRY_NAME.to_string(),
            collect_stats: true,
            values: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %config.name, "Registry config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.name, "default");
        assert!(config.collect_stats);
    }

    #[test]
    fn test_values_table() {
        let config = RegistryConfig::from_toml_str(
            r#"
            name = "app"
            collect_stats = false

            [values]
            greeting = "hello"
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "app");
        assert!(!config.collect_stats);
        assert_eq!(config.values["greeting"].as_str(), Some("hello"));
        assert_eq!(config.values["port"].as_integer(), Some(8080));
    }

    #[test]
    fn test_invalid_toml() {
        let result = RegistryConfig::from_toml_str("name = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RegistryConfig::load("/nonexistent/registry.toml");
        assert!(matches!(result, Err(ConfigError::FileRead(path, _)) if path.contains("registry.toml")));
    }
}
