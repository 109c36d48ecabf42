use crate::catalog::Catalog;
use crate::error::{FarmBrainError, Result};
use crate::models::CropRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Crops appended after the built-in table.
    #[serde(default)]
    pub extra_crops: Vec<CropRecord>,
    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Loads the config file. An explicit path must exist; when searching the
    /// standard locations, a missing file falls back to defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(FarmBrainError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::from_file(&config_path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| FarmBrainError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&config_str)?;
        tracing::info!(
            "Loaded config from {} ({} extra crops)",
            path.display(),
            config.extra_crops.len()
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// The built-in catalog extended with this config's extra crops.
    pub fn catalog(&self) -> Catalog {
        Catalog::builtin().extended(self.extra_crops.iter().cloned())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("farmbrain").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FarmBrainError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;
    use std::io::Write;

    const EXTRA_CROPS_YAML: &str = r#"
output: json
extra_crops:
  - name: Dragon Fruit
    season: zaid
    water_requirement: low
    soil_types: [sandy loam, red]
    growth_days: 365
"#;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn extra_crops_extend_catalog() {
        let config = Config::from_yaml(EXTRA_CROPS_YAML).unwrap();
        assert_eq!(config.output, OutputFormat::Json);

        let catalog = config.catalog();
        assert_eq!(catalog.len(), Catalog::builtin().len() + 1);
        let crop = catalog.by_name("dragon fruit").unwrap();
        assert_eq!(crop.season(), Season::Zaid);
        assert!(crop.grows_in("red"));
    }

    #[test]
    fn invalid_extra_crop_rejected() {
        let yaml = r#"
extra_crops:
  - name: Mystery
    season: autumn
    water_requirement: low
    soil_types: [loam]
    growth_days: 30
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, FarmBrainError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML parsing error"));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        assert!(matches!(
            Config::from_yaml("output: [json"),
            Err(FarmBrainError::Yaml(_))
        ));
    }

    #[test]
    fn env_vars_substituted() {
        std::env::set_var("FARMBRAIN_TEST_OUTPUT", "json");
        let config = Config::from_yaml("output: ${FARMBRAIN_TEST_OUTPUT}").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXTRA_CROPS_YAML.as_bytes()).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.extra_crops.len(), 1);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(FarmBrainError::Config(_))
        ));
    }
}
