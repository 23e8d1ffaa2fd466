//! Configuration management for model-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `MODEL_SCAFFOLD_` prefix, `__` for nesting)
//! 2. `./model-scaffold.toml`
//! 3. `~/.config/model-scaffold/config.toml` (user config, XDG)
//! 4. `/etc/model-scaffold/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Command-line flags are applied on top of whatever this resolves to.
//!
//! # Example Configuration
//!
//! ```toml
//! [templates]
//! dir = "/opt/scaffold-templates"
//!
//! [defaults]
//! base_docker_image = "python:3.9-slim"
//! k8s_namespace = "models"
//!
//! [logging]
//! json = false
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::templates::TemplateSource;

const APP_NAME: &str = "model-scaffold";
const ENV_PREFIX: &str = "MODEL_SCAFFOLD_";

/// Template lookup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory holding templates; built-in templates are used when unset
    pub dir: Option<PathBuf>,
}

impl TemplateSettings {
    /// Template source described by these settings
    #[must_use]
    pub fn source(&self) -> TemplateSource {
        self.dir
            .as_ref()
            .map_or(TemplateSource::Embedded, |dir| {
                TemplateSource::Directory(dir.clone())
            })
    }
}

/// Fallback values for command-line flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Used when `--base-docker-image` is omitted
    pub base_docker_image: Option<String>,

    /// Used when `--target-docker-image` is omitted
    pub target_docker_image: Option<String>,

    /// Used when `--k8s-resource-name` is omitted
    pub k8s_resource_name: Option<String>,

    /// Used when `--k8s-namespace` is omitted
    pub k8s_namespace: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

/// Complete model-scaffold configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Template lookup
    pub templates: TemplateSettings,

    /// Flag fallbacks
    pub defaults: DefaultSettings,

    /// Logging
    pub logging: LoggingSettings,
}

impl ScaffoldConfig {
    /// Load configuration from the standard search path
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&Self::default_toml()?));

        // 4. System config
        let system_config = PathBuf::from("/etc").join(APP_NAME).join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from(format!("./{APP_NAME}.toml"));
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables (highest priority, double underscore for nesting)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if:
    /// - The file does not exist
    /// - The file contains invalid TOML syntax
    /// - Configuration values fail type conversion
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScaffoldError::from(figment::Error::from(format!(
                "Configuration file not found: {}",
                path.display()
            ))));
        }

        let config = Figment::new()
            .merge(Toml::string(&Self::default_toml()?))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    fn default_toml() -> Result<String> {
        toml::to_string(&Self::default())
            .map_err(|e| ScaffoldError::from(figment::Error::from(e.to_string())))
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `~/.config/model-scaffold/config.toml` on Linux.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(format!("./{APP_NAME}.toml")),
            |config_dir| config_dir.join(APP_NAME).join("config.toml"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ScaffoldConfig::default();
        assert!(config.templates.dir.is_none());
        assert!(config.defaults.base_docker_image.is_none());
        assert!(config.defaults.k8s_namespace.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_default_template_source_is_embedded() {
        let settings = TemplateSettings::default();
        assert_eq!(settings.source(), TemplateSource::Embedded);

        let settings = TemplateSettings {
            dir: Some(PathBuf::from("/opt/templates")),
        };
        assert_eq!(
            settings.source(),
            TemplateSource::Directory(PathBuf::from("/opt/templates"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scaffold.toml");
        fs::write(
            &path,
            r#"
[templates]
dir = "/srv/templates"

[defaults]
base_docker_image = "python:3.9-slim"
k8s_namespace = "models"

[logging]
json = true
"#,
        )
        .unwrap();

        let config = ScaffoldConfig::load_from(&path).unwrap();
        assert_eq!(config.templates.dir, Some(PathBuf::from("/srv/templates")));
        assert_eq!(
            config.defaults.base_docker_image.as_deref(),
            Some("python:3.9-slim")
        );
        assert_eq!(config.defaults.k8s_namespace.as_deref(), Some("models"));
        assert!(config.defaults.target_docker_image.is_none());
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scaffold.toml");
        fs::write(&path, "[logging]\njson = true\n").unwrap();

        let config = ScaffoldConfig::load_from(&path).unwrap();
        assert!(config.logging.json);
        assert!(config.templates.dir.is_none());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = ScaffoldConfig::load_from(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_from_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scaffold.toml");
        fs::write(&path, "[logging\njson = ").unwrap();

        let err = ScaffoldConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_load_from_wrong_type_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scaffold.toml");
        fs::write(&path, "[logging]\njson = \"maybe\"\n").unwrap();

        let err = ScaffoldConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
    }

    #[test]
    fn test_recommended_path() {
        let path = ScaffoldConfig::recommended_path();
        assert!(path.to_string_lossy().contains("model-scaffold"));
    }
}
