// File: src/config.rs
// Purpose: Form rule configuration parsed from restro-forms.toml

use anyhow::{Context, Result};
use restro_forms_validation::DobRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "restro-forms.toml";

/// Tunable parameters of the built-in forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub date_of_birth: DobRule,

    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub login: LoginConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

/// Registration password bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,

    #[serde(default)]
    pub max_length: Option<usize>,
}

/// Login form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Shorter than registration so legacy demo accounts can still sign in
    #[serde(default = "default_login_password_min_length")]
    pub password_min_length: usize,
}

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_message_min_length")]
    pub message_min_length: usize,

    #[serde(default = "default_message_max_length")]
    pub message_max_length: usize,
}

fn default_password_min_length() -> usize {
    8
}

fn default_login_password_min_length() -> usize {
    6
}

fn default_message_min_length() -> usize {
    10
}

fn default_message_max_length() -> usize {
    1000
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
            max_length: None,
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_login_password_min_length(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            message_min_length: default_message_min_length(),
            message_max_length: default_message_max_length(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::info!("Loaded form configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the default path (./restro-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormsConfig::default();
        assert_eq!(config.date_of_birth.min_age_years, 18);
        assert_eq!(config.date_of_birth.min_year, 1900);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.max_length, None);
        assert_eq!(config.login.password_min_length, 6);
        assert_eq!(config.contact.message_max_length, 1000);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<FormsConfig>("").unwrap_or_default();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [date_of_birth]
            min_age_years = 21

            [password]
            max_length = 64
        "#;
        let config: FormsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.date_of_birth.min_age_years, 21);
        assert_eq!(config.date_of_birth.min_year, 1900);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.password.max_length, Some(64));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FormsConfig::load("definitely/not/here/restro-forms.toml").unwrap();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("restro-forms-{}.toml", std::process::id()));
        fs::write(&path, "[login]\npassword_min_length = 4\n").unwrap();
        let config = FormsConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.login.password_min_length, 4);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let path = std::env::temp_dir().join(format!("restro-forms-bad-{}.toml", std::process::id()));
        fs::write(&path, "[login\n").unwrap();
        let err = FormsConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
