//! Application configuration
//!
//! Configuration is assembled in layers: built-in defaults, then a TOML
//! file, then `DEVDOCK_*` environment variables. The binary applies its
//! command-line flags last. Missing profile values are simply not shown.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result, ResultExt};
use crate::metadata::MetadataOverride;

/// Environment variable names for the profile fields
pub const ENV_AUTHOR_NAME: &str = "DEVDOCK_AUTHOR_NAME";
pub const ENV_CONTACT_EMAIL: &str = "DEVDOCK_CONTACT_EMAIL";
pub const ENV_GITHUB_URL: &str = "DEVDOCK_GITHUB_URL";
pub const ENV_PROJECT_NAME: &str = "DEVDOCK_PROJECT_NAME";
pub const ENV_THEME: &str = "DEVDOCK_THEME";

/// Preferred colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(Error::invalid_config(format!("unknown theme '{other}'"))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub author_name: Option<String>,
    pub contact_email: Option<String>,
    pub github_url: Option<String>,
    pub project_name: Option<String>,
    pub theme: ThemeMode,
    /// Per-panel metadata overrides keyed by menu key
    pub panels: BTreeMap<String, MetadataOverride>,
}

impl AppConfig {
    /// Parse configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::invalid_config(e.message().to_string()))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source).with_context(|| format!("reading {}", path.display()))
    }

    /// Default location: `<config dir>/devdock/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devdock").join("config.toml"))
    }

    /// Load the file layer
    ///
    /// An explicit path must exist. The default path is optional and a
    /// missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "Loading configuration");
            return Self::load_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "Loading configuration");
                Self::load_file(&path)
            }
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply environment overrides through `lookup`; empty values are ignored
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_AUTHOR_NAME) {
            self.author_name = Some(v);
        }
        if let Some(v) = get(ENV_CONTACT_EMAIL) {
            self.contact_email = Some(v);
        }
        if let Some(v) = get(ENV_GITHUB_URL) {
            self.github_url = Some(v);
        }
        if let Some(v) = get(ENV_PROJECT_NAME) {
            self.project_name = Some(v);
        }
        if let Some(v) = get(ENV_THEME) {
            self.theme = v.parse().context(ENV_THEME)?;
        }
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn apply_process_env(&mut self) -> Result<()> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    pub fn author_name(&self) -> Option<&str> {
        non_empty(&self.author_name)
    }

    pub fn contact_email(&self) -> Option<&str> {
        non_empty(&self.contact_email)
    }

    pub fn github_url(&self) -> Option<&str> {
        non_empty(&self.github_url)
    }

    pub fn project_name(&self) -> Option<&str> {
        non_empty(&self.project_name)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.author_name().is_none());
        assert!(config.panels.is_empty());
    }

    #[test]
    fn test_parse_with_panel_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            project_name = "DevDock"
            theme = "light"

            [panels.fileviewer]
            hidden = true

            [panels.devtools]
            order = 10
            title = "Tools"
            "#,
        )
        .unwrap();

        assert_eq!(config.project_name(), Some("DevDock"));
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.panels["fileviewer"].hidden, Some(true));
        assert_eq!(config.panels["devtools"].order, Some(10));
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("theme = \"purple\"").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_env_layer_overrides_file() {
        let mut config = AppConfig::from_toml_str("author_name = \"File Author\"").unwrap();
        let env: HashMap<&str, &str> = [
            (ENV_AUTHOR_NAME, "Env Author"),
            (ENV_CONTACT_EMAIL, "   "),
            (ENV_THEME, "light"),
        ]
        .into_iter()
        .collect();

        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.author_name(), Some("Env Author"));
        assert!(config.contact_email().is_none());
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_env_rejects_unknown_theme() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(|key| (key == ENV_THEME).then(|| "neon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_THEME));
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let config = AppConfig {
            github_url: Some(String::new()),
            ..Default::default()
        };
        assert!(config.github_url().is_none());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contact_email = \"me@example.com\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.contact_email(), Some("me@example.com"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.is_not_found());
    }
}
