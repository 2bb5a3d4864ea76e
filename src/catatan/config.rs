use crate::error::Result;
use crate::model::{DEFAULT_MAX_BODY_CHARS, DEFAULT_MAX_TITLE_CHARS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NOTIFICATION_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a `theme` attribute value; anything but `dark` is light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Session settings, read from `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Longest title the creator form accepts
    #[serde(default = "default_max_title")]
    pub max_title_length: usize,

    /// Longest body the creator form accepts
    #[serde(default = "default_max_body")]
    pub max_body_length: usize,

    /// Seconds before the "saved" popup dismisses itself
    #[serde(default = "default_notification_secs")]
    pub notification_timeout_secs: u64,

    #[serde(default)]
    pub theme: Theme,
}

fn default_max_title() -> usize {
    DEFAULT_MAX_TITLE_CHARS
}

fn default_max_body() -> usize {
    DEFAULT_MAX_BODY_CHARS
}

fn default_notification_secs() -> u64 {
    DEFAULT_NOTIFICATION_SECS
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_CHARS,
            max_body_length: DEFAULT_MAX_BODY_CHARS,
            notification_timeout_secs: DEFAULT_NOTIFICATION_SECS,
            theme: Theme::Light,
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotesConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotesConfig::default();
        assert_eq!(config.max_title_length, 50);
        assert_eq!(config.max_body_length, 1000);
        assert_eq!(config.notification_timeout(), Duration::from_secs(5));
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = NotesConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, NotesConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = NotesConfig {
            max_title_length: 20,
            theme: Theme::Dark,
            ..NotesConfig::default()
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = NotesConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"max_body_length": 200}"#,
        )
        .unwrap();

        let loaded = NotesConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.max_body_length, 200);
        assert_eq!(loaded.max_title_length, 50);
        assert_eq!(loaded.notification_timeout_secs, 5);
    }

    #[test]
    fn test_theme_attribute() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("neon")), Theme::Light);
        assert_eq!(Theme::from_attribute(None), Theme::Light);
    }
}
