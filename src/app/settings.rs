use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::Result;
use super::theme::ThemePreference;

fn default_window_width() -> i32 {
    1024
}

fn default_window_height() -> i32 {
    768
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Committed theme preference. Absent until the first launch resolves
    /// one, after which it always round-trips through the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or fall back to defaults. Never fails:
    /// a blocked or corrupt settings file only costs persistence.
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &PathBuf) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("luzdevida");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, None);
        assert_eq!(settings.window_width, 1024);
        assert_eq!(settings.window_height, 768);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme: Some(ThemePreference::Dark),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_theme_stored_under_theme_key() {
        let settings = AppSettings {
            theme: Some(ThemePreference::Dark),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"theme\":\"dark\""));
    }

    #[test]
    fn test_unset_theme_is_omitted() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(!json.contains("theme"));
    }

    #[test]
    fn test_partial_config() {
        // Old config missing newer fields
        let json = r#"{"theme": "light"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, Some(ThemePreference::Light));
        assert_eq!(settings.window_width, 1024); // Should use default
    }

    #[test]
    fn test_saved_theme_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            theme: Some(ThemePreference::Dark),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        // Fresh load, as on the next launch.
        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("settings.json");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("luzdevida").join("settings.json");
        AppSettings::default().save_to(&path).unwrap();
        assert!(path.exists());
    }
}
