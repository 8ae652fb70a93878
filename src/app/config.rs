use super::keymap::KeyConfig;
use crate::domain::days::DayConfig;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "mealplan";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from `~/.config/mealplan/config.toml`. Every field is
/// optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub palette: PaletteType,
    pub data_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub ingredients_path: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub days: DayConfig,
    pub keys: KeyConfig,
}

impl AppConfig {
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        home::home_dir().map(|mut path| {
            path.push(".config");
            path.push(APP_NAME);
            path
        })
    }

    /// Loads the user config. A missing file yields the defaults, a malformed
    /// one is an error so the caller can report it.
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Malformed config {}", path.display()))
    }

    /// Directory holding the persisted menu, the log and written mails.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        home::home_dir().map_or_else(
            || PathBuf::from(format!(".{APP_NAME}")),
            |mut path| {
                path.push(".local");
                path.push("share");
                path.push(APP_NAME);
                path
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let config = AppConfig::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.days.day_count(), 6);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
palette = "nord"
data_dir = "/tmp/menus"

[days]
labels = ["Weekday", "Weekend"]
aliases = [["wd", "weekday"], ["we", "weekend"]]

[keys]
profile = "arrows"
"#,
        )?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.palette, PaletteType::Nord);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/menus"));
        assert_eq!(config.days.resolve("WE"), Some(1));
        assert_eq!(config.keys.profile, "arrows");
        assert!(config.catalog_path.is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "palette = [")?;
        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }
}
