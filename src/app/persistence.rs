use super::config::AppConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecentCommands {
    pub commands: Vec<String>,
}

#[must_use]
pub fn history_path() -> Option<PathBuf> {
    AppConfig::config_dir().map(|mut path| {
        path.push("recent_commands.toml");
        path
    })
}

#[must_use]
pub fn load_recent_commands(path: &Path) -> Vec<String> {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(recent) = toml::from_str::<RecentCommands>(&content) {
                return recent.commands;
            }
        }
    }
    Vec::new()
}

pub fn save_recent_commands(path: &Path, commands: &[String]) {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let recent = RecentCommands {
        commands: commands.to_vec(),
    };

    match toml::to_string(&recent) {
        Ok(content) => {
            if let Err(e) = std::fs::write(path, content) {
                warn!(error = %e, path = %path.display(), "Failed to save command history");
            }
        }
        Err(e) => warn!(error = %e, "Failed to serialize command history"),
    }
}
