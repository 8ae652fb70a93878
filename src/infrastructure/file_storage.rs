use crate::domain::storage::KeyValueStorage;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Stores each key as `<root>/<key>.json`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys become file names in a flat directory
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            bail!("Invalid storage key: {key:?}");
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;

        // Readers only ever see a complete entry
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn location(&self, key: &str) -> Option<PathBuf> {
        self.path_for(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let storage = FileStorage::new(temp_dir.path());
        assert_eq!(storage.get("weeklyMenu")?, None);
        Ok(())
    }

    #[test]
    fn test_set_then_get() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let storage = FileStorage::new(temp_dir.path().join("nested"));
        storage.set("weeklyMenu", "[[\"a\",\"\"]]")?;
        assert_eq!(storage.get("weeklyMenu")?.as_deref(), Some("[[\"a\",\"\"]]"));
        assert_eq!(
            storage.location("weeklyMenu"),
            Some(temp_dir.path().join("nested").join("weeklyMenu.json"))
        );
        Ok(())
    }

    #[test]
    fn test_rejects_path_like_keys() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let storage = FileStorage::new(temp_dir.path());
        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.get("a/b").is_err());
        assert_eq!(storage.location(""), None);
        Ok(())
    }
}
