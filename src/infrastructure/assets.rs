use super::defaults::{DEFAULT_INGREDIENTS, DEFAULT_MAIL_TEMPLATE, DEFAULT_MEAL_CATALOG};
use crate::domain::{catalog::MealCatalog, ingredients::IngredientTable, storage::TemplateSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub fn load_catalog(path: Option<&Path>) -> Result<MealCatalog> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read meal catalog {}", path.display()))?;
            MealCatalog::from_json(&text)
                .with_context(|| format!("Malformed meal catalog {}", path.display()))
        }
        None => MealCatalog::from_json(DEFAULT_MEAL_CATALOG),
    }
}

pub fn load_ingredients(path: Option<&Path>) -> Result<IngredientTable> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read ingredient table {}", path.display()))?;
            IngredientTable::from_json(&text)
                .with_context(|| format!("Malformed ingredient table {}", path.display()))
        }
        None => IngredientTable::from_json(DEFAULT_INGREDIENTS),
    }
}

/// Reads the mail template from disk, or serves the bundled one.
pub struct FileTemplateSource {
    path: Option<PathBuf>,
}

impl FileTemplateSource {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn bundled() -> Self {
        Self { path: None }
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn fetch(&self) -> Result<String> {
        match &self.path {
            Some(path) => Ok(tokio::fs::read_to_string(path).await?),
            None => Ok(DEFAULT_MAIL_TEMPLATE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_assets_parse() -> Result<()> {
        let catalog = load_catalog(None)?;
        assert!(!catalog.is_empty());
        assert!(catalog.get_exact("Jambon Beurre").is_some());

        let ingredients = load_ingredients(None)?;
        assert!(!ingredients.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let result = load_catalog(Some(Path::new("/definitely/not/here.json")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_template_from_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("mail.txt");
        std::fs::write(&path, "Hi {français}")?;

        let source = FileTemplateSource::new(Some(path));
        assert_eq!(source.fetch().await?, "Hi {français}");

        let bundled = FileTemplateSource::bundled().fetch().await?;
        assert!(bundled.contains("{anglais}"));
        Ok(())
    }

    #[tokio::test]
    async fn test_template_missing_file_errors() {
        let source = FileTemplateSource::new(Some(PathBuf::from("/definitely/not/here.txt")));
        assert!(source.fetch().await.is_err());
    }
}
