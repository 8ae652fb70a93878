use crate::domain::{
    ingredients::IngredientTable,
    models::{CatalogMeal, MenuGrid},
    storage::TemplateSource,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

pub const FRENCH_PLACEHOLDER: &str = "{français}";
pub const ENGLISH_PLACEHOLDER: &str = "{anglais}";

/// Catalog meals of the week, first occurrence wins. Free text is skipped.
#[must_use]
pub fn unique_catalog_meals(grid: &MenuGrid) -> Vec<&CatalogMeal> {
    let mut seen = HashSet::new();
    grid.entries()
        .filter_map(|entry| entry.as_catalog())
        .filter(|meal| !meal.name.is_empty())
        .filter(|meal| seen.insert(meal.name.clone()))
        .collect()
}

/// Fills the two language placeholders of `template` with one line per meal.
#[must_use]
pub fn render_mail(grid: &MenuGrid, ingredients: &IngredientTable, template: &str) -> String {
    let rows: Vec<_> = unique_catalog_meals(grid)
        .into_iter()
        .map(|meal| ingredients.find(&meal.name))
        .filter(|row| !row.is_placeholder())
        .collect();

    let french: String = rows
        .iter()
        .map(|row| format!("- {}: {}\n", row.name, row.french))
        .collect();
    let english: String = rows
        .iter()
        .map(|row| format!("- {}: {}\n", row.name, row.english))
        .collect();

    template
        .replacen(FRENCH_PLACEHOLDER, french.trim(), 1)
        .replacen(ENGLISH_PLACEHOLDER, english.trim(), 1)
}

/// Builds the weekly mail from the menu and a template fetched on demand.
#[derive(Clone)]
pub struct MailGenerator {
    ingredients: Arc<IngredientTable>,
    templates: Arc<dyn TemplateSource>,
}

impl MailGenerator {
    pub fn new(ingredients: Arc<IngredientTable>, templates: Arc<dyn TemplateSource>) -> Self {
        Self {
            ingredients,
            templates,
        }
    }

    /// A template that cannot be fetched is treated as empty.
    pub async fn generate(&self, grid: &MenuGrid) -> String {
        let template = match self.templates.fetch().await {
            Ok(template) => template,
            Err(e) => {
                warn!(error = %e, "Mail template unavailable, using an empty one");
                String::new()
            }
        };

        let mail = render_mail(grid, &self.ingredients, &template);
        debug!(bytes = mail.len(), "Mail generated");
        mail
    }
}
