use super::models::CatalogMeal;
use anyhow::Result;

/// Result of resolving user input against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMatch<'a> {
    Unique(&'a CatalogMeal),
    Ambiguous(usize),
    NotFound,
}

/// Read-only list of known meals, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealCatalog {
    meals: Vec<CatalogMeal>,
}

impl MealCatalog {
    #[must_use]
    pub fn new(meals: Vec<CatalogMeal>) -> Self {
        Self { meals }
    }

    /// Parses a JSON array of `{ "name": ..., "image": ... }` records.
    pub fn from_json(text: &str) -> Result<Self> {
        let meals: Vec<CatalogMeal> = serde_json::from_str(text)?;
        Ok(Self::new(meals))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    #[must_use]
    pub fn meals(&self) -> &[CatalogMeal] {
        &self.meals
    }

    /// Case-sensitive name lookup, used when rebinding persisted names.
    #[must_use]
    pub fn get_exact(&self, name: &str) -> Option<&CatalogMeal> {
        self.meals.iter().find(|m| m.name == name)
    }

    /// Exact case-insensitive match wins, otherwise the substring match must
    /// be unique. Never picks the first of several candidates.
    #[must_use]
    pub fn lookup(&self, query: &str) -> CatalogMatch<'_> {
        let query_lower = query.to_lowercase();

        if let Some(meal) = self
            .meals
            .iter()
            .find(|m| m.name.to_lowercase() == query_lower)
        {
            return CatalogMatch::Unique(meal);
        }

        let partial: Vec<&CatalogMeal> = self
            .meals
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&query_lower))
            .collect();

        match partial.as_slice() {
            [] => CatalogMatch::NotFound,
            [meal] => CatalogMatch::Unique(meal),
            many => CatalogMatch::Ambiguous(many.len()),
        }
    }

    /// Meals whose name contains `fragment` (case-insensitive); all meals when
    /// the fragment is empty.
    pub fn search<'a>(&'a self, fragment: &str) -> impl Iterator<Item = &'a CatalogMeal> + 'a {
        let fragment = fragment.to_lowercase();
        self.meals
            .iter()
            .filter(move |m| fragment.is_empty() || m.name.to_lowercase().contains(&fragment))
    }
}
