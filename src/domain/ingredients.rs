use anyhow::Result;
use unicode_normalization::UnicodeNormalization;

/// One line of the ingredient table: the meal name and its description in
/// French and English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    pub french: String,
    pub english: String,
}

impl IngredientRow {
    pub fn new(
        name: impl Into<String>,
        french: impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            french: french.into(),
            english: english.into(),
        }
    }

    fn pizza() -> Self {
        Self::new("Pizza", "Pizza", "Pizza")
    }

    fn not_found(meal: &str) -> Self {
        Self::new(format!("Not found:{meal}"), "", "")
    }

    /// Pizza rows carry no ingredients and are left out of the mail.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.name == "Pizza"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientTable {
    rows: Vec<IngredientRow>,
}

impl IngredientTable {
    #[must_use]
    pub fn new(rows: Vec<IngredientRow>) -> Self {
        Self { rows }
    }

    /// Parses a JSON array of `[name, french, english]` string arrays. Short
    /// rows are padded with empty strings.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Vec<Vec<String>> = serde_json::from_str(text)?;
        let rows = raw
            .into_iter()
            .map(|mut cols| {
                cols.resize(3, String::new());
                let mut cols = cols.into_iter();
                IngredientRow::new(
                    cols.next().unwrap_or_default(),
                    cols.next().unwrap_or_default(),
                    cols.next().unwrap_or_default(),
                )
            })
            .collect();
        Ok(Self::new(rows))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose folded name contains the folded meal name.
    #[must_use]
    pub fn find(&self, meal: &str) -> IngredientRow {
        if meal.to_lowercase() == "pizza" {
            return IngredientRow::pizza();
        }

        let needle = fold(meal);
        self.rows
            .iter()
            .find(|row| fold(&row.name).contains(&needle))
            .cloned()
            .unwrap_or_else(|| IngredientRow::not_found(meal))
    }
}

/// Lowercases and strips combining diacritical marks (U+0300..U+036F).
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
}
