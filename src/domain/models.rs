use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    #[default]
    Upper,
    Lower,
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::Upper, Zone::Lower];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Zone::Upper => "upper",
            Zone::Lower => "lower",
        }
    }

    /// Single-letter token used in the command language.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Zone::Upper => "u",
            Zone::Lower => "l",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "u" => Some(Zone::Upper),
            "l" => Some(Zone::Lower),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A meal known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMeal {
    pub name: String,
    #[serde(rename = "image", default)]
    pub image_ref: String,
}

impl CatalogMeal {
    pub fn new(name: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Content of one slot: either a catalog meal or arbitrary user text.
///
/// An unset slot is the free-text entry with an empty label, see
/// [`MealEntry::empty`] and [`MealEntry::is_unset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealEntry {
    Catalog(CatalogMeal),
    FreeText { label: String },
}

impl MealEntry {
    #[must_use]
    pub fn empty() -> Self {
        MealEntry::FreeText {
            label: String::new(),
        }
    }

    pub fn free_text(label: impl Into<String>) -> Self {
        MealEntry::FreeText {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MealEntry::Catalog(meal) => &meal.name,
            MealEntry::FreeText { label } => label,
        }
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        match self {
            MealEntry::Catalog(meal) => &meal.image_ref,
            MealEntry::FreeText { .. } => "",
        }
    }

    #[must_use]
    pub fn is_free_text(&self) -> bool {
        matches!(self, MealEntry::FreeText { .. })
    }

    /// True for the empty free-text entry, the "unconfigured" slot state.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, MealEntry::FreeText { label } if label.is_empty())
    }

    #[must_use]
    pub fn as_catalog(&self) -> Option<&CatalogMeal> {
        match self {
            MealEntry::Catalog(meal) => Some(meal),
            MealEntry::FreeText { .. } => None,
        }
    }
}

impl Default for MealEntry {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayMenu {
    pub upper: MealEntry,
    pub lower: MealEntry,
}

impl DayMenu {
    #[must_use]
    pub fn slot(&self, zone: Zone) -> &MealEntry {
        match zone {
            Zone::Upper => &self.upper,
            Zone::Lower => &self.lower,
        }
    }

    fn slot_mut(&mut self, zone: Zone) -> &mut MealEntry {
        match zone {
            Zone::Upper => &mut self.upper,
            Zone::Lower => &mut self.lower,
        }
    }

    /// The lower zone may only be written once the upper zone holds something.
    #[must_use]
    pub fn accepts_lower(&self) -> bool {
        !self.upper.is_unset()
    }
}

/// Persisted shape: one `[upper, lower]` name pair per day.
pub type StoredMenu = Vec<[String; 2]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGrid {
    days: Vec<DayMenu>,
}

impl MenuGrid {
    #[must_use]
    pub fn empty(day_count: usize) -> Self {
        Self {
            days: vec![DayMenu::default(); day_count],
        }
    }

    #[must_use]
    pub fn from_days(days: Vec<DayMenu>) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn days(&self) -> &[DayMenu] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, index: usize) -> Option<&DayMenu> {
        self.days.get(index)
    }

    #[must_use]
    pub fn slot(&self, day: usize, zone: Zone) -> Option<&MealEntry> {
        self.days.get(day).map(|d| d.slot(zone))
    }

    /// Returns false when `day` is out of range.
    pub(crate) fn set_slot(&mut self, day: usize, zone: Zone, entry: MealEntry) -> bool {
        match self.days.get_mut(day) {
            Some(d) => {
                *d.slot_mut(zone) = entry;
                true
            }
            None => false,
        }
    }

    /// All slots, day-major, upper before lower.
    pub fn entries(&self) -> impl Iterator<Item = &MealEntry> {
        self.days.iter().flat_map(|d| [&d.upper, &d.lower])
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.entries().filter(|e| !e.is_unset()).count()
    }

    #[must_use]
    pub fn to_stored(&self) -> StoredMenu {
        self.days
            .iter()
            .map(|d| [d.upper.name().to_string(), d.lower.name().to_string()])
            .collect()
    }
}
