use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_DAY_LABELS: [&str; 6] = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "PUB"];

pub const DEFAULT_DAY_ALIASES: [(&str, &str); 21] = [
    ("l", "lundi"),
    ("lun", "lundi"),
    ("mon", "lundi"),
    ("monday", "lundi"),
    ("m", "mardi"),
    ("mar", "mardi"),
    ("tue", "mardi"),
    ("tuesday", "mardi"),
    ("me", "mercredi"),
    ("mer", "mercredi"),
    ("wed", "mercredi"),
    ("wednesday", "mercredi"),
    ("j", "jeudi"),
    ("jeu", "jeudi"),
    ("thu", "jeudi"),
    ("thursday", "jeudi"),
    ("v", "vendredi"),
    ("ven", "vendredi"),
    ("fri", "vendredi"),
    ("friday", "vendredi"),
    ("p", "pub"),
];

/// Tokens listed first when offering day completions.
pub const PREFERRED_TOKENS: [&str; 8] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun", "pub"];

/// Ordered day labels plus the ordered alias table mapping input tokens to labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayConfig {
    pub labels: Vec<String>,
    pub aliases: Vec<(String, String)>,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_DAY_LABELS.iter().map(|l| (*l).to_string()).collect(),
            aliases: DEFAULT_DAY_ALIASES
                .iter()
                .map(|(t, l)| ((*t).to_string(), (*l).to_string()))
                .collect(),
        }
    }
}

impl DayConfig {
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Resolves a user token (alias or label, any case) to a day index.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<usize> {
        let normalized = token.to_lowercase();
        let label = self
            .aliases
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map_or(normalized.as_str(), |(_, label)| label.as_str());

        self.labels.iter().position(|l| l.to_lowercase() == label)
    }

    /// Alias tokens pointing at a configured day, preferred tokens first and
    /// the rest in table order. Falls back to the lowercase labels when no
    /// alias survives.
    #[must_use]
    pub fn ordered_tokens(&self) -> Vec<String> {
        let available: Vec<String> = self.labels.iter().map(|l| l.to_lowercase()).collect();
        let mut seen = HashSet::new();
        let mut matched: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, label)| available.contains(label))
            .map(|(token, _)| token.as_str())
            .filter(|token| seen.insert(*token))
            .collect();

        let mut ordered: Vec<String> = Vec::with_capacity(matched.len());
        for preferred in PREFERRED_TOKENS {
            if let Some(pos) = matched.iter().position(|t| *t == preferred) {
                ordered.push(matched.remove(pos).to_string());
            }
        }
        ordered.extend(matched.into_iter().map(str::to_string));

        if ordered.is_empty() {
            for label in available {
                if !ordered.contains(&label) {
                    ordered.push(label);
                }
            }
        }
        ordered
    }

    /// Shortest way to address `index` in a command, preferring the
    /// completion order of [`DayConfig::ordered_tokens`].
    #[must_use]
    pub fn token_for(&self, index: usize) -> Option<String> {
        let label = self.labels.get(index)?;
        let token = self
            .ordered_tokens()
            .into_iter()
            .filter(|t| t.chars().all(|c| c.is_ascii_alphabetic()))
            .find(|t| self.resolve(t) == Some(index))
            .unwrap_or_else(|| label.to_lowercase());
        Some(token)
    }
}
