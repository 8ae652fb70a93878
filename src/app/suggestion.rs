use super::interpreter::CLEAR_SYNONYMS;
use crate::domain::{catalog::MealCatalog, days::DayConfig, models::Zone};

pub const MAX_SUGGESTIONS: usize = 6;

const GENERATE_TOKENS: [&str; 2] = ["generate", "gen"];

/// Longest day token that still gets its own completions.
const MAX_COMBO_TOKEN_LEN: usize = 4;

/// A candidate command prefix offered while the user types the head.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Combo {
    text: String,
    requires_value: bool,
}

impl Combo {
    fn rendered(&self) -> String {
        if self.requires_value {
            format!("{} ", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Completion candidates for the command bar. Holds no state between calls.
pub struct SuggestionEngine<'a> {
    days: &'a DayConfig,
    catalog: &'a MealCatalog,
}

impl<'a> SuggestionEngine<'a> {
    #[must_use]
    pub fn new(days: &'a DayConfig, catalog: &'a MealCatalog) -> Self {
        Self { days, catalog }
    }

    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let trimmed = collapse_whitespace(input);
        let combos = self.combos();

        if trimmed.is_empty() {
            let base = combos
                .first()
                .and_then(|c| c.text.split('-').next())
                .unwrap_or("mon");
            return vec![
                "generate".to_string(),
                format!("{base}-u-s <sandwich name>"),
                format!("{base}-u-t <your text>"),
                format!("{base}-u-clear"),
            ];
        }

        let Some((head, rest)) = trimmed.split_once(' ') else {
            let normalized = trimmed.to_lowercase();
            return GENERATE_TOKENS
                .iter()
                .filter(|t| t.starts_with(&normalized))
                .map(|t| (*t).to_string())
                .chain(matching_combos(&combos, &normalized))
                .take(MAX_SUGGESTIONS)
                .collect();
        };

        let lower_head = head.to_lowercase();
        if GENERATE_TOKENS.iter().any(|t| t.starts_with(&lower_head)) {
            return vec!["generate".to_string()];
        }

        if !head.contains('-') {
            return matching_combos(&combos, &lower_head)
                .take(MAX_SUGGESTIONS)
                .collect();
        }

        let kind = lower_head.split('-').nth(2).unwrap_or("");
        match kind {
            "" => Vec::new(),
            "s" => self
                .catalog
                .search(rest)
                .take(MAX_SUGGESTIONS)
                .map(|meal| format!("{head} {}", meal.name))
                .collect(),
            "t" if rest.is_empty() => vec![format!("{head} <your text>")],
            k if CLEAR_SYNONYMS.contains(&k) => vec![head.to_string()],
            _ => Vec::new(),
        }
    }

    fn combos(&self) -> Vec<Combo> {
        let build = |token: &str| -> Vec<Combo> {
            Zone::ALL
                .iter()
                .flat_map(|zone| {
                    let z = zone.token();
                    [
                        Combo {
                            text: format!("{token}-{z}-s"),
                            requires_value: true,
                        },
                        Combo {
                            text: format!("{token}-{z}-t"),
                            requires_value: true,
                        },
                        Combo {
                            text: format!("{token}-{z}-clear"),
                            requires_value: false,
                        },
                    ]
                })
                .collect()
        };

        let combos: Vec<Combo> = self
            .days
            .ordered_tokens()
            .iter()
            .filter(|t| t.chars().count() <= MAX_COMBO_TOKEN_LEN)
            .flat_map(|t| build(t.as_str()))
            .collect();

        if combos.is_empty() {
            self.days
                .labels
                .iter()
                .flat_map(|l| build(&l.to_lowercase()))
                .collect()
        } else {
            combos
        }
    }
}

fn matching_combos<'c>(combos: &'c [Combo], prefix: &'c str) -> impl Iterator<Item = String> + 'c {
    combos
        .iter()
        .filter(move |c| c.text.starts_with(prefix))
        .map(Combo::rendered)
}

/// Collapses whitespace runs to a single space and drops leading whitespace.
/// A trailing space survives: it tells the head is complete.
fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CatalogMeal;

    fn catalog() -> MealCatalog {
        MealCatalog::new(
            [
                "Jambon Beurre",
                "Poulet Crudités",
                "Club Poulet",
                "Thon Mayonnaise",
                "Wrap Poulet Curry",
                "Pan Bagnat",
                "Chèvre Miel",
                "Croque Monsieur",
            ]
            .iter()
            .map(|n| CatalogMeal::new(*n, ""))
            .collect(),
        )
    }

    fn suggest(input: &str) -> Vec<String> {
        let days = DayConfig::default();
        let catalog = catalog();
        SuggestionEngine::new(&days, &catalog).suggest(input)
    }

    #[test]
    fn test_empty_input_gives_four_hints() {
        let hints = suggest("");
        assert_eq!(
            hints,
            vec![
                "generate",
                "mon-u-s <sandwich name>",
                "mon-u-t <your text>",
                "mon-u-clear"
            ]
        );
        assert_eq!(suggest("   ").len(), 4);
    }

    #[test]
    fn test_head_completion() {
        assert_eq!(suggest("g"), vec!["generate", "gen"]);
        assert_eq!(
            suggest("mon"),
            vec![
                "mon-u-s ",
                "mon-u-t ",
                "mon-u-clear",
                "mon-l-s ",
                "mon-l-t ",
                "mon-l-clear"
            ]
        );
        assert_eq!(suggest("MON-L-C"), vec!["mon-l-clear"]);
        assert!(suggest("zzz").is_empty());
    }

    #[test]
    fn test_results_truncated() {
        // "m" matches mon, m, mar, me, mer combos
        assert_eq!(suggest("m").len(), MAX_SUGGESTIONS);
        assert!(suggest("mon-u-s ").len() <= MAX_SUGGESTIONS);
        assert!(suggest("l").len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_long_tokens_get_no_combos() {
        assert!(suggest("monda").is_empty());
        assert!(suggest("tuesday").is_empty());
        assert!(suggest("wednesday x").is_empty());
        assert!(suggest("mon").iter().all(|c| !c.starts_with("monday-")));
        assert!(suggest("m").iter().all(|c| !c.starts_with("monday-")));
    }

    #[test]
    fn test_repeated_alias_gives_unique_combos() {
        let days = DayConfig {
            labels: vec!["Lundi".to_string(), "Mardi".to_string()],
            aliases: vec![
                ("mon".to_string(), "lundi".to_string()),
                ("tue".to_string(), "mardi".to_string()),
                ("mon".to_string(), "lundi".to_string()),
            ],
        };
        let catalog = catalog();
        let engine = SuggestionEngine::new(&days, &catalog);
        assert_eq!(
            engine.suggest("mon-l"),
            vec!["mon-l-s ", "mon-l-t ", "mon-l-clear"]
        );
        assert_eq!(engine.suggest("m").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_generate_head_with_space() {
        assert_eq!(suggest("gen something"), vec!["generate"]);
        assert_eq!(suggest("ge "), vec!["generate"]);
    }

    #[test]
    fn test_head_without_dash_after_space() {
        assert_eq!(suggest("tue x").len(), MAX_SUGGESTIONS);
        assert_eq!(suggest("tue x")[0], "tue-u-s ");
    }

    #[test]
    fn test_sandwich_suggestions() {
        let all = suggest("mon-u-s ");
        assert_eq!(all.len(), MAX_SUGGESTIONS);
        assert_eq!(all[0], "mon-u-s Jambon Beurre");

        assert_eq!(
            suggest("Tue-L-s   poulet"),
            vec![
                "Tue-L-s Poulet Crudités",
                "Tue-L-s Club Poulet",
                "Tue-L-s Wrap Poulet Curry"
            ]
        );
        assert!(suggest("mon-u-s tofu").is_empty());
    }

    #[test]
    fn test_text_and_clear_suggestions() {
        assert_eq!(suggest("mon-u-t "), vec!["mon-u-t <your text>"]);
        assert!(suggest("mon-u-t hello").is_empty());
        assert_eq!(suggest("mon-u-reset "), vec!["mon-u-reset"]);
        assert!(suggest("mon-u- x").is_empty());
        assert!(suggest("mon-u-q x").is_empty());
    }

    #[test]
    fn test_label_fallback_when_no_aliases() {
        let days = DayConfig {
            labels: vec!["Weekday".to_string(), "Weekend".to_string()],
            aliases: Vec::new(),
        };
        let catalog = catalog();
        let engine = SuggestionEngine::new(&days, &catalog);
        assert_eq!(engine.suggest("")[1], "weekday-u-s <sandwich name>");
        assert_eq!(engine.suggest("weeke")[0], "weekend-u-s ");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  mon-u-s \t ham  "), "mon-u-s ham ");
    }
}
