// Bundled fallbacks, used when no path is configured.
pub const DEFAULT_MEAL_CATALOG: &str = include_str!("../../assets/meals.json");
pub const DEFAULT_INGREDIENTS: &str = include_str!("../../assets/ingredients.json");
pub const DEFAULT_MAIL_TEMPLATE: &str = include_str!("../../assets/mail_template.txt");
