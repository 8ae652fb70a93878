use super::{
    config::AppConfig,
    interpreter::{CommandInterpreter, CommandOutcome},
    mail::MailGenerator,
    store::MenuStore,
    suggestion::SuggestionEngine,
};
use crate::domain::{
    catalog::MealCatalog,
    days::DayConfig,
    storage::{KeyValueStorage, TemplateSource},
};
use crate::infrastructure::{
    assets::{load_catalog, load_ingredients, FileTemplateSource},
    file_storage::FileStorage,
};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Everything the front-ends share: read-only tables, the single menu store
/// and the mail generator. Built once at startup.
pub struct AppContext {
    pub config: AppConfig,
    pub days: Arc<DayConfig>,
    pub catalog: Arc<MealCatalog>,
    pub store: MenuStore,
    pub mail: MailGenerator,
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn KeyValueStorage>,
        templates: Arc<dyn TemplateSource>,
    ) -> Result<Self> {
        let catalog = Arc::new(load_catalog(config.catalog_path.as_deref())?);
        let ingredients = Arc::new(load_ingredients(config.ingredients_path.as_deref())?);
        let days = Arc::new(config.days.clone());
        let store = MenuStore::new(storage, catalog.clone(), days.day_count());
        let data_dir = config.data_dir();

        info!(
            meals = catalog.len(),
            ingredients = ingredients.len(),
            days = days.day_count(),
            "Context ready"
        );

        Ok(Self {
            config,
            days,
            catalog,
            store,
            mail: MailGenerator::new(ingredients, templates),
            data_dir,
        })
    }

    /// Production wiring: the menu lives under the data directory and the
    /// template comes from the configured file or the bundled default.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let storage = Arc::new(FileStorage::new(config.data_dir()));
        let templates = Arc::new(FileTemplateSource::new(config.template_path.clone()));
        Self::new(config, storage, templates)
    }

    pub fn execute(&mut self, command: &str) -> CommandOutcome {
        CommandInterpreter::new(&self.catalog, &self.days).execute(&mut self.store, command)
    }

    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<String> {
        SuggestionEngine::new(&self.days, &self.catalog).suggest(input)
    }
}
