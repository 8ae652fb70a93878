use mealplan::app::{config::AppConfig, context::AppContext, interpreter::CommandError};
use mealplan::domain::{
    models::Zone,
    storage::{KeyValueStorage, MENU_KEY},
};
use mealplan::infrastructure::{assets::FileTemplateSource, memory_storage::MemoryStorage};
use std::sync::Arc;

fn context(storage: Arc<MemoryStorage>) -> AppContext {
    AppContext::new(
        AppConfig::default(),
        storage,
        Arc::new(FileTemplateSource::bundled()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_week_planned_through_commands() {
    let storage = Arc::new(MemoryStorage::new());
    let mut ctx = context(storage.clone());

    // Nothing works before the first load
    let outcome = ctx.execute("mon-u-s club");
    assert_eq!(outcome.rejection, Some(CommandError::Uninitialized));

    ctx.store.load();
    let mut published = ctx.store.subscribe();

    assert!(ctx.execute("mon-u-s club").success);
    assert!(ctx.execute("mon-l-t Salade verte").success);
    assert!(ctx.execute("TUE-U-S jambon").success);
    assert!(published.has_changed().unwrap());

    let grid = ctx.store.grid().unwrap();
    assert_eq!(
        grid.slot(0, Zone::Upper).map(|e| e.name()),
        Some("Club Poulet")
    );
    assert_eq!(
        grid.slot(0, Zone::Lower).map(|e| e.name()),
        Some("Salade verte")
    );
    assert_eq!(
        grid.slot(1, Zone::Upper).map(|e| e.name()),
        Some("Jambon Beurre")
    );

    // Persisted as name pairs, one per day
    let stored = storage.get(MENU_KEY).unwrap().unwrap();
    assert!(stored.starts_with(r#"[["Club Poulet","Salade verte"],["Jambon Beurre",""]"#));

    let mail = ctx.mail.generate(ctx.store.grid().unwrap()).await;
    assert!(mail.contains("- Club Poulet:"));
    assert!(mail.contains("- Jambon Beurre:"));
    assert!(!mail.contains("Salade verte"));
    assert!(!mail.contains("{français}"));
}

#[test]
fn test_rejections_leave_the_menu_untouched() {
    let storage = Arc::new(MemoryStorage::new());
    let mut ctx = context(storage.clone());
    ctx.store.load();
    let before = ctx.store.grid().cloned();

    let cases = [
        ("wed-l-t soup", "Configure the upper zone for Mercredi before using the lower zone."),
        ("mon-u-s poulet", "Multiple sandwiches match \"poulet\". Please be more specific."),
        ("mon-u-s tofu", "Sandwich \"tofu\" was not found in the meal list."),
        ("xyz-u-t soup", "Unknown day \"xyz\"."),
        ("generate", "Generation feature is not available."),
        ("hello", "Invalid command. Use day-zone-type value or day-zone-clear."),
    ];
    for (command, message) in cases {
        let outcome = ctx.execute(command);
        assert!(!outcome.success, "{command}");
        assert_eq!(outcome.message, message, "{command}");
    }

    assert_eq!(ctx.store.grid().cloned(), before);
    assert_eq!(storage.get(MENU_KEY).unwrap(), None);
}

#[test]
fn test_reopened_store_rebinds_catalog_meals() {
    let storage = Arc::new(MemoryStorage::new());
    let mut first = context(storage.clone());
    first.store.load();
    assert!(first.execute("fri-u-s pizza").success);
    assert!(first.execute("fri-l-t Fruit").success);

    let mut second = context(storage);
    second.store.load();
    let grid = second.store.grid().unwrap();
    let upper = grid.slot(4, Zone::Upper).unwrap();
    assert!(!upper.is_free_text());
    assert_eq!(upper.image_ref(), "images/pizza.png");
    assert!(grid.slot(4, Zone::Lower).unwrap().is_free_text());

    assert!(second.execute("fri-u-clear").success);
    let grid = second.store.grid().unwrap();
    assert!(grid.slot(4, Zone::Upper).unwrap().is_unset());
    assert!(grid.slot(4, Zone::Lower).unwrap().is_unset());
}

#[test]
fn test_suggestions_follow_typing() {
    let ctx = context(Arc::new(MemoryStorage::new()));

    assert_eq!(ctx.suggest("").len(), 4);
    assert_eq!(ctx.suggest("gen"), vec!["generate", "gen"]);
    assert!(ctx
        .suggest("mon-u-s sau")
        .contains(&"mon-u-s Saumon Fumé".to_string()));
    assert_eq!(ctx.suggest("mon-u-t "), vec!["mon-u-t <your text>"]);
}
