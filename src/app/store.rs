use crate::domain::{
    catalog::MealCatalog,
    models::{DayMenu, MealEntry, MenuGrid, Zone},
    storage::{KeyValueStorage, MENU_KEY},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Owner and sole writer of the weekly menu.
///
/// The grid is `None` until [`MenuStore::load`] runs. Every publish sends the
/// current grid to subscribers; they only ever see the latest value.
pub struct MenuStore {
    storage: Arc<dyn KeyValueStorage>,
    catalog: Arc<MealCatalog>,
    day_count: usize,
    grid: Option<MenuGrid>,
    publisher: watch::Sender<Option<MenuGrid>>,
    last_payload: Option<String>,
}

impl MenuStore {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        catalog: Arc<MealCatalog>,
        day_count: usize,
    ) -> Self {
        let (publisher, _) = watch::channel(None);
        Self {
            storage,
            catalog,
            day_count,
            grid: None,
            publisher,
            last_payload: None,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<MenuGrid>> {
        self.publisher.subscribe()
    }

    #[must_use]
    pub fn grid(&self) -> Option<&MenuGrid> {
        self.grid.as_ref()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// Path of the persisted entry when the storage is file-backed.
    #[must_use]
    pub fn location(&self) -> Option<PathBuf> {
        self.storage.location(MENU_KEY)
    }

    /// Replaces the grid with the persisted one (or an empty grid) and publishes it.
    pub fn load(&mut self) {
        let payload = self.read_payload();
        let grid = payload
            .as_deref()
            .and_then(|text| decode(text, &self.catalog, self.day_count))
            .unwrap_or_else(|| MenuGrid::empty(self.day_count));

        info!(
            filled = grid.filled_count(),
            days = grid.day_count(),
            "Menu loaded"
        );
        self.last_payload = payload;
        self.grid = Some(grid);
        self.notify();
    }

    /// Reloads only when the persisted entry differs from what this store last
    /// read or wrote. Returns whether a reload happened.
    pub fn reload_if_changed(&mut self) -> bool {
        let payload = self.read_payload();
        if self.grid.is_some() && payload == self.last_payload {
            debug!("Persisted menu unchanged, skipping reload");
            return false;
        }
        self.load();
        true
    }

    pub fn save(&mut self) {
        let Some(grid) = &self.grid else {
            return;
        };

        let payload = match serde_json::to_string(&grid.to_stored()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize menu");
                return;
            }
        };

        match self.storage.set(MENU_KEY, &payload) {
            Ok(()) => {
                debug!(bytes = payload.len(), "Menu saved");
                self.last_payload = Some(payload);
            }
            Err(e) => warn!(error = %e, "Failed to persist menu"),
        }
    }

    /// Direct slot write, no validation. Ignored before `load` or out of range.
    pub fn set_slot(&mut self, day: usize, zone: Zone, entry: MealEntry) {
        match &mut self.grid {
            Some(grid) => {
                if !grid.set_slot(day, zone, entry) {
                    warn!(day, zone = %zone, "Slot write out of range");
                }
            }
            None => warn!("Slot write before the menu was loaded"),
        }
    }

    pub fn notify(&self) {
        self.publisher.send_replace(self.grid.clone());
    }

    fn read_payload(&self) -> Option<String> {
        match self.storage.get(MENU_KEY) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted menu, starting empty");
                None
            }
        }
    }
}

/// Rebuilds a grid from the persisted name pairs. Names matching a catalog
/// entry exactly are rebound to it, other names stay as free text. Missing
/// days or slots are filled with empty entries and extra ones dropped.
fn decode(payload: &str, catalog: &MealCatalog, day_count: usize) -> Option<MenuGrid> {
    let stored: Vec<Vec<Option<String>>> = match serde_json::from_str(payload) {
        Ok(stored) => stored,
        Err(e) => {
            warn!(error = %e, "Malformed persisted menu, starting empty");
            return None;
        }
    };

    let rebind = |name: Option<&String>| -> MealEntry {
        match name.map(String::as_str) {
            None | Some("") => MealEntry::empty(),
            Some(name) => catalog
                .get_exact(name)
                .map_or_else(|| MealEntry::free_text(name), |meal| MealEntry::Catalog(meal.clone())),
        }
    };

    let mut days: Vec<DayMenu> = stored
        .iter()
        .take(day_count)
        .map(|pair| {
            let upper = pair.first().and_then(Option::as_ref);
            let lower = pair.get(1).and_then(Option::as_ref);
            DayMenu {
                upper: rebind(upper),
                lower: rebind(lower),
            }
        })
        .collect();
    days.resize(day_count, DayMenu::default());

    Some(MenuGrid::from_days(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CatalogMeal;
    use crate::domain::storage::MockKeyValueStorage;
    use crate::infrastructure::memory_storage::MemoryStorage;

    fn catalog() -> Arc<MealCatalog> {
        Arc::new(MealCatalog::new(vec![
            CatalogMeal::new("Club", "club.png"),
            CatalogMeal::new("Chicken Deluxe", "deluxe.png"),
        ]))
    }

    #[test]
    fn test_load_without_data_gives_empty_grid() {
        let mut store = MenuStore::new(Arc::new(MemoryStorage::new()), catalog(), 6);
        assert!(!store.is_initialized());

        store.load();
        let grid = store.grid().unwrap();
        assert_eq!(grid.day_count(), 6);
        assert!(grid.entries().all(MealEntry::is_unset));
    }

    #[test]
    fn test_load_malformed_payload_falls_back_to_empty() {
        let storage = Arc::new(MemoryStorage::with_entry(MENU_KEY, "{not json"));
        let mut store = MenuStore::new(storage, catalog(), 3);
        store.load();
        assert_eq!(store.grid(), Some(&MenuGrid::empty(3)));
    }

    #[test]
    fn test_load_rebinds_catalog_names_and_keeps_unknown_text() {
        let payload = r#"[["Club", "Old sandwich"], ["", null]]"#;
        let storage = Arc::new(MemoryStorage::with_entry(MENU_KEY, payload));
        let mut store = MenuStore::new(storage, catalog(), 3);
        store.load();

        let grid = store.grid().unwrap();
        assert_eq!(
            grid.slot(0, Zone::Upper),
            Some(&MealEntry::Catalog(CatalogMeal::new("Club", "club.png")))
        );
        assert_eq!(
            grid.slot(0, Zone::Lower),
            Some(&MealEntry::free_text("Old sandwich"))
        );
        assert!(grid.slot(1, Zone::Lower).unwrap().is_unset());
        // Missing third day is padded
        assert!(grid.slot(2, Zone::Upper).unwrap().is_unset());
    }

    #[test]
    fn test_save_load_round_trip() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let mut store = MenuStore::new(storage.clone(), catalog(), 2);
        store.load();
        store.set_slot(
            0,
            Zone::Upper,
            MealEntry::Catalog(CatalogMeal::new("Chicken Deluxe", "deluxe.png")),
        );
        store.set_slot(0, Zone::Lower, MealEntry::free_text("Soup of the day"));
        store.set_slot(1, Zone::Upper, MealEntry::free_text("Club"));
        store.save();
        let before = store.grid().cloned();

        let mut reloaded = MenuStore::new(storage, catalog(), 2);
        reloaded.load();
        let after = reloaded.grid().unwrap();

        assert_eq!(
            after.slot(0, Zone::Upper),
            before.as_ref().unwrap().slot(0, Zone::Upper)
        );
        assert_eq!(
            after.slot(0, Zone::Lower),
            before.as_ref().unwrap().slot(0, Zone::Lower)
        );
        // A free-text label equal to a catalog name comes back bound to the catalog
        assert_eq!(
            after.slot(1, Zone::Upper),
            Some(&MealEntry::Catalog(CatalogMeal::new("Club", "club.png")))
        );
    }

    #[test]
    fn test_notify_publishes_current_grid() {
        let mut store = MenuStore::new(Arc::new(MemoryStorage::new()), catalog(), 2);
        let mut rx = store.subscribe();
        assert!(rx.borrow().is_none());

        store.load();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref(), store.grid());

        store.set_slot(1, Zone::Upper, MealEntry::free_text("Pasta"));
        assert!(!rx.has_changed().unwrap());
        store.notify();
        assert_eq!(
            rx.borrow_and_update()
                .as_ref()
                .and_then(|g| g.slot(1, Zone::Upper).cloned()),
            Some(MealEntry::free_text("Pasta"))
        );
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut mock = MockKeyValueStorage::new();
        mock.expect_get()
            .returning(|_| Err(anyhow::anyhow!("disk on fire")));
        mock.expect_set()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("read-only")));

        let mut store = MenuStore::new(Arc::new(mock), catalog(), 2);
        store.load();
        assert_eq!(store.grid(), Some(&MenuGrid::empty(2)));
        store.save();
        assert!(store.is_initialized());
    }

    #[test]
    fn test_reload_if_changed_skips_own_writes() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let mut store = MenuStore::new(storage.clone(), catalog(), 1);
        store.load();
        store.set_slot(0, Zone::Upper, MealEntry::free_text("Mine"));
        store.save();
        assert!(!store.reload_if_changed());

        storage
            .set(MENU_KEY, r#"[["Club", ""]]"#)
            .unwrap();
        assert!(store.reload_if_changed());
        assert_eq!(store.grid().unwrap().slot(0, Zone::Upper).unwrap().name(), "Club");
    }

    #[test]
    fn test_set_slot_before_load_is_ignored() {
        let mut store = MenuStore::new(Arc::new(MemoryStorage::new()), catalog(), 1);
        store.set_slot(0, Zone::Upper, MealEntry::free_text("x"));
        assert!(store.grid().is_none());
    }
}
