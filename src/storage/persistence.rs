use tracing::{debug, info};

use super::store::KeyValueStore;
use crate::core::{GridStore, STORAGE_KEY, UNPAINTED};
use crate::error::PersistenceError;

/// Saves and restores the grid through a single named slot
#[derive(Debug)]
pub struct Persistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Persistence {
            store,
            key: key.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrite the slot with every cell's color, in cell order
    pub fn save(&mut self, grid: &GridStore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(grid.colors()).map_err(PersistenceError::Encode)?;
        self.store.set(&self.key, &json).map_err(|source| self.io_error(source))?;
        info!(key = %self.key, cells = grid.len(), "snapshot saved");
        Ok(())
    }

    /// Apply a stored snapshot if there is one. Entries beyond the grid are
    /// ignored; a short snapshot only touches the cells it covers.
    pub fn load(&self, grid: &mut GridStore) -> Result<bool, PersistenceError> {
        let Some(json) = self.store.get(&self.key).map_err(|source| self.io_error(source))? else {
            debug!(key = %self.key, "no snapshot stored");
            return Ok(false);
        };

        let colors: Vec<String> = serde_json::from_str(&json).map_err(|source| PersistenceError::Malformed {
            key: self.key.clone(),
            source,
        })?;

        let applied = colors.len().min(grid.len());
        for (index, color) in colors.iter().take(applied).enumerate() {
            // An empty value is an unset cell
            let color = if color.is_empty() { UNPAINTED } else { color.as_str() };
            grid.set_color(index, color);
        }
        info!(key = %self.key, cells = applied, stored = colors.len(), "snapshot loaded");
        Ok(true)
    }

    /// Drop the slot and blank the grid
    pub fn delete(&mut self, grid: &mut GridStore) -> Result<(), PersistenceError> {
        self.store.remove(&self.key).map_err(|source| self.io_error(source))?;
        grid.reset_all();
        info!(key = %self.key, "snapshot deleted");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            key: self.key.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CELL_COUNT;
    use crate::storage::MemoryStore;

    #[test]
    fn save_clear_load_restores_every_cell() {
        let mut persistence = Persistence::new(MemoryStore::new());
        let mut grid = GridStore::new();
        grid.set_color(0, "red");
        grid.set_color(61, "#00ff00");
        grid.set_color(CELL_COUNT - 1, "rgb(1, 2, 3)");
        let original = grid.colors().to_vec();

        persistence.save(&grid).unwrap();
        grid.reset_all();
        assert!(persistence.load(&mut grid).unwrap());

        assert_eq!(grid.colors(), original.as_slice());
    }

    #[test]
    fn snapshot_is_a_flat_json_array_under_the_fixed_key() {
        let mut persistence = Persistence::new(MemoryStore::new());
        let mut grid = GridStore::new();
        grid.set_color(1, "blue");
        persistence.save(&grid).unwrap();

        let raw = persistence.store().get("dotEditorData").unwrap().unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), CELL_COUNT);
        assert_eq!(parsed[0], "white");
        assert_eq!(parsed[1], "blue");
    }

    #[test]
    fn missing_slot_is_a_silent_no_op() {
        let persistence = Persistence::new(MemoryStore::new());
        let mut grid = GridStore::new();
        grid.set_color(3, "red");
        assert!(!persistence.load(&mut grid).unwrap());
        assert_eq!(grid.get_color(3), "red");
    }

    #[test]
    fn short_snapshot_applies_only_its_prefix() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, r#"["red", "", "blue"]"#).unwrap();
        let persistence = Persistence::new(store);
        let mut grid = GridStore::new();
        grid.set_color(1, "green");
        grid.set_color(3, "green");

        persistence.load(&mut grid).unwrap();

        assert_eq!(grid.get_color(0), "red");
        assert_eq!(grid.get_color(1), "white");
        assert_eq!(grid.get_color(2), "blue");
        assert_eq!(grid.get_color(3), "green");
    }

    #[test]
    fn oversized_snapshot_ignores_the_tail() {
        let mut store = MemoryStore::new();
        let colors = vec!["red".to_string(); CELL_COUNT + 5];
        store.set(STORAGE_KEY, &serde_json::to_string(&colors).unwrap()).unwrap();
        let mut grid = GridStore::new();

        Persistence::new(store).load(&mut grid).unwrap();

        assert!(grid.colors().iter().all(|c| c == "red"));
        assert_eq!(grid.len(), CELL_COUNT);
    }

    #[test]
    fn malformed_snapshot_fails_the_load() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();
        let mut grid = GridStore::new();

        let err = Persistence::new(store).load(&mut grid).unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { .. }));
    }

    #[test]
    fn delete_leaves_a_fresh_load_all_white() {
        let mut persistence = Persistence::new(MemoryStore::new());
        let mut grid = GridStore::new();
        grid.set_color(0, "red");
        persistence.save(&grid).unwrap();

        persistence.delete(&mut grid).unwrap();
        assert!(grid.colors().iter().all(|c| c == "white"));

        let mut fresh = GridStore::new();
        assert!(!persistence.load(&mut fresh).unwrap());
        assert!(fresh.colors().iter().all(|c| c == "white"));
        assert_eq!(persistence.store().get(STORAGE_KEY).unwrap(), None);
    }
}
