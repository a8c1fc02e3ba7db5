//! Starred characters: the user's favorites, persisted as a JSON array of ids.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct StarredStore {
    ids: BTreeSet<u32>,
    path: Option<PathBuf>,
}

impl StarredStore {
    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file is an empty store bound to that path.
    pub fn load(path: &Path) -> Result<Self, String> {
        let mut store = Self { ids: BTreeSet::new(), path: Some(path.to_path_buf()) };
        if !path.exists() {
            debug!(path = %path.display(), "No starred file yet");
            return Ok(store);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let ids: Vec<u32> = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        store.ids.extend(ids);
        info!(path = %path.display(), count = store.ids.len(), "Loaded starred characters");
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_starred(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip the starred flag for `id`, returning the new flag.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Write the ids (sorted) to the bound path. No-op for in-memory stores.
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
            }
        }
        let ids: Vec<u32> = self.ids().collect();
        let output = serde_json::to_string_pretty(&ids)
            .map_err(|e| format!("Failed to serialize starred ids: {}", e))?;
        std::fs::write(path, format!("{}\n", output))
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        debug!(path = %path.display(), count = ids.len(), "Saved starred characters");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_reports() {
        let mut s = StarredStore::in_memory();
        assert!(s.toggle(7));
        assert!(s.is_starred(7));
        assert!(!s.toggle(7));
        assert!(!s.is_starred(7));
        assert!(s.is_empty());
    }

    #[test]
    fn in_memory_save_is_noop() {
        let mut s = StarredStore::in_memory();
        s.toggle(1);
        assert!(s.save().is_ok());
        assert!(s.path().is_none());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starred.json");
        let s = StarredStore::load(&path).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.path(), Some(path.as_path()));
    }

    #[test]
    fn save_creates_parent_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/starred.json");
        let mut s = StarredStore::load(&path).unwrap();
        s.toggle(47);
        s.toggle(2);
        s.save().unwrap();

        let written: Vec<u32> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, vec![2, 47]);

        let reloaded = StarredStore::load(&path).unwrap();
        assert_eq!(reloaded.ids().collect::<Vec<_>>(), vec![2, 47]);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starred.json");
        std::fs::write(&path, "not json").unwrap();
        let err = StarredStore::load(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse"), "unexpected error: {err}");
    }
}
