//! Test harness for catalog and filter panel integration tests.
//!
//! Copies a fixture directory into a temp dir, loads its `rickdex.toml`, and
//! plays the caller's role: it owns the current `FilterState` and accepts
//! every value the panel proposes.

pub mod fixtures;

use rickdex_core::{
    load_config, Catalog, FilterPanel, FilterSink, FilterState, RickdexConfig, StarredStore,
};
use tempfile::TempDir;

pub struct TestHarness {
    pub config: RickdexConfig,
    pub catalog: Catalog,
    pub starred: StarredStore,
    pub panel: FilterPanel,
    pub filters: FilterState,
    /// Number of proposals received from the panel.
    pub changes: usize,
    _temp_dir: TempDir,
}

impl FilterSink for TestHarness {
    fn on_filter_change(&mut self, next: FilterState) {
        self.filters = next;
        self.changes += 1;
    }
}

impl TestHarness {
    /// Create a harness from a named fixture directory.
    pub fn from_fixture(name: &str) -> Self {
        let fixture_src =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
        assert!(fixture_src.exists(), "Fixture '{name}' not found at {}", fixture_src.display());

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fixtures::copy_dir_recursive(&fixture_src, temp_dir.path());

        let config = load_config(temp_dir.path());
        let catalog = Catalog::load(&config.data_file).expect("Failed to load catalog");
        let starred = StarredStore::load(&config.starred_file).expect("Failed to load starred");
        let filters = config.default_filters.clone();

        TestHarness {
            config,
            catalog,
            starred,
            panel: FilterPanel::new(),
            filters,
            changes: 0,
            _temp_dir: temp_dir,
        }
    }

    /// Names of characters passing the current filters.
    pub fn visible(&self) -> Vec<String> {
        self.catalog
            .filter(&self.filters, &self.starred)
            .characters
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn type_search(&mut self, text: &str) {
        let (panel, current) = (self.panel, self.filters.clone());
        panel.set_search_term(&current, text, self);
    }

    pub fn pick_type(&mut self, value: rickdex_core::CharacterType) {
        let (panel, current) = (self.panel, self.filters.clone());
        panel.set_character_type(&current, value, self);
    }

    pub fn pick_species(&mut self, value: rickdex_core::Species) {
        let (panel, current) = (self.panel, self.filters.clone());
        panel.set_species(&current, value, self);
    }

    pub fn clear_search(&mut self) {
        let (panel, current) = (self.panel, self.filters.clone());
        panel.clear_search(&current, self);
    }

    pub fn clear_all(&mut self) {
        let panel = self.panel;
        panel.clear_all(self);
    }
}
