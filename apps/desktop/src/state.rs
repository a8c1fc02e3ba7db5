//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use rickdex_core::{load_config, Catalog, FilterState, RickdexConfig, StarredStore};
use tracing::{error, warn};

/// Loaded config and catalog: created once at startup.
pub struct AppState {
    pub config: RickdexConfig,
    pub catalog: Catalog,
    pub starred: StarredStore,
    /// Set when the catalog could not be loaded; the list shows it instead of results.
    pub load_error: Option<String>,
}

impl AppState {
    /// Load config, catalog, and starred ids relative to the current working directory.
    pub fn from_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        Self::from_config(load_config(&cwd))
    }

    pub fn from_config(config: RickdexConfig) -> Self {
        let (catalog, load_error) = match Catalog::load(&config.data_file) {
            Ok(c) => (c, None),
            Err(e) => {
                error!(error = %e, "Could not load character catalog");
                (Catalog::default(), Some(e))
            }
        };
        let starred = StarredStore::load(&config.starred_file).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable starred file");
            StarredStore::in_memory()
        });
        AppState { config, catalog, starred, load_error }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Core loaded state: set once at startup
pub static CORE: GlobalSignal<Option<AppState>> = Signal::global(|| None);

/// Current filters. The app owns them; `SearchFilter` only proposes replacements.
pub static FILTERS: GlobalSignal<FilterState> = Signal::global(FilterState::default);

/// Starred character ids
pub static STARRED: GlobalSignal<StarredStore> = Signal::global(StarredStore::in_memory);

/// Character currently highlighted in the list
pub static SELECTED_ID: GlobalSignal<Option<u32>> = Signal::global(|| None);

/// Star or unstar a character and persist the change.
pub fn toggle_star(id: u32) {
    let mut starred = STARRED.write();
    starred.toggle(id);
    if let Err(e) = starred.save() {
        warn!(id, error = %e, "Could not save starred characters");
    }
}
