//! Rickdex core: the character filter model shared by the desktop app and CLI.
//!
//! # Modules
//!
//! - [`filter`]: `FilterState` and its categorical options
//! - [`panel`]: Filter panel state holder and the `FilterSink` callback seam
//! - [`character`]: Character records and catalog filtering
//! - [`starred`]: Persisted set of starred character ids
//! - [`config`]: `rickdex.toml` loading and platform directories

pub mod character;
pub mod config;
pub mod filter;
pub mod panel;
pub mod starred;

pub use character::{Catalog, Character, FilterResponse};
pub use config::{load_config, RickdexConfig};
pub use filter::{CharacterType, FilterField, FilterState, Species};
pub use panel::{FilterPanel, FilterSink};
pub use starred::StarredStore;
