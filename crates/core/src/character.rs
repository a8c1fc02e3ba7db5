//! Character records and the in-memory catalog they are filtered from.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::filter::FilterState;
use crate::starred::StarredStore;

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
}

/// One browsable character. Fields beyond `id` and `name` are optional in the
/// source data and default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
    pub origin: Location,
}

impl Character {
    /// "Human · Alive" style subtitle used by both front ends.
    pub fn subtitle(&self) -> String {
        match (self.species.is_empty(), self.status.is_empty()) {
            (false, false) => format!("{} \u{00B7} {}", self.species, self.status),
            (false, true) => self.species.clone(),
            (true, false) => self.status.clone(),
            (true, true) => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Catalog files come either as a bare array or as an API page with `results`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Character>),
    Page { results: Vec<Character> },
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub characters: Vec<Character>,
}

/// Result of applying a [`FilterState`] to a catalog.
#[derive(Debug, Serialize)]
pub struct FilterResponse<'a> {
    pub characters: Vec<&'a Character>,
    pub total: usize,
    /// Milliseconds spent matching.
    pub query_time: f64,
}

impl Catalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        let parsed: CatalogFile = serde_json::from_str(content)
            .map_err(|e| format!("Failed to parse character catalog: {e}"))?;
        let characters = match parsed {
            CatalogFile::List(list) => list,
            CatalogFile::Page { results } => results,
        };
        Ok(Self { characters })
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let catalog = Self::from_json(&content)
            .map_err(|e| format!("{} ({})", e, path.display()))?;
        info!(path = %path.display(), count = catalog.len(), "Loaded character catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Characters passing `filters`, in catalog order.
    pub fn filter(&self, filters: &FilterState, starred: &StarredStore) -> FilterResponse<'_> {
        let start = Instant::now();
        let characters: Vec<&Character> = self
            .characters
            .par_iter()
            .filter(|c| filters.matches(c, starred.is_starred(c.id)))
            .collect();
        let query_time = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            matched = characters.len(),
            total = self.characters.len(),
            active = filters.active_count(),
            "Applied filters"
        );
        FilterResponse { characters, total: self.characters.len(), query_time }
    }
}
