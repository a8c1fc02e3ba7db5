//! `rickdex.toml` loading and platform directories.
//!
//! Lookup order: `./rickdex.toml`, then `<config_dir>/rickdex.toml`. Missing or
//! unparsable files fall back to defaults with a warning; unknown keys are
//! reported with a typo suggestion.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::filter::{CharacterType, FilterState, Species};

pub const CONFIG_FILE_NAME: &str = "rickdex.toml";

/// Known keys in `rickdex.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["data_file", "starred_file", "default_character_type", "default_species", "page_size"];

const DEFAULT_PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// `~/.rickdex` on Unix, `%APPDATA%/rickdex` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("rickdex"))
    } else {
        home_dir().map(|h| h.join(".rickdex"))
    }
}

/// `~/.local/share/rickdex` on Unix, `%LOCALAPPDATA%/rickdex` on Windows.
pub fn data_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("LOCALAPPDATA")
            .or_else(|_| std::env::var("APPDATA"))
            .ok()
            .map(|a| PathBuf::from(a).join("rickdex"))
    } else {
        home_dir().map(|h| h.join(".local/share/rickdex"))
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RickdexConfig {
    /// Character catalog (JSON).
    pub data_file: PathBuf,
    /// Starred ids (JSON array).
    pub starred_file: PathBuf,
    /// Filters applied at startup. The search term always starts empty.
    pub default_filters: FilterState,
    /// Rows shown per page by the front ends.
    pub page_size: usize,
    /// File the settings came from, if any.
    pub source: Option<PathBuf>,
}

impl RickdexConfig {
    /// Defaults relative to `base`.
    pub fn new(base: &Path) -> Self {
        Self {
            data_file: base.join("characters.json"),
            starred_file: data_dir()
                .map(|d| d.join("starred.json"))
                .unwrap_or_else(|| base.join("starred.json")),
            default_filters: FilterState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            source: None,
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known key within edit distance 3.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3)
}

/// Resolve a path value from the config file relative to the file's directory.
fn resolve(base: &Path, value: &str) -> PathBuf {
    let p = PathBuf::from(value);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}

/// Apply `rickdex.toml` content on top of defaults. `base` is the directory
/// relative paths resolve against.
pub fn parse_config(content: &str, base: &Path) -> RickdexConfig {
    let mut config = RickdexConfig::new(base);

    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE_NAME}, using defaults");
            return config;
        }
    };

    // Warn on unknown keys
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME}, did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(v) = table.get("data_file").and_then(|v| v.as_str()) {
        config.data_file = resolve(base, v);
    }
    if let Some(v) = table.get("starred_file").and_then(|v| v.as_str()) {
        config.starred_file = resolve(base, v);
    }

    if let Some(v) = table.get("default_character_type").and_then(|v| v.as_str()) {
        match v.parse::<CharacterType>() {
            Ok(t) => config.default_filters.character_type = t,
            Err(e) => warn!("{e} in {CONFIG_FILE_NAME}"),
        }
    }
    if let Some(v) = table.get("default_species").and_then(|v| v.as_str()) {
        match v.parse::<Species>() {
            Ok(s) => config.default_filters.species = s,
            Err(e) => warn!("{e} in {CONFIG_FILE_NAME}"),
        }
    }

    if let Some(n) = table.get("page_size").and_then(|v| v.as_integer()) {
        if n > 0 {
            config.page_size = n as usize;
        } else {
            warn!(page_size = n, "page_size must be positive, keeping {DEFAULT_PAGE_SIZE}");
        }
    }

    config
}

/// Find and load `rickdex.toml`, starting in `cwd`.
pub fn load_config(cwd: &Path) -> RickdexConfig {
    let candidates = std::iter::once(cwd.join(CONFIG_FILE_NAME))
        .chain(config_dir().map(|d| d.join(CONFIG_FILE_NAME)));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        debug!(path = %path.display(), "Loading {CONFIG_FILE_NAME}");
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let base = path.parent().unwrap_or(cwd);
                let mut config = parse_config(&content, base);
                config.source = Some(path);
                return config;
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Could not read config file"),
        }
    }

    RickdexConfig::new(cwd)
}
