//! Filter model: the caller-owned value describing the current search text and
//! the two categorical selections (character type, species).
//!
//! `FilterState` is immutable-by-replacement: every `with_*` method returns a new
//! value and leaves untargeted fields untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::character::Character;

// ---------------------------------------------------------------------------
// Categorical options
// ---------------------------------------------------------------------------

/// Which characters to show relative to the user's starred set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    #[default]
    All,
    Starred,
    Regular,
}

impl CharacterType {
    /// Options in display order.
    pub const ALL: [CharacterType; 3] =
        [CharacterType::All, CharacterType::Starred, CharacterType::Regular];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterType::All => "all",
            CharacterType::Starred => "starred",
            CharacterType::Regular => "regular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterType::All => "All",
            CharacterType::Starred => "Starred",
            CharacterType::Regular => "Regular",
        }
    }

    /// Whether a character with the given starred flag passes this selection.
    pub fn admits(self, starred: bool) -> bool {
        match self {
            CharacterType::All => true,
            CharacterType::Starred => starred,
            CharacterType::Regular => !starred,
        }
    }
}

impl FromStr for CharacterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CharacterType::All),
            "starred" => Ok(CharacterType::Starred),
            "regular" => Ok(CharacterType::Regular),
            other => Err(format!(
                "Unknown character type '{other}' (expected one of: all, starred, regular)"
            )),
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Species selection. Characters whose species is neither human nor alien only
/// show up under `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    All,
    Human,
    Alien,
}

impl Species {
    /// Options in display order.
    pub const ALL: [Species; 3] = [Species::All, Species::Human, Species::Alien];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::All => "all",
            Species::Human => "human",
            Species::Alien => "alien",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::All => "All",
            Species::Human => "Human",
            Species::Alien => "Alien",
        }
    }

    /// Case-insensitive comparison against a character's species string.
    pub fn admits(self, species: &str) -> bool {
        match self {
            Species::All => true,
            Species::Human | Species::Alien => species.trim().eq_ignore_ascii_case(self.as_str()),
        }
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Species::All),
            "human" => Ok(Species::Human),
            "alien" => Ok(Species::Alien),
            other => Err(format!("Unknown species '{other}' (expected one of: all, human, alien)")),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Identifies one field of [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    SearchTerm,
    CharacterType,
    Species,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search_term: String,
    pub character_type: CharacterType,
    pub species: Species,
}

impl FilterState {
    pub fn new(
        search_term: impl Into<String>,
        character_type: CharacterType,
        species: Species,
    ) -> Self {
        Self { search_term: search_term.into(), character_type, species }
    }

    pub fn with_search_term(&self, search_term: impl Into<String>) -> Self {
        Self { search_term: search_term.into(), ..self.clone() }
    }

    pub fn with_character_type(&self, character_type: CharacterType) -> Self {
        Self { character_type, ..self.clone() }
    }

    pub fn with_species(&self, species: Species) -> Self {
        Self { species, ..self.clone() }
    }

    /// Fields that differ from their defaults, in display order.
    pub fn active_fields(&self) -> Vec<FilterField> {
        let mut fields = Vec::with_capacity(3);
        if !self.search_term.is_empty() {
            fields.push(FilterField::SearchTerm);
        }
        if self.character_type != CharacterType::All {
            fields.push(FilterField::CharacterType);
        }
        if self.species != Species::All {
            fields.push(FilterField::Species);
        }
        fields
    }

    /// Number of fields differing from default (0–3). Shown as the toggle badge.
    pub fn active_count(&self) -> usize {
        [
            !self.search_term.is_empty(),
            self.character_type != CharacterType::All,
            self.species != Species::All,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    /// Whether `character` passes every selection. `starred` is the caller's
    /// starred flag for that character.
    pub fn matches(&self, character: &Character, starred: bool) -> bool {
        let needle = self.search_term.trim();
        if !needle.is_empty() && !contains_ignore_case(&character.name, needle) {
            return false;
        }
        self.character_type.admits(starred) && self.species.admits(&character.species)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str, species: &str) -> Character {
        Character { id: 1, name: name.into(), species: species.into(), ..Default::default() }
    }

    #[test]
    fn default_is_inactive() {
        let f = FilterState::default();
        assert_eq!(f.search_term, "");
        assert_eq!(f.character_type, CharacterType::All);
        assert_eq!(f.species, Species::All);
        assert!(!f.has_active_filters());
        assert_eq!(f.active_count(), 0);
        assert!(f.active_fields().is_empty());
    }

    #[test]
    fn active_count_tracks_each_field() {
        let f = FilterState::default().with_search_term("Rick");
        assert_eq!(f.active_count(), 1);
        let f = f.with_character_type(CharacterType::Regular);
        assert_eq!(f.active_count(), 2);
        let f = f.with_species(Species::Alien);
        assert_eq!(f.active_count(), 3);
        assert_eq!(
            f.active_fields(),
            vec![FilterField::SearchTerm, FilterField::CharacterType, FilterField::Species]
        );
    }

    #[test]
    fn whitespace_search_term_still_counts_as_active() {
        // The badge reflects the raw field, matching uses the trimmed term.
        let f = FilterState::default().with_search_term("  ");
        assert!(f.has_active_filters());
        assert!(f.matches(&character("Morty Smith", "Human"), false));
    }

    #[test]
    fn with_methods_preserve_other_fields() {
        let base = FilterState::new("Summer", CharacterType::Starred, Species::Human);

        let a = base.with_search_term("Beth");
        assert_eq!(a.character_type, CharacterType::Starred);
        assert_eq!(a.species, Species::Human);

        let b = base.with_character_type(CharacterType::Regular);
        assert_eq!(b.search_term, "Summer");
        assert_eq!(b.species, Species::Human);

        let c = base.with_species(Species::Alien);
        assert_eq!(c.search_term, "Summer");
        assert_eq!(c.character_type, CharacterType::Starred);

        // Source value is untouched.
        assert_eq!(base, FilterState::new("Summer", CharacterType::Starred, Species::Human));
    }

    #[test]
    fn search_is_case_insensitive_substring_of_name() {
        let f = FilterState::default().with_search_term("rick");
        assert!(f.matches(&character("Rick Sanchez", "Human"), false));
        assert!(f.matches(&character("Pickle RICK", "Human"), false));
        assert!(!f.matches(&character("Morty Smith", "Human"), false));
    }

    #[test]
    fn character_type_uses_starred_flag() {
        let c = character("Birdperson", "Alien");
        let starred = FilterState::default().with_character_type(CharacterType::Starred);
        let regular = FilterState::default().with_character_type(CharacterType::Regular);
        assert!(starred.matches(&c, true));
        assert!(!starred.matches(&c, false));
        assert!(regular.matches(&c, false));
        assert!(!regular.matches(&c, true));
    }

    #[test]
    fn species_filter_excludes_other_species() {
        let human = FilterState::default().with_species(Species::Human);
        let alien = FilterState::default().with_species(Species::Alien);
        let robot = character("Butter Robot", "Robot");
        assert!(human.matches(&character("Jerry Smith", "human"), false));
        assert!(!human.matches(&character("Squanchy", "Alien"), false));
        assert!(alien.matches(&character("Squanchy", "Alien"), false));
        assert!(!human.matches(&robot, false));
        assert!(!alien.matches(&robot, false));
        assert!(FilterState::default().matches(&robot, false));
    }

    #[test]
    fn parse_and_display_options() {
        assert_eq!("Starred".parse::<CharacterType>().unwrap(), CharacterType::Starred);
        assert_eq!(" alien ".parse::<Species>().unwrap(), Species::Alien);
        let err = "robot".parse::<Species>().unwrap_err();
        assert!(err.contains("human"), "error should list accepted values: {err}");
        assert_eq!(CharacterType::Regular.to_string(), "regular");
        assert_eq!(Species::Human.label(), "Human");
    }

    #[test]
    fn serializes_with_wire_names() {
        let f = FilterState::new("Rick", CharacterType::Starred, Species::Human);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "searchTerm": "Rick",
                "characterType": "starred",
                "species": "human"
            })
        );
        let partial: FilterState = serde_json::from_str(r#"{"species":"alien"}"#).unwrap();
        assert_eq!(partial, FilterState::default().with_species(Species::Alien));
    }
}
