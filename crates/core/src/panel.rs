//! Filter panel state holder.
//!
//! The panel owns exactly one piece of state, whether it is open. Filter values
//! belong to the caller: every operation reads the caller's current
//! [`FilterState`], builds the replacement, and hands it to a [`FilterSink`].

use tracing::debug;

use crate::filter::{CharacterType, FilterState, Species};

/// Receives every filter value the panel proposes.
pub trait FilterSink {
    fn on_filter_change(&mut self, next: FilterState);
}

impl<F: FnMut(FilterState)> FilterSink for F {
    fn on_filter_change(&mut self, next: FilterState) {
        self(next)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPanel {
    is_open: bool,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle_panel(&mut self) {
        self.is_open = !self.is_open;
        debug!(open = self.is_open, "Filter panel toggled");
    }

    /// Bound to the back control and the confirm button on narrow layouts.
    pub fn close_panel(&mut self) {
        self.is_open = false;
    }

    /// Toggle button highlight: panel open or any filter active.
    pub fn is_highlighted(&self, current: &FilterState) -> bool {
        self.is_open || current.has_active_filters()
    }

    pub fn set_search_term(
        &self,
        current: &FilterState,
        text: impl Into<String>,
        sink: &mut impl FilterSink,
    ) {
        sink.on_filter_change(current.with_search_term(text));
    }

    pub fn set_character_type(
        &self,
        current: &FilterState,
        value: CharacterType,
        sink: &mut impl FilterSink,
    ) {
        sink.on_filter_change(current.with_character_type(value));
    }

    pub fn set_species(&self, current: &FilterState, value: Species, sink: &mut impl FilterSink) {
        sink.on_filter_change(current.with_species(value));
    }

    /// The inline "×" next to the search input: empties only the search term.
    pub fn clear_search(&self, current: &FilterState, sink: &mut impl FilterSink) {
        sink.on_filter_change(current.with_search_term(String::new()));
    }

    pub fn clear_all(&self, sink: &mut impl FilterSink) {
        debug!("Clearing all filters");
        sink.on_filter_change(FilterState::default());
    }
}
