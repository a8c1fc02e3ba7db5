//! Root application component: filter bar above the character list.

use dioxus::prelude::*;
use rickdex_core::FilterState;
use tracing::debug;

use crate::characters::CharacterList;
use crate::search::SearchFilter;
use crate::state::*;
use crate::INITIAL_STATE;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Move the pre-launch state into signals exactly once
    use_hook(|| {
        let initial = INITIAL_STATE.lock().ok().and_then(|mut slot| slot.take());
        if let Some(state) = initial {
            *FILTERS.write() = state.config.default_filters.clone();
            *STARRED.write() = state.starred.clone();
            *CORE.write() = Some(state);
        }
    });

    let filters = FILTERS.read().clone();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "titlebar",
                span { class: "titlebar-title", "Rickdex" }
            }

            SearchFilter {
                current_filters: filters,
                on_filter_change: move |next: FilterState| {
                    debug!(active = next.active_count(), "Filters changed");
                    *SELECTED_ID.write() = None;
                    *FILTERS.write() = next;
                },
            }

            div {
                class: "content-area",
                CharacterList {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let core = CORE.read();
    let filters = FILTERS.read();
    let starred = STARRED.read();

    let (shown, total, query_time) = match core.as_ref() {
        Some(state) => {
            let response = state.catalog.filter(&filters, &starred);
            (response.characters.len(), response.total, response.query_time)
        }
        None => (0, 0, 0.0),
    };
    let active = filters.active_count();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-results", "{shown} / {total} characters" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-starred", "{starred.len()} starred" }
            if active > 0 {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-filters", "{active} active filters" }
            }
            span { class: "statusbar-time", "{query_time:.1}ms" }
        }
    }
}
