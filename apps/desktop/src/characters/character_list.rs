//! Filtered character list, paged by `page_size` from the config.

use dioxus::prelude::*;
use crate::state::*;

#[component]
pub fn CharacterList() -> Element {
    let mut pages = use_signal(|| 1usize);
    let core = CORE.read();
    let filters = FILTERS.read();
    let starred = STARRED.read();

    let state = match core.as_ref() {
        Some(s) => s,
        None => {
            return rsx! {
                div { class: "list-empty", span { "Loading characters..." } }
            };
        }
    };

    if let Some(err) = &state.load_error {
        return rsx! {
            div {
                class: "list-empty list-error",
                span { "Could not load characters" }
                span { class: "list-error-detail", "{err}" }
            }
        };
    }

    let response = state.catalog.filter(&filters, &starred);
    if response.characters.is_empty() {
        return rsx! {
            div { class: "list-empty", span { "No characters match these filters" } }
        };
    }

    let limit = state.config.page_size.saturating_mul(*pages.read());
    let remaining = response.characters.len().saturating_sub(limit);
    let selected = *SELECTED_ID.read();

    rsx! {
        div {
            class: "character-list",
            for character in response.characters.iter().take(limit) {
                div {
                    key: "{character.id}",
                    class: if selected == Some(character.id) { "character-item active" } else { "character-item" },
                    onclick: {
                        let id = character.id;
                        move |_| { *SELECTED_ID.write() = Some(id); }
                    },
                    if !character.image.is_empty() {
                        img { class: "character-avatar", src: "{character.image}", alt: "{character.name}" }
                    }
                    div {
                        class: "character-text",
                        span { class: "character-name", "{character.name}" }
                        span { class: "character-subtitle", {character.subtitle()} }
                    }
                    button {
                        class: if starred.is_starred(character.id) { "star-btn starred" } else { "star-btn" },
                        title: "Star",
                        onclick: {
                            let id = character.id;
                            move |e: Event<MouseData>| {
                                e.stop_propagation();
                                toggle_star(id);
                            }
                        },
                        if starred.is_starred(character.id) { "\u{2605}" } else { "\u{2606}" }
                    }
                }
            }
            if remaining > 0 {
                button {
                    class: "show-more",
                    onclick: move |_| { *pages.write() += 1; },
                    "Show {remaining} more"
                }
            }
        }
    }
}
