//! Search and filter bar. Owns only whether the panel is open; every filter
//! change is proposed to the caller through `on_filter_change`.

use dioxus::prelude::*;
use rickdex_core::{CharacterType, FilterPanel, FilterState, Species};

use super::back_button::BackButton;
use super::option_group::OptionGroup;

/// Adapt the caller's handler to the panel's sink.
fn emit(handler: EventHandler<FilterState>) -> impl FnMut(FilterState) {
    move |next| handler.call(next)
}

fn position<T: PartialEq>(options: &[T], value: &T) -> usize {
    options.iter().position(|o| o == value).unwrap_or(0)
}

#[component]
pub fn SearchFilter(
    current_filters: FilterState,
    on_filter_change: EventHandler<FilterState>,
) -> Element {
    let mut panel = use_signal(FilterPanel::new);

    let is_open = panel.read().is_open();
    let highlighted = panel.read().is_highlighted(&current_filters);
    let has_active = current_filters.has_active_filters();
    let active_count = current_filters.active_count();
    let has_search = !current_filters.search_term.is_empty();

    let type_labels: Vec<&'static str> = CharacterType::ALL.iter().map(|t| t.label()).collect();
    let species_labels: Vec<&'static str> = Species::ALL.iter().map(|s| s.label()).collect();
    let type_idx = position(&CharacterType::ALL, &current_filters.character_type);
    let species_idx = position(&Species::ALL, &current_filters.species);

    rsx! {
        div {
            class: "search-filter",

            div {
                class: "search-bar",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                div {
                    class: "search-input-wrap",
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search or filter characters.",
                        value: "{current_filters.search_term}",
                        oninput: {
                            let current = current_filters.clone();
                            move |e: Event<FormData>| {
                                panel.read().set_search_term(&current, e.value(), &mut emit(on_filter_change));
                            }
                        },
                    }

                    // Clear search only
                    if has_search {
                        button {
                            class: "search-clear",
                            onclick: {
                                let current = current_filters.clone();
                                move |_| panel.read().clear_search(&current, &mut emit(on_filter_change))
                            },
                            "\u{00D7}"
                        }
                    }
                }

                // Panel toggle with active-filter badge
                button {
                    class: if highlighted { "filter-toggle highlighted" } else { "filter-toggle" },
                    title: "Filters",
                    onclick: move |_| panel.write().toggle_panel(),
                    svg {
                        class: "filter-icon",
                        width: "20",
                        height: "20",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        line { x1: "21", y1: "4", x2: "14", y2: "4" }
                        line { x1: "10", y1: "4", x2: "3", y2: "4" }
                        line { x1: "21", y1: "12", x2: "12", y2: "12" }
                        line { x1: "8", y1: "12", x2: "3", y2: "12" }
                        line { x1: "21", y1: "20", x2: "16", y2: "20" }
                        line { x1: "12", y1: "20", x2: "3", y2: "20" }
                    }
                    if has_active {
                        span { class: "filter-badge", "{active_count}" }
                    }
                }
            }

            if is_open {
                div {
                    class: "filter-panel",

                    // Narrow layouts: back control + title
                    div {
                        class: "filter-panel-header narrow-only",
                        BackButton { on_back: move |_| panel.write().close_panel() }
                        p { class: "filter-panel-title", "Filter" }
                    }

                    div {
                        class: "filter-panel-actions",
                        if has_active {
                            button {
                                class: "clear-all",
                                onclick: move |_| panel.read().clear_all(&mut emit(on_filter_change)),
                                "Clear all"
                            }
                        }
                    }

                    div {
                        class: "filter-panel-body",
                        div {
                            OptionGroup {
                                label: "Character",
                                options: type_labels,
                                selected: type_idx,
                                on_select: {
                                    let current = current_filters.clone();
                                    move |i: usize| {
                                        panel.read().set_character_type(
                                            &current,
                                            CharacterType::ALL[i],
                                            &mut emit(on_filter_change),
                                        );
                                    }
                                },
                            }
                            OptionGroup {
                                label: "Species",
                                options: species_labels,
                                selected: species_idx,
                                on_select: {
                                    let current = current_filters.clone();
                                    move |i: usize| {
                                        panel.read().set_species(
                                            &current,
                                            Species::ALL[i],
                                            &mut emit(on_filter_change),
                                        );
                                    }
                                },
                            }
                        }

                        // Narrow layouts: confirm closes the panel
                        div {
                            class: "filter-panel-confirm narrow-only",
                            button {
                                class: "confirm-btn",
                                onclick: move |_| panel.write().close_panel(),
                                "Filter"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_finds_selected_option() {
        assert_eq!(position(&CharacterType::ALL, &CharacterType::Regular), 2);
        assert_eq!(position(&Species::ALL, &Species::All), 0);
        assert_eq!(position(&Species::ALL, &Species::Alien), 2);
    }
}
