//! Single-select button group used for the categorical filters.

use dioxus::prelude::*;

/// Renders `options` as a row of buttons; `selected` indexes into `options`.
#[component]
pub fn OptionGroup(
    #[props(into)] label: String,
    options: Vec<&'static str>,
    selected: usize,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "option-group",
            label { class: "option-group-label", "{label}" }
            div {
                class: "option-row",
                for (i, option) in options.iter().enumerate() {
                    button {
                        key: "{option}",
                        class: if i == selected { "option-btn selected" } else { "option-btn" },
                        onclick: move |_| on_select.call(i),
                        "{option}"
                    }
                }
            }
        }
    }
}
