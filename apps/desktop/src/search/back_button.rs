//! Back control shown on narrow layouts; the caller decides what "back" means.

use dioxus::prelude::*;

#[component]
pub fn BackButton(on_back: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "back-button",
            title: "Back",
            onclick: move |_| on_back.call(()),
            svg {
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                line { x1: "19", y1: "12", x2: "5", y2: "12" }
                polyline { points: "12 19 5 12 12 5" }
            }
        }
    }
}
