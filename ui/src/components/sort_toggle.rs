use dioxus::prelude::*;

use crate::t;
use crate::views::SortOrder;

/// Two-state sort switch. Reports the toggled order; the owner persists it.
#[component]
pub fn SortToggle(sort: SortOrder, on_change: EventHandler<SortOrder>) -> Element {
    let label = match sort {
        SortOrder::Listed => t!("sort-listed"),
        SortOrder::AmountDesc => t!("sort-amount"),
    };
    let pressed = sort == SortOrder::AmountDesc;

    rsx! {
        div { class: "sort-toggle",
            span { class: "sort-toggle__caption", {t!("sort-label")} }
            button {
                r#type: "button",
                class: "button button--ghost sort-toggle__button",
                aria_pressed: "{pressed}",
                onclick: move |_| on_change.call(sort.toggled()),
                "{label}"
            }
        }
    }
}
