use crate::i18n::{self, destination_label};
use crate::nav::Destination;
use crate::t;
use dioxus::prelude::*;

// Tab row stylesheet (linked as an asset, inlined in release native builds)
const TAB_ROW_CSS: Asset = asset!("/assets/styling/tab_row.css");
const TAB_ROW_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/tab_row.css"
));

/// One rendered tab: which destination it opens and whether it is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabModel {
    pub destination: Destination,
    pub selected: bool,
}

/// Selection is derived from the current screen only, so the row can never
/// disagree with the navigation state.
pub fn tab_row_model(all_screens: &[Destination], current_screen: Destination) -> Vec<TabModel> {
    all_screens
        .iter()
        .map(|&destination| TabModel {
            destination,
            selected: destination == current_screen,
        })
        .collect()
}

/// Language the selector shows on mount. The app-wide code wins, so the row
/// remounted after a switch shows the language just picked.
fn initial_language(shared: Option<String>) -> String {
    shared.unwrap_or_else(i18n::current_language)
}

/// Top tab row. Activating a tab reports its destination through
/// `on_tab_selected`; the caller decides how to navigate.
///
/// The language selector re-renders through a local signal and, when the
/// platform provides one, a global `Signal<String>` language code in context.
#[component]
pub fn RallyTabRow(
    all_screens: Vec<Destination>,
    current_screen: Destination,
    on_tab_selected: EventHandler<Destination>,
) -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(|| initial_language(lang_code_ctx.map(|c| c())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Reactive dependency on the global language code (if provided)
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("language switch to {val} failed: {err}"),
        }
    };

    let tabs = tab_row_model(&all_screens, current_screen);

    rsx! {
        document::Link { rel: "stylesheet", href: TAB_ROW_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{TAB_ROW_CSS_INLINE}" }
        }

        header { class: "rally-tabs",
            div { style: "display:none", "{lang_marker}" }
            nav { class: "rally-tabs__row", role: "tablist",
                { tabs.into_iter().map(|tab| {
                    let route = tab.destination.route();
                    rsx! {
                        RallyTab {
                            key: "{route}",
                            destination: tab.destination,
                            selected: tab.selected,
                            on_selected: on_tab_selected,
                        }
                    }
                })}
            }

            if show_switcher {
                div { class: "rally-tabs__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang()}",
                        oninput: on_change,
                        { langs().iter().map(|code| {
                            let c = code.clone();
                            rsx!{
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        })}
                    }
                }
            }
        }
    }
}

#[component]
fn RallyTab(
    destination: Destination,
    selected: bool,
    on_selected: EventHandler<Destination>,
) -> Element {
    let label = destination_label(destination);
    let upper = label.to_uppercase();
    let icon = destination.icon().svg_path();
    let class = if selected {
        "rally-tab rally-tab--selected"
    } else {
        "rally-tab"
    };

    rsx! {
        button {
            r#type: "button",
            role: "tab",
            class: "{class}",
            aria_selected: "{selected}",
            aria_label: "{label}",
            onclick: move |_| on_selected.call(destination),
            svg {
                class: "rally-tab__icon",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: icon }
            }
            if selected {
                span { class: "rally-tab__label", "{upper}" }
            }
        }
    }
}
