use dioxus::prelude::*;
use tracing::{info, warn};

use crate::components::RallyTabRow;
use crate::data::UserData;
use crate::i18n;
use crate::nav::{Destination, NavController, NavGraph, TAB_ROW_SCREENS};
use crate::router::{navigate, RallyNavHost};
use crate::t;

/// Root component shared by every platform.
///
/// Provides the repository and the navigation controller through context,
/// applies an optional launch deep link (e.g. `rally://single_account/Rent`)
/// and renders the tab row above the routed screen.
#[component]
pub fn RallyApp(#[props(!optional)] deep_link: Option<String>) -> Element {
    i18n::init();

    // Global reactive language code; the tab row's selector updates it.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    use_context_provider(UserData::sample);

    let nav = use_signal(|| {
        let graph = NavGraph::rally().expect("Rally destinations have unique routes");
        let mut controller = NavController::new(graph);
        if let Some(uri) = deep_link.as_deref() {
            match controller.handle_deep_link(uri) {
                Ok(outcome) => info!(uri, ?outcome, "opened launch deep link"),
                Err(err) => warn!("ignoring launch deep link: {err}"),
            }
        }
        controller
    });
    use_context_provider(|| nav);

    let (current_screen, can_go_back) = {
        let controller = nav.read();
        (controller.current_screen(), controller.depth() > 1)
    };

    rsx! {
        div {
            class: "rally-app",
            key: "{lang_code()}",
            div { class: "rally-app__bar",
                if can_go_back {
                    button {
                        r#type: "button",
                        class: "button button--ghost rally-app__back",
                        aria_label: t!("nav-back"),
                        onclick: move |_| {
                            let mut nav = nav;
                            nav.with_mut(|c| c.pop_back_stack());
                        },
                        "‹"
                    }
                }
                RallyTabRow {
                    all_screens: TAB_ROW_SCREENS.to_vec(),
                    current_screen: current_screen,
                    on_tab_selected: move |destination: Destination| {
                        navigate(nav, |c| c.navigate_single_top(destination.route()))
                    },
                }
            }
            RallyNavHost {}
        }
    }
}
