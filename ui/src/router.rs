//! Maps the current back-stack entry onto a screen.

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::data::UserData;
use crate::nav::{BackStackEntry, Destination, NavController, NavError, NavOutcome};
use crate::views::{
    AccountsScreen, BillsScreen, OverviewScreen, SingleAccountScreen, SortOrder, LAST_OPENED_KEY,
    SORT_KEY,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Accounts,
    Bills,
    SingleAccount { account_type: Option<String> },
}

pub fn resolve_screen(entry: &BackStackEntry) -> Screen {
    match entry.destination {
        Destination::Overview => Screen::Overview,
        Destination::Accounts => Screen::Accounts,
        Destination::Bills => Screen::Bills,
        Destination::SingleAccount => Screen::SingleAccount {
            account_type: entry
                .argument(Destination::ACCOUNT_TYPE_ARG)
                .map(str::to_string),
        },
    }
}

/// Run a navigation call against the shared controller, logging rejections.
pub fn navigate(
    mut nav: Signal<NavController>,
    op: impl FnOnce(&mut NavController) -> Result<NavOutcome, NavError>,
) {
    if let Err(err) = nav.with_mut(op) {
        warn!("navigation rejected: {err}");
    }
}

#[component]
pub fn RallyNavHost() -> Element {
    let nav = use_context::<Signal<NavController>>();
    let data = use_context::<UserData>();

    let (entry, revision) = {
        let controller = nav.read();
        (controller.current_entry().clone(), controller.revision())
    };
    let entry_id = entry.id;
    let screen = resolve_screen(&entry);
    debug!(route = %entry.route, revision, "nav host render");

    let open_account = move |name: String| navigate(nav, |c| c.navigate_to_single_account(&name));

    let body = match screen {
        Screen::Overview => rsx! {
            OverviewScreen {
                data: data.clone(),
                on_click_see_all_accounts: move |_| {
                    navigate(nav, |c| c.navigate_single_top(Destination::Accounts.route()))
                },
                on_click_see_all_bills: move |_| {
                    navigate(nav, |c| c.navigate_single_top(Destination::Bills.route()))
                },
                on_account_click: open_account,
            }
        },
        Screen::Accounts => {
            let sort = entry.state.get::<SortOrder>(SORT_KEY).unwrap_or_default();
            let last_opened = entry.state.get::<String>(LAST_OPENED_KEY);
            rsx! {
                AccountsScreen {
                    data: data.clone(),
                    sort: sort,
                    last_opened: last_opened,
                    on_sort_change: move |order: SortOrder| {
                        let mut nav = nav;
                        nav.with_mut(|c| c.update_current_state(|s| s.put(SORT_KEY, order)));
                    },
                    on_account_click: move |name: String| {
                        let mut nav = nav;
                        nav.with_mut(|c| c.update_current_state(|s| s.put(LAST_OPENED_KEY, &name)));
                        open_account(name);
                    },
                }
            }
        }
        Screen::Bills => {
            let sort = entry.state.get::<SortOrder>(SORT_KEY).unwrap_or_default();
            rsx! {
                BillsScreen {
                    data: data.clone(),
                    sort: sort,
                    on_sort_change: move |order: SortOrder| {
                        let mut nav = nav;
                        nav.with_mut(|c| c.update_current_state(|s| s.put(SORT_KEY, order)));
                    },
                }
            }
        }
        Screen::SingleAccount { account_type } => rsx! {
            SingleAccountScreen { data: data.clone(), account_type: account_type }
        },
    };

    rsx! {
        main { class: "rally-content", key: "{entry_id}", {body} }
    }
}
