use dioxus::prelude::*;

use crate::components::statement::{StatementItem, StatementRow};
use crate::core::format::format_amount;
use crate::data::UserData;
use crate::t;

/// Rows shown per card before "See all".
const SHOWN_ITEMS: usize = 3;

/// The Overview screen: an alert plus summary cards for accounts and bills.
#[component]
pub fn OverviewScreen(
    data: UserData,
    on_click_see_all_accounts: EventHandler<()>,
    on_click_see_all_bills: EventHandler<()>,
    on_account_click: EventHandler<String>,
) -> Element {
    let accounts: Vec<StatementItem> = data.accounts().iter().map(StatementItem::from).collect();
    let bills: Vec<StatementItem> = data.bills().iter().map(StatementItem::from).collect();

    rsx! {
        section { class: "page page-overview", aria_label: "Overview Screen",
            AlertCard {}
            OverviewCard {
                title: t!("overview-accounts-title"),
                amount: data.accounts_total(),
                items: accounts,
                rows_clickable: true,
                on_row_click: on_account_click,
                on_see_all: on_click_see_all_accounts,
            }
            OverviewCard {
                title: t!("overview-bills-title"),
                amount: data.bills_total(),
                items: bills,
                on_see_all: on_click_see_all_bills,
            }
        }
    }
}

#[component]
fn AlertCard() -> Element {
    rsx! {
        div { class: "rally-card rally-card--alert", role: "alert",
            div { class: "rally-card__header",
                h2 { class: "rally-card__title", {t!("overview-alerts-title")} }
            }
            p { class: "rally-card__message", {t!("overview-alert-message")} }
        }
    }
}

#[component]
fn OverviewCard(
    title: String,
    amount: f64,
    items: Vec<StatementItem>,
    #[props(default)] rows_clickable: bool,
    #[props(default)] on_row_click: EventHandler<String>,
    on_see_all: EventHandler<()>,
) -> Element {
    let total = format_amount(amount);

    rsx! {
        div { class: "rally-card",
            div { class: "rally-card__header",
                h2 { class: "rally-card__title", "{title}" }
                span { class: "rally-card__total", "{total}" }
            }
            ul { class: "statement__rows",
                { items.into_iter().take(SHOWN_ITEMS).map(|item| {
                    let key = item.name.clone();
                    rsx! {
                        StatementRow {
                            key: "{key}",
                            item: item,
                            clickable: rows_clickable,
                            on_click: on_row_click,
                        }
                    }
                })}
            }
            button {
                r#type: "button",
                class: "button button--ghost rally-card__see-all",
                onclick: move |_| on_see_all.call(()),
                {t!("see-all")}
            }
        }
    }
}
