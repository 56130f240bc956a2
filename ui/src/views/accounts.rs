use dioxus::prelude::*;

use super::SortOrder;
use crate::components::statement::{StatementBody, StatementItem};
use crate::components::SortToggle;
use crate::data::UserData;
use crate::t;

/// The Accounts screen: every account, total of all balances.
#[component]
pub fn AccountsScreen(
    data: UserData,
    sort: SortOrder,
    #[props(!optional)] last_opened: Option<String>,
    on_sort_change: EventHandler<SortOrder>,
    on_account_click: EventHandler<String>,
) -> Element {
    let mut items: Vec<StatementItem> = data
        .accounts()
        .iter()
        .map(|account| {
            let mut item = StatementItem::from(account);
            item.highlighted = last_opened.as_deref() == Some(account.name.as_str());
            item
        })
        .collect();
    sort.apply(&mut items, |item| item.amount);

    rsx! {
        section { class: "page page-accounts", aria_label: "Accounts Screen",
            SortToggle { sort: sort, on_change: on_sort_change }
            StatementBody {
                items: items,
                amounts_total: data.accounts_total(),
                circle_label: t!("total"),
                clickable: true,
                on_item_click: on_account_click,
            }
        }
    }
}

/// Detail screen for a single account. Without a name the first account is
/// shown; an unknown name renders a not-found card.
#[component]
pub fn SingleAccountScreen(
    data: UserData,
    #[props(!optional)] account_type: Option<String>,
) -> Element {
    let account = match account_type.as_deref() {
        Some(name) => data.get_account(name).ok(),
        None => data.default_account(),
    };

    match account {
        Some(account) => {
            let item = StatementItem::from(account);
            rsx! {
                section { class: "page page-single-account",
                    StatementBody {
                        items: vec![item],
                        amounts_total: account.balance,
                        circle_label: account.name.clone(),
                    }
                }
            }
        }
        None => {
            let name = account_type.unwrap_or_default();
            tracing::warn!("single account screen: no account named {name:?}");
            rsx! {
                section { class: "page page-single-account",
                    div { class: "rally-card rally-card--empty",
                        p { {t!("account-not-found", name = name.as_str())} }
                    }
                }
            }
        }
    }
}
