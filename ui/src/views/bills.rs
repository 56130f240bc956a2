use dioxus::prelude::*;

use super::SortOrder;
use crate::components::statement::{StatementBody, StatementItem};
use crate::components::SortToggle;
use crate::data::UserData;
use crate::t;

#[component]
pub fn BillsScreen(
    data: UserData,
    sort: SortOrder,
    on_sort_change: EventHandler<SortOrder>,
) -> Element {
    let mut items: Vec<StatementItem> = data.bills().iter().map(StatementItem::from).collect();
    sort.apply(&mut items, |item| item.amount);

    rsx! {
        section { class: "page page-bills", aria_label: "Bills Screen",
            SortToggle { sort: sort, on_change: on_sort_change }
            StatementBody {
                items: items,
                amounts_total: data.bills_total(),
                circle_label: t!("due"),
            }
        }
    }
}
