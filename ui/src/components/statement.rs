use dioxus::prelude::*;

use crate::core::format::{format_account_number, format_amount, proportion};
use crate::data::{Account, Bill, Rgb};
use crate::t;

/// A row in a statement: one account or one bill.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementItem {
    pub name: String,
    pub detail: String,
    pub amount: f64,
    pub color: Rgb,
    pub highlighted: bool,
}

impl From<&Account> for StatementItem {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            detail: format_account_number(account.number),
            amount: account.balance,
            color: account.color,
            highlighted: false,
        }
    }
}

impl From<&Bill> for StatementItem {
    fn from(bill: &Bill) -> Self {
        Self {
            name: bill.name.clone(),
            detail: t!("bill-due", date = bill.due.as_str()),
            amount: bill.amount,
            color: bill.color,
            highlighted: false,
        }
    }
}

/// Width (percent) and CSS color of each segment of the proportion bar.
pub fn proportion_segments(items: &[StatementItem], total: f64) -> Vec<(f64, String)> {
    items
        .iter()
        .map(|item| (proportion(item.amount, total), item.color.css()))
        .collect()
}

/// Header with the total, a proportion bar and the list of rows. Rows are
/// clickable only when `clickable` is set; clicks report the row name.
#[component]
pub fn StatementBody(
    items: Vec<StatementItem>,
    amounts_total: f64,
    circle_label: String,
    #[props(default)] clickable: bool,
    #[props(default)] on_item_click: EventHandler<String>,
) -> Element {
    let segments = proportion_segments(&items, amounts_total);
    let total = format_amount(amounts_total);

    rsx! {
        section { class: "statement",
            div { class: "statement__summary",
                span { class: "statement__label", "{circle_label}" }
                span { class: "statement__total", "{total}" }
            }
            div { class: "statement__bar", aria_hidden: "true",
                { segments.into_iter().map(|(width, color)| {
                    let style = format!("width:{width:.2}%;background:{color}");
                    rsx! {
                        span { class: "statement__segment", style: "{style}" }
                    }
                })}
            }
            ul { class: "statement__rows",
                { items.into_iter().map(|item| {
                    let key = item.name.clone();
                    rsx! {
                        StatementRow {
                            key: "{key}",
                            item: item,
                            clickable: clickable,
                            on_click: on_item_click,
                        }
                    }
                })}
            }
        }
    }
}

#[component]
pub fn StatementRow(
    item: StatementItem,
    #[props(default)] clickable: bool,
    #[props(default)] on_click: EventHandler<String>,
) -> Element {
    let StatementItem {
        name,
        detail,
        amount,
        color,
        highlighted,
    } = item;
    let amount = format_amount(amount);
    let indicator = format!("background:{}", color.css());
    let class = match (highlighted, clickable) {
        (true, _) => "statement-row statement-row--highlighted",
        (false, true) => "statement-row statement-row--clickable",
        (false, false) => "statement-row",
    };
    let clicked = name.clone();

    rsx! {
        li {
            class: "{class}",
            onclick: move |_| {
                if clickable {
                    on_click.call(clicked.clone());
                }
            },
            span { class: "statement-row__indicator", style: "{indicator}" }
            div { class: "statement-row__text",
                span { class: "statement-row__name", "{name}" }
                span { class: "statement-row__detail", "{detail}" }
            }
            span { class: "statement-row__amount", "{amount}" }
        }
    }
}
