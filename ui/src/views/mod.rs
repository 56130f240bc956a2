//! Rally screens. Each takes plain data and callbacks; navigation is wired
//! by the router.

mod accounts;
pub use accounts::{AccountsScreen, SingleAccountScreen};

mod bills;
pub use bills::BillsScreen;

mod overview;
pub use overview::OverviewScreen;

use serde::{Deserialize, Serialize};

/// Saved-state key for a screen's [`SortOrder`].
pub const SORT_KEY: &str = "sort";
/// Saved-state key for the account last opened from the Accounts screen.
pub const LAST_OPENED_KEY: &str = "last_opened";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Listed,
    AmountDesc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Listed => SortOrder::AmountDesc,
            SortOrder::AmountDesc => SortOrder::Listed,
        }
    }

    /// Reorder `items` in place. `Listed` keeps repository order.
    pub fn apply<T>(self, items: &mut [T], amount: impl Fn(&T) -> f64) {
        if self == SortOrder::AmountDesc {
            items.sort_by(|a, b| amount(b).total_cmp(&amount(a)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_sort_is_descending_and_stable() {
        let mut items = vec![("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 2.0)];
        SortOrder::AmountDesc.apply(&mut items, |item| item.1);
        let names: Vec<_> = items.iter().map(|item| item.0).collect();
        assert_eq!(names, ["b", "d", "a", "c"]);
    }

    #[test]
    fn listed_order_is_untouched() {
        let mut items = vec![3.0, 1.0, 2.0];
        SortOrder::Listed.apply(&mut items, |v| *v);
        assert_eq!(items, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn sort_order_round_trips_through_saved_state() {
        let mut state = crate::nav::SavedState::default();
        state.put(SORT_KEY, SortOrder::AmountDesc);
        assert_eq!(state.get::<SortOrder>(SORT_KEY), Some(SortOrder::AmountDesc));
        assert_eq!(SortOrder::AmountDesc.toggled(), SortOrder::Listed);
    }
}
