//! Hard-coded user data for the Rally dashboard.
//!
//! The repository is an explicitly constructed, read-only value. The app shell
//! builds one at start-up (`UserData::sample()`) and hands it to every screen
//! through the Dioxus context, so there is no process-wide singleton.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 24-bit display color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    /// CSS hex notation, e.g. `#004940`.
    pub fn css(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub number: u32,
    pub balance: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub name: String,
    pub due: String,
    pub amount: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("no account named {0:?}")]
    AccountNotFound(String),
}

/// Pretend repository for the user's data.
#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    accounts: Vec<Account>,
    bills: Vec<Bill>,
}

impl UserData {
    pub fn new(accounts: Vec<Account>, bills: Vec<Bill>) -> Self {
        Self { accounts, bills }
    }

    /// The sample records from the Rally material study.
    pub fn sample() -> Self {
        let accounts = vec![
            account("Checking", 1234, 2215.13, 0x004940),
            account("Home Savings", 5678, 8676.88, 0x005D57),
            account("Car Savings", 9012, 987.48, 0x04B97F),
            account("Vacation", 3456, 253.0, 0x37EFBA),
        ];
        let bills = vec![
            bill("RedPay Credit", "Jan 29", 45.36, 0xFFDC78),
            bill("Rent", "Feb 9", 1200.0, 0xFF6951),
            bill("TabFine Credit", "Feb 22", 87.33, 0xFFD7D0),
            bill("ABC Loans", "Feb 29", 400.0, 0xFFAC12),
            bill("ABC Loans 2", "Feb 29", 77.4, 0xFFAC12),
        ];
        Self::new(accounts, bills)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    /// Exact-name lookup. The first matching record wins.
    pub fn get_account(&self, name: &str) -> Result<&Account, DataError> {
        self.accounts
            .iter()
            .find(|account| account.name == name)
            .ok_or_else(|| DataError::AccountNotFound(name.to_string()))
    }

    /// Record shown when a screen expects an account but none was named.
    pub fn default_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub fn accounts_total(&self) -> f64 {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    pub fn bills_total(&self) -> f64 {
        self.bills.iter().map(|bill| bill.amount).sum()
    }
}

impl Default for UserData {
    fn default() -> Self {
        Self::sample()
    }
}

fn account(name: &str, number: u32, balance: f64, color: u32) -> Account {
    Account {
        name: name.to_string(),
        number,
        balance,
        color: Rgb(color),
    }
}

fn bill(name: &str, due: &str, amount: f64, color: u32) -> Bill {
    Bill {
        name: name.to_string(),
        due: due.to_string(),
        amount,
        color: Rgb(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_balances_sum_to_statement_total() {
        let data = UserData::sample();
        let rendered: f64 = data.accounts().iter().map(|a| a.balance).sum();
        assert!((rendered - 12132.49).abs() < 1e-6, "got {rendered}");
        assert!((data.accounts_total() - rendered).abs() < f64::EPSILON);
    }

    #[test]
    fn bills_total_matches_records() {
        let data = UserData::sample();
        assert!((data.bills_total() - 1810.09).abs() < 1e-6);
    }

    #[test]
    fn lookup_is_exact_match() {
        let data = UserData::sample();
        assert_eq!(data.get_account("Checking").unwrap().number, 1234);
        assert_eq!(
            data.get_account("checking"),
            Err(DataError::AccountNotFound("checking".into()))
        );
    }

    #[test]
    fn default_account_is_first_record() {
        let data = UserData::sample();
        assert_eq!(data.default_account().map(|a| a.name.as_str()), Some("Checking"));
        assert!(UserData::new(Vec::new(), Vec::new()).default_account().is_none());
    }

    #[test]
    fn colors_render_as_css_hex() {
        assert_eq!(Rgb(0x004940).css(), "#004940");
        assert_eq!(Rgb(0xFFAC12).css(), "#FFAC12");
    }
}
