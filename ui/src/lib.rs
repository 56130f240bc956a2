//! Shared UI crate for Rally. Navigation, data and views live here; the
//! platform crates only launch [`RallyApp`].

pub mod core;
pub mod data;
pub mod i18n;
pub mod nav;
pub mod router;
pub mod views;

mod app;
pub use app::RallyApp;

pub mod components {
    // Statement body and rows shared by every screen (components/statement.rs)
    pub mod statement;
    pub use statement::{StatementBody, StatementItem, StatementRow};

    // Top destination tabs (components/tab_row.rs)
    pub mod tab_row;
    pub use tab_row::{tab_row_model, RallyTabRow, TabModel};

    mod sort_toggle;
    pub use sort_toggle::SortToggle;
}
