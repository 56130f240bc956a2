//! Toolkit-independent navigation: destinations, route patterns, the
//! registry and the single-top back-stack controller.

pub mod controller;
pub mod destination;
pub mod graph;
pub mod pattern;

pub use controller::{BackStackEntry, NavController, NavOutcome, SavedState};
pub use destination::{ArgSpec, ArgType, Destination, Icon, ALL_DESTINATIONS, TAB_ROW_SCREENS};
pub use graph::NavGraph;
pub use pattern::{Arguments, DeepLinkPattern, RoutePattern};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("route {0:?} is registered more than once")]
    DuplicateRoute(&'static str),
    #[error("start destination {0:?} is not registered")]
    UnregisteredStart(&'static str),
    #[error("no destination matches route {0:?}")]
    UnknownRoute(String),
    #[error("no destination handles deep link {0:?}")]
    UnknownDeepLink(String),
}
