//! Back-stack owner for the Rally app.
//!
//! All navigation goes through [`NavController::navigate_single_top`]: pop
//! back to the start destination (saving what was popped), then push the
//! target unless it is already on top, restoring any state saved for it
//! earlier. Under this policy the stack never holds more than the start entry
//! plus one other.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::destination::Destination;
use super::graph::NavGraph;
use super::pattern::Arguments;
use super::NavError;

/// Opaque per-entry UI state (sort order, highlighted row, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedState(Map<String, Value>);

impl SavedState {
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn put<T: Serialize>(&mut self, key: &str, value: T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.0.insert(key.to_string(), value);
            }
            Err(err) => debug!("dropping unserializable state {key:?}: {err}"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackStackEntry {
    pub id: u64,
    pub destination: Destination,
    /// Concrete route with arguments substituted, e.g. `single_account/Rent`.
    pub route: String,
    pub arguments: Arguments,
    pub state: SavedState,
}

impl BackStackEntry {
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}

/// What a navigation call did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Target was already the top entry; nothing changed.
    AlreadyOnTop,
    /// Stack popped back to the start entry, which was the target.
    ReturnedToStart,
    /// Fresh entry pushed with default state.
    Pushed,
    /// Entry pushed with the state saved when it was last popped.
    Restored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavController {
    graph: NavGraph,
    stack: Vec<BackStackEntry>,
    saved: HashMap<String, SavedState>,
    next_id: u64,
    revision: u64,
}

impl NavController {
    pub fn new(graph: NavGraph) -> Self {
        let start = graph.start();
        let mut controller = Self {
            graph,
            stack: Vec::new(),
            saved: HashMap::new(),
            next_id: 0,
            revision: 0,
        };
        let entry = controller.make_entry(
            start,
            start.route_pattern().fill(&Arguments::new()),
            Arguments::new(),
            SavedState::default(),
        );
        controller.stack.push(entry);
        controller
    }

    pub fn back_stack(&self) -> &[BackStackEntry] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Bumped on every mutation of the stack or of an entry's state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn current_entry(&self) -> &BackStackEntry {
        // The start entry is pushed in `new` and never popped.
        &self.stack[self.stack.len() - 1]
    }

    /// The tab destination matching the current entry, or the start
    /// destination when the current entry is not a tab (e.g. account detail).
    pub fn current_screen(&self) -> Destination {
        let current = self.current_entry().destination;
        self.graph
            .destinations()
            .filter(|destination| destination.is_tab())
            .find(|destination| destination.route() == current.route())
            .unwrap_or_else(|| self.graph.start())
    }

    /// State saved for a popped route, waiting to be restored.
    pub fn saved_state(&self, route: &str) -> Option<&SavedState> {
        self.saved.get(route)
    }

    pub fn navigate_single_top(&mut self, route: &str) -> Result<NavOutcome, NavError> {
        let (destination, arguments) = self
            .graph
            .resolve(route)
            .ok_or_else(|| NavError::UnknownRoute(route.to_string()))?;

        if self.current_entry().route == route {
            debug!(route, "already on top");
            return Ok(NavOutcome::AlreadyOnTop);
        }

        while self.stack.len() > 1 {
            if let Some(popped) = self.stack.pop() {
                if popped.state.is_empty() {
                    continue;
                }
                debug!(route = %popped.route, "saving state of popped entry");
                self.saved.insert(popped.route, popped.state);
            }
        }
        self.revision += 1;

        if self.stack[0].route == route {
            debug!(route, "returned to start");
            return Ok(NavOutcome::ReturnedToStart);
        }

        let (state, outcome) = match self.saved.remove(route) {
            Some(state) => (state, NavOutcome::Restored),
            None => (SavedState::default(), NavOutcome::Pushed),
        };
        let entry = self.make_entry(destination, route.to_string(), arguments, state);
        debug!(route, id = entry.id, ?outcome, "navigated");
        self.stack.push(entry);
        Ok(outcome)
    }

    /// Open the detail screen for `account_name`. The name is not checked
    /// against the repository; the screen handles unknown accounts. A name
    /// that is empty or contains `/` cannot form a route and is rejected with
    /// [`NavError::UnknownRoute`].
    pub fn navigate_to_single_account(&mut self, account_name: &str) -> Result<NavOutcome, NavError> {
        let mut arguments = Arguments::new();
        arguments.insert(
            Destination::ACCOUNT_TYPE_ARG.to_string(),
            account_name.to_string(),
        );
        let route = Destination::SingleAccount.route_pattern().fill(&arguments);
        self.navigate_single_top(&route)
    }

    /// Navigate from an external URI such as `rally://single_account/Rent`.
    pub fn handle_deep_link(&mut self, uri: &str) -> Result<NavOutcome, NavError> {
        let route = self
            .graph
            .resolve_deep_link(uri)
            .ok_or_else(|| NavError::UnknownDeepLink(uri.to_string()))?;
        debug!(uri, %route, "deep link");
        self.navigate_single_top(&route)
    }

    /// System back. Drops the top entry and its state; the start entry stays.
    pub fn pop_back_stack(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(popped) = self.stack.pop() {
            debug!(route = %popped.route, "popped");
        }
        self.revision += 1;
        true
    }

    pub fn update_current_state(&mut self, update: impl FnOnce(&mut SavedState)) {
        let last = self.stack.len() - 1;
        update(&mut self.stack[last].state);
        self.revision += 1;
    }

    fn make_entry(
        &mut self,
        destination: Destination,
        route: String,
        arguments: Arguments,
        state: SavedState,
    ) -> BackStackEntry {
        let id = self.next_id;
        self.next_id += 1;
        BackStackEntry {
            id,
            destination,
            route,
            arguments,
            state,
        }
    }
}
