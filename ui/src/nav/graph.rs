//! Destination registry: which routes exist and where navigation starts.

use std::collections::HashSet;

use super::destination::{Destination, ALL_DESTINATIONS};
use super::pattern::{Arguments, RoutePattern};
use super::NavError;

#[derive(Debug, Clone, PartialEq)]
pub struct NavGraph {
    start: Destination,
    entries: Vec<(Destination, RoutePattern)>,
}

impl NavGraph {
    /// Register `destinations`, rejecting duplicate routes and a start
    /// destination that is not part of the graph.
    pub fn new(start: Destination, destinations: &[Destination]) -> Result<Self, NavError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(destinations.len());

        for &destination in destinations {
            if !seen.insert(destination.route()) {
                return Err(NavError::DuplicateRoute(destination.route()));
            }
            entries.push((destination, destination.route_pattern()));
        }

        if !seen.contains(start.route()) {
            return Err(NavError::UnregisteredStart(start.route()));
        }

        Ok(Self { start, entries })
    }

    /// The Rally graph: three tabs plus the single-account detail, starting
    /// at the overview.
    pub fn rally() -> Result<Self, NavError> {
        Self::new(Destination::Overview, &ALL_DESTINATIONS)
    }

    pub fn start(&self) -> Destination {
        self.start
    }

    pub fn destinations(&self) -> impl Iterator<Item = Destination> + '_ {
        self.entries.iter().map(|(destination, _)| *destination)
    }

    /// Find the destination a concrete route points at, with its bindings.
    pub fn resolve(&self, route: &str) -> Option<(Destination, Arguments)> {
        self.entries.iter().find_map(|(destination, pattern)| {
            pattern.matches(route).map(|args| (*destination, args))
        })
    }

    /// Map an external URI onto the in-app route it links to.
    pub fn resolve_deep_link(&self, uri: &str) -> Option<String> {
        self.entries.iter().find_map(|(destination, pattern)| {
            let args = destination.deep_link()?.matches(uri)?;
            Some(pattern.fill(&args))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rally_graph_registers_every_destination() {
        let graph = NavGraph::rally().unwrap();
        assert_eq!(graph.start(), Destination::Overview);
        assert_eq!(graph.destinations().count(), 4);
    }

    #[test]
    fn duplicate_route_fails_fast() {
        let err = NavGraph::new(
            Destination::Overview,
            &[Destination::Overview, Destination::Accounts, Destination::Accounts],
        )
        .unwrap_err();
        assert_eq!(err, NavError::DuplicateRoute("accounts"));
    }

    #[test]
    fn start_must_be_registered() {
        let err = NavGraph::new(Destination::Bills, &[Destination::Overview]).unwrap_err();
        assert_eq!(err, NavError::UnregisteredStart("bills"));
    }

    #[test]
    fn resolve_binds_arguments() {
        let graph = NavGraph::rally().unwrap();
        let (destination, args) = graph.resolve("single_account/Checking").unwrap();
        assert_eq!(destination, Destination::SingleAccount);
        assert_eq!(args[Destination::ACCOUNT_TYPE_ARG], "Checking");

        assert_eq!(graph.resolve("bills").unwrap().0, Destination::Bills);
        assert!(graph.resolve("settings").is_none());
        assert!(graph.resolve("single_account").is_none());
    }

    #[test]
    fn deep_link_maps_to_route() {
        let graph = NavGraph::rally().unwrap();
        assert_eq!(
            graph.resolve_deep_link("rally://single_account/Rent").as_deref(),
            Some("single_account/Rent")
        );
        assert_eq!(graph.resolve_deep_link("rally://overview"), None);
    }

    #[test]
    fn unregistered_destinations_do_not_resolve() {
        let graph = NavGraph::new(Destination::Overview, &[Destination::Overview]).unwrap();
        assert!(graph.resolve("accounts").is_none());
        assert!(graph.resolve_deep_link("rally://single_account/Rent").is_none());
        assert!(graph.destinations().all(|d| d != Destination::SingleAccount));
    }
}
