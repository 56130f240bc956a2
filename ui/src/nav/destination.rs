//! The closed set of Rally navigation destinations and their static metadata.

use super::pattern::{DeepLinkPattern, RoutePattern};

/// Material icon used for a destination, rendered as an inline SVG path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    PieChart,
    AttachMoney,
    MoneyOff,
    Money,
}

impl Icon {
    /// SVG path data on a 24x24 viewbox.
    pub fn svg_path(self) -> &'static str {
        match self {
            Icon::PieChart => "M11 2v20c-5.07-.5-9-4.79-9-10s3.93-9.5 9-10zm2.03 0v8.99H22c-.47-4.74-4.24-8.52-8.97-8.99zm0 11.01V22c4.74-.47 8.5-4.25 8.97-8.99h-8.97z",
            Icon::AttachMoney => "M11.8 10.9c-2.27-.59-3-1.2-3-2.15 0-1.09 1.01-1.85 2.7-1.85 1.78 0 2.44.85 2.5 2.1h2.21c-.07-1.72-1.12-3.3-3.21-3.81V3h-3v2.16c-1.94.42-3.5 1.68-3.5 3.61 0 2.31 1.91 3.46 4.7 4.13 2.5.6 3 1.48 3 2.41 0 .69-.49 1.79-2.7 1.79-2.06 0-2.87-.92-2.98-2.1h-2.2c.12 2.19 1.76 3.42 3.68 3.83V21h3v-2.15c1.95-.37 3.5-1.5 3.5-3.55 0-2.84-2.43-3.81-4.7-4.4z",
            Icon::MoneyOff => "M12.5 6.9c1.78 0 2.44.85 2.5 2.1h2.21c-.07-1.72-1.12-3.3-3.21-3.81V3h-3v2.16c-.53.12-1.03.3-1.48.54l1.47 1.47c.41-.17.91-.27 1.51-.27zM5.33 4.06L4.06 5.33 7.5 8.77c0 2.08 1.56 3.21 3.91 3.91l3.51 3.51c-.34.48-1.05.91-2.42.91-2.06 0-2.87-.92-2.98-2.1h-2.2c.12 2.19 1.76 3.42 3.68 3.83V21h3v-2.15c.96-.18 1.82-.55 2.45-1.12l2.22 2.22 1.27-1.27L5.33 4.06z",
            Icon::Money => "M5 8h2v8H5zm7 0H9c-.55 0-1 .45-1 1v6c0 .55.45 1 1 1h3c.55 0 1-.45 1-1V9c0-.55-.45-1-1-1zm-1 6h-1v-4h1v4zm7-6h-3c-.55 0-1 .45-1 1v6c0 .55.45 1 1 1h3c.55 0 1-.45 1-1V9c0-.55-.45-1-1-1zm-1 6h-1v-4h1v4zM2 4v16h20V4H2zm2 14V6h16v12H4z",
        }
    }
}

/// Declared type of a navigation argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: ArgType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Destination {
    Overview,
    Accounts,
    Bills,
    SingleAccount,
}

/// Screens shown in the top tab row, in display order.
pub const TAB_ROW_SCREENS: [Destination; 3] = [
    Destination::Overview,
    Destination::Accounts,
    Destination::Bills,
];

/// Every destination the app registers.
pub const ALL_DESTINATIONS: [Destination; 4] = [
    Destination::Overview,
    Destination::Accounts,
    Destination::Bills,
    Destination::SingleAccount,
];

impl Destination {
    pub const ACCOUNT_TYPE_ARG: &'static str = "account_type";

    /// Base route identifier.
    pub fn route(self) -> &'static str {
        match self {
            Destination::Overview => "overview",
            Destination::Accounts => "accounts",
            Destination::Bills => "bills",
            Destination::SingleAccount => "single_account",
        }
    }

    /// Full route template, including argument placeholders.
    pub fn route_template(self) -> &'static str {
        match self {
            Destination::SingleAccount => "single_account/{account_type}",
            other => other.route(),
        }
    }

    pub fn route_pattern(self) -> RoutePattern {
        RoutePattern::parse(self.route_template())
    }

    pub fn icon(self) -> Icon {
        match self {
            Destination::Overview => Icon::PieChart,
            Destination::Accounts => Icon::AttachMoney,
            Destination::Bills => Icon::MoneyOff,
            // Never shown: SingleAccount is not part of the tab row.
            Destination::SingleAccount => Icon::Money,
        }
    }

    pub fn arguments(self) -> &'static [ArgSpec] {
        match self {
            Destination::SingleAccount => &[ArgSpec {
                name: Self::ACCOUNT_TYPE_ARG,
                ty: ArgType::String,
            }],
            _ => &[],
        }
    }

    pub fn deep_link(self) -> Option<DeepLinkPattern> {
        match self {
            Destination::SingleAccount => Some(DeepLinkPattern::parse(
                "rally://single_account/{account_type}",
            )),
            _ => None,
        }
    }

    pub fn is_tab(self) -> bool {
        TAB_ROW_SCREENS.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_account_is_not_a_tab() {
        assert!(!Destination::SingleAccount.is_tab());
        assert!(TAB_ROW_SCREENS.iter().all(|d| d.is_tab()));
    }

    #[test]
    fn argument_schema_matches_template() {
        for destination in ALL_DESTINATIONS {
            let from_template: Vec<_> = destination.route_pattern().argument_names().collect();
            let declared: Vec<_> = destination.arguments().iter().map(|a| a.name).collect();
            assert_eq!(from_template, declared, "{destination:?}");
        }
    }

    #[test]
    fn only_single_account_has_a_deep_link() {
        let linked: Vec<_> = ALL_DESTINATIONS
            .into_iter()
            .filter(|d| d.deep_link().is_some())
            .collect();
        assert_eq!(linked, [Destination::SingleAccount]);
    }
}
