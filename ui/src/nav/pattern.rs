//! Route templates like `single_account/{account_type}`.
//!
//! A template is a `/`-separated list of literal segments and `{name}`
//! placeholders. Matching is segment-wise and exact; placeholder values are
//! taken verbatim (no percent-decoding) and must be non-empty.

use std::collections::BTreeMap;

/// Argument bindings of a back-stack entry, keyed by argument name.
pub type Arguments = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(template: &'static str) -> Self {
        let segments = template
            .split('/')
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                {
                    Some(name) => Segment::Placeholder(name),
                    None => Segment::Literal(segment),
                }
            })
            .collect();
        Self { segments }
    }

    /// Names of the placeholders, in template order.
    pub fn argument_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Match a concrete route, returning the bound placeholder values.
    pub fn matches(&self, route: &str) -> Option<Arguments> {
        let parts: Vec<&str> = route.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut args = Arguments::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if *lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Placeholder(_) if part.is_empty() => return None,
                Segment::Placeholder(name) => {
                    args.insert((*name).to_string(), part.to_string());
                }
            }
        }
        Some(args)
    }

    /// Substitute `args` into the template. Placeholders without a binding are
    /// left in place.
    pub fn fill(&self, args: &Arguments) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(lit) => (*lit).to_string(),
                Segment::Placeholder(name) => args
                    .get(*name)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{name}}}")),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// A deep-link URI pattern, e.g. `rally://single_account/{account_type}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkPattern {
    scheme: &'static str,
    path: RoutePattern,
}

impl DeepLinkPattern {
    /// Split `scheme://path` into its parts. A template without `://` is
    /// treated as a bare path with an empty scheme.
    pub fn parse(uri_pattern: &'static str) -> Self {
        let (scheme, path) = uri_pattern.split_once("://").unwrap_or(("", uri_pattern));
        Self {
            scheme,
            path: RoutePattern::parse(path),
        }
    }

    pub fn matches(&self, uri: &str) -> Option<Arguments> {
        let (scheme, path) = uri.split_once("://")?;
        if !scheme.eq_ignore_ascii_case(self.scheme) {
            return None;
        }
        self.path.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_route_matches_only_itself() {
        let pattern = RoutePattern::parse("accounts");
        assert_eq!(pattern.matches("accounts"), Some(Arguments::new()));
        assert_eq!(pattern.matches("accounts/1"), None);
        assert_eq!(pattern.matches("bills"), None);
        assert_eq!(pattern.argument_names().count(), 0);
    }

    #[test]
    fn placeholder_binds_verbatim_segment() {
        let pattern = RoutePattern::parse("single_account/{account_type}");
        let args = pattern.matches("single_account/Home Savings").unwrap();
        assert_eq!(args["account_type"], "Home Savings");

        let encoded = pattern.matches("single_account/Home%20Savings").unwrap();
        assert_eq!(encoded["account_type"], "Home%20Savings");
    }

    #[test]
    fn empty_placeholder_is_rejected() {
        let pattern = RoutePattern::parse("single_account/{account_type}");
        assert_eq!(pattern.matches("single_account/"), None);
        assert_eq!(pattern.matches("single_account"), None);
    }

    #[test]
    fn fill_substitutes_arguments() {
        let pattern = RoutePattern::parse("single_account/{account_type}");
        let mut args = Arguments::new();
        args.insert("account_type".into(), "Vacation".into());
        assert_eq!(pattern.fill(&args), "single_account/Vacation");
        assert_eq!(pattern.fill(&Arguments::new()), "single_account/{account_type}");
        assert_eq!(pattern.argument_names().collect::<Vec<_>>(), ["account_type"]);
    }

    #[test]
    fn deep_link_requires_scheme() {
        let link = DeepLinkPattern::parse("rally://single_account/{account_type}");
        assert_eq!(
            link.matches("rally://single_account/Rent").unwrap()["account_type"],
            "Rent"
        );
        assert_eq!(
            link.matches("RALLY://single_account/Rent").unwrap()["account_type"],
            "Rent"
        );
        assert_eq!(link.matches("https://single_account/Rent"), None);
        assert_eq!(link.matches("single_account/Rent"), None);
        assert_eq!(link.matches("rally://accounts"), None);
    }
}
