//! Untyped view of a generated route table.

use crate::hierarchy::prefixes;
use crate::query::split_params;
use crate::{Params, Route};

/// One generated route: its identifier and path parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    id: &'static str,
    params: &'static [&'static str],
}

impl RouteEntry {
    pub const fn new(id: &'static str, params: &'static [&'static str]) -> Self {
        Self { id, params }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Parameter names with any raw identifier prefix removed
    pub fn param_names(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .map(|name| name.strip_prefix("r#").unwrap_or(name))
            .collect()
    }
}

/// Every route of a generated module, in emission order
///
/// Built by `routes!` as the `ROUTES` static.
#[derive(Debug, Clone, Copy)]
pub struct RouteMap {
    entries: &'static [RouteEntry],
}

impl RouteMap {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    pub fn get(&self, route_id: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.id == route_id)
    }

    pub fn contains(&self, route_id: &str) -> bool {
        self.get(route_id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wildcard prefixes accepted by [`matches_current`](crate::matches_current)
    ///
    /// The parent of every multi-segment route followed by `/*`, sorted and
    /// deduplicated. `/*` itself is never listed.
    pub fn prefixes(&self) -> Vec<String> {
        prefixes(self.ids())
    }

    /// Whether `route` names a route or one of its [`prefixes`](Self::prefixes)
    pub fn is_known(&self, route: &str) -> bool {
        self.contains(route) || self.prefixes().iter().any(|prefix| prefix == route)
    }

    /// Builds a route from an untyped bag
    ///
    /// Keys naming a path parameter of the route fill the path; the rest
    /// become the query. `None` for an unknown identifier.
    pub fn route(&self, route_id: &str, bag: Params) -> Option<DynamicRoute> {
        let entry = self.get(route_id)?;
        let (path_params, query) = split_params(bag, &entry.param_names());

        Some(DynamicRoute::new(entry.id, path_params, query))
    }
}

/// A route chosen at runtime, carrying its parameters as strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicRoute {
    id: String,
    path_params: Params,
    query: Params,
}

impl DynamicRoute {
    pub fn new(id: impl Into<String>, path_params: Params, query: Params) -> Self {
        Self {
            id: id.into(),
            path_params,
            query,
        }
    }
}

impl Route for DynamicRoute {
    fn id(&self) -> &str {
        &self.id
    }

    fn path_params(&self) -> Params {
        self.path_params.clone()
    }

    fn query(&self) -> &Params {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static MAP: RouteMap = RouteMap::new(&[
        RouteEntry::new("/", &[]),
        RouteEntry::new("/blog", &[]),
        RouteEntry::new("/blog/[slug]", &["slug"]),
        RouteEntry::new("/blog/[slug]/edit", &["slug"]),
        RouteEntry::new("/kinds/[type]", &["r#type"]),
    ]);

    #[test]
    fn test_lookup() {
        assert!(MAP.contains("/blog/[slug]"));
        assert!(!MAP.contains("/blog/*"));
        assert_eq!(MAP.len(), 5);
        assert_eq!(MAP.ids().next(), Some("/"));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(
            MAP.prefixes(),
            vec!["/blog/*", "/blog/[slug]/*", "/kinds/*"]
        );
        assert!(MAP.is_known("/blog/*"));
        assert!(MAP.is_known("/blog"));
        assert!(!MAP.is_known("/*"));
    }

    #[test]
    fn test_raw_identifier_names() {
        assert_eq!(MAP.get("/kinds/[type]").unwrap().param_names(), vec!["type"]);
    }

    #[test]
    fn test_route_splits_bag() {
        let bag: Params = [("slug", "hi"), ("ref", "feed")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let route = MAP.route("/blog/[slug]", bag).unwrap();

        assert_eq!(route.id(), "/blog/[slug]");
        assert_eq!(route.path_params().get("slug").map(String::as_str), Some("hi"));
        assert_eq!(route.query().get("ref").map(String::as_str), Some("feed"));
        assert!(route.query().get("slug").is_none());
    }

    #[test]
    fn test_unknown_route() {
        assert!(MAP.route("/nope", Params::new()).is_none());
    }
}
