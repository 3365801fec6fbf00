//! # routegen-runtime
//!
//! Runtime half of routegen. Generated route tables expand through
//! [`routes!`] into one typed struct per route; the helpers here turn those
//! into URLs:
//! - [`generate`]: path from a [`PathResolver`] plus an encoded query
//! - [`path`], [`link`] and [`goto`]: typed entry points over [`Route`]
//! - [`matches_current`]: exact or `/*` prefix test against the [`ActiveRoute`]
//!
//! Host framework primitives stay behind the traits in [`host`].

// ============================================================================
// Module Declarations
// ============================================================================

pub mod hierarchy;
pub mod host;
mod link;
mod macros;
mod map;
pub mod pattern;
mod query;
mod resolve;

pub use hierarchy::RouteHierarchy;
pub use host::{ActiveRoute, Navigator, PathResolver};
pub use link::Link;
pub use map::{DynamicRoute, RouteEntry, RouteMap};
pub use query::{encode_query, split_params};
pub use resolve::BasePath;

use std::collections::BTreeMap;

/// Parameter bag: name → string value
pub type Params = BTreeMap<String, String>;

// ============================================================================
// Routes
// ============================================================================

/// A route identifier with its parameter values
pub trait Route {
    fn id(&self) -> &str;

    /// Path parameter values, absent optionals omitted
    fn path_params(&self) -> Params;

    fn query(&self) -> &Params;

    fn url(&self, resolver: &dyn PathResolver) -> String {
        generate(resolver, self.id(), &self.path_params(), self.query())
    }
}

/// Conversion of a generated field expression into an optional string value
pub trait IntoParam {
    fn into_param(self) -> Option<String>;
}

impl IntoParam for String {
    fn into_param(self) -> Option<String> {
        Some(self)
    }
}

impl IntoParam for &String {
    fn into_param(self) -> Option<String> {
        Some(self.clone())
    }
}

impl IntoParam for &str {
    fn into_param(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoParam for Option<String> {
    fn into_param(self) -> Option<String> {
        self
    }
}

impl IntoParam for &Option<String> {
    fn into_param(self) -> Option<String> {
        self.clone()
    }
}

#[doc(hidden)]
pub mod __private {
    use crate::Params;

    /// Collects present values, keyed by field name without `r#`
    pub fn collect_params<const N: usize>(pairs: [(&str, Option<String>); N]) -> Params {
        pairs
            .into_iter()
            .filter_map(|(name, value)| {
                let name = name.strip_prefix("r#").unwrap_or(name);
                value.map(|value| (name.to_string(), value))
            })
            .collect()
    }
}

// ============================================================================
// Resolution Helpers
// ============================================================================

/// Full URL of `route_id`: resolved path plus `?query` when the query is non-empty
///
/// # Examples
///
/// ```
/// use routegen_runtime::{generate, BasePath, Params};
///
/// let mut path_params = Params::new();
/// path_params.insert("slug".into(), "hello".into());
/// let mut query = Params::new();
/// query.insert("ref".into(), "home page".into());
///
/// let resolver = BasePath::default();
/// assert_eq!(generate(&resolver, "/blog/[slug]", &path_params, &Params::new()), "/blog/hello");
/// assert_eq!(generate(&resolver, "/blog/[slug]", &path_params, &query), "/blog/hello?ref=home%20page");
/// ```
pub fn generate(
    resolver: &dyn PathResolver,
    route_id: &str,
    path_params: &Params,
    query: &Params,
) -> String {
    let path = resolver.resolve(route_id, path_params);
    let search = encode_query(query);

    if search.is_empty() {
        path
    } else {
        format!("{}?{}", path, search)
    }
}

/// Whether `route` designates the active route
///
/// A trailing `/*` makes `route` a prefix matching its base and every
/// descendant on a segment boundary. Anything else must equal the active
/// identifier. Always `false` when no route is active.
///
/// # Examples
///
/// ```
/// use routegen_runtime::matches_current;
///
/// assert!(matches_current(&Some("/blog/[slug]"), "/blog/*"));
/// assert!(!matches_current(&Some("/blogger"), "/blog/*"));
/// assert!(!matches_current(&None::<&str>, "/blog/*"));
/// ```
pub fn matches_current<A: ActiveRoute + ?Sized>(active: &A, route: &str) -> bool {
    let Some(current) = active.route_id() else {
        return false;
    };

    match route.strip_suffix("/*") {
        Some(base) => {
            let base = if base.is_empty() { "/" } else { base };
            RouteHierarchy::new(current).any(|id| id == base)
        }
        None => current == route,
    }
}

/// Builds a lazily resolved [`Link`]
pub fn link<R: Route>(resolver: &dyn PathResolver, route: R) -> Link<'_, R> {
    Link::new(resolver, route)
}

/// Resolves `route` to its URL string
pub fn path<R: Route + ?Sized>(resolver: &dyn PathResolver, route: &R) -> String {
    route.url(resolver)
}

/// Resolves `route`, then asks the navigator to go there
///
/// The navigator's result, error included, is returned unchanged.
pub async fn goto<N, R>(
    resolver: &dyn PathResolver,
    navigator: &N,
    route: &R,
    options: N::Options,
) -> Result<N::Output, N::Error>
where
    N: Navigator + ?Sized,
    R: Route + ?Sized,
{
    let url = path(resolver, route);
    tracing::debug!(url = %url, "navigating");
    navigator.goto(url, options).await
}
