//! Lazily resolved, memoized links.

use std::fmt;

use once_cell::unsync::OnceCell;

use crate::host::PathResolver;
use crate::Route;

/// A route bound to a resolver whose URL is computed on first use
///
/// [`Link::href`] resolves once and returns the cached string afterwards.
/// The cache is a single-threaded cell, so a `Link` is `Send` (when its route
/// is) but never `Sync`; share the resolved string instead.
///
/// # Examples
///
/// ```
/// use routegen_runtime::{link, BasePath, DynamicRoute, Params};
///
/// let resolver = BasePath::default();
/// let about = link(&resolver, DynamicRoute::new("/about", Params::new(), Params::new()));
///
/// assert_eq!(about.href(), "/about");
/// assert_eq!(about.to_string(), "/about");
/// ```
pub struct Link<'r, R> {
    resolver: &'r dyn PathResolver,
    route: R,
    url: OnceCell<String>,
}

impl<'r, R: Route> Link<'r, R> {
    pub fn new(resolver: &'r dyn PathResolver, route: R) -> Self {
        Self {
            resolver,
            route,
            url: OnceCell::new(),
        }
    }

    pub fn route(&self) -> &R {
        &self.route
    }

    /// The resolved URL, computed at most once
    pub fn href(&self) -> &str {
        self.url.get_or_init(|| self.route.url(self.resolver))
    }

    pub fn into_route(self) -> R {
        self.route
    }
}

impl<R: Route> fmt::Display for Link<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

impl<R: Route + fmt::Debug> fmt::Debug for Link<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("route", &self.route)
            .field("url", &self.url.get())
            .finish()
    }
}
