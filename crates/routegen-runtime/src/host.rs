//! Seams to the host framework: path resolution, the active route and
//! navigation.

use async_trait::async_trait;

use crate::Params;

/// Turns a route identifier plus path parameters into a path string
///
/// Any `Fn(&str, &Params) -> String` is a resolver, which keeps tests and
/// small hosts free of boilerplate.
pub trait PathResolver {
    fn resolve(&self, route_id: &str, params: &Params) -> String;
}

impl<F> PathResolver for F
where
    F: Fn(&str, &Params) -> String,
{
    fn resolve(&self, route_id: &str, params: &Params) -> String {
        self(route_id, params)
    }
}

/// Identifier of the route currently being rendered, if any
pub trait ActiveRoute {
    fn route_id(&self) -> Option<&str>;
}

impl<T: AsRef<str>> ActiveRoute for Option<T> {
    fn route_id(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}

/// The host's navigation primitive
///
/// Options, result and error are the host's own types; `goto` hands them
/// through untouched.
#[async_trait(?Send)]
pub trait Navigator {
    type Options;
    type Output;
    type Error;

    async fn goto(&self, url: String, options: Self::Options) -> Result<Self::Output, Self::Error>;
}
