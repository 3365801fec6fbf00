//! Default path resolver filling bracket parameters in place.

use std::borrow::Cow;

use crate::host::PathResolver;
use crate::pattern::{tokenize_segment, SegmentToken};
use crate::Params;

/// Substitutes parameter values into a route identifier
///
/// - `(group)` segments are dropped
/// - `[name]` and `[name=matcher]` take the percent-encoded value
/// - `[...rest]` takes the value verbatim, so it may span segments
/// - a segment left empty (absent optional or empty rest) disappears
///
/// The result is prefixed with `base`.
///
/// # Examples
///
/// ```
/// use routegen_runtime::{BasePath, Params, PathResolver};
///
/// let mut params = Params::new();
/// params.insert("id".into(), "42".into());
/// params.insert("path".into(), "guide/intro".into());
///
/// let resolver = BasePath::new("/app");
/// assert_eq!(
///     resolver.resolve("/(docs)/[id=int]/[[lang]]/[...path]", &params),
///     "/app/42/guide/intro"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath {
    base: String,
}

impl BasePath {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl PathResolver for BasePath {
    fn resolve(&self, route_id: &str, params: &Params) -> String {
        let segments: Vec<String> = route_id
            .split('/')
            .filter(|segment| !segment.is_empty() && !is_group(segment))
            .map(|segment| fill_segment(segment, params))
            .filter(|segment| !segment.is_empty())
            .collect();

        format!("{}/{}", self.base, segments.join("/"))
    }
}

fn is_group(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}

/// Replaces every bracket group of one segment with its value
///
/// Groups are recognized exactly as the generator recognizes them, so a
/// stray `]` marks a group optional and a lone `[[` still opens one.
fn fill_segment(segment: &str, params: &Params) -> String {
    tokenize_segment(segment)
        .into_iter()
        .map(|token| match token {
            SegmentToken::Static(text) => Cow::Borrowed(text),
            SegmentToken::Param(param) => match params.get(param.name) {
                Some(value) if param.catch_all => Cow::Borrowed(value.as_str()),
                Some(value) => urlencoding::encode(value),
                None => Cow::Borrowed(""),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case("/", &[], "/")]
    #[case("/about", &[], "/about")]
    #[case("/blog/[slug]", &[("slug", "hello world")], "/blog/hello%20world")]
    #[case("/items/[id=int]", &[("id", "7")], "/items/7")]
    #[case("/[[lang]]/docs", &[], "/docs")]
    #[case("/[[lang]]/docs", &[("lang", "de")], "/de/docs")]
    #[case("/files/[...path]", &[("path", "a/b.txt")], "/files/a/b.txt")]
    #[case("/files/[...path]", &[], "/files")]
    #[case("/(app)/settings", &[], "/settings")]
    #[case("/range/[from]-[to]", &[("from", "1"), ("to", "9")], "/range/1-9")]
    #[case("/a/[x]]", &[], "/a")]
    #[case("/a/[x]]", &[("x", "v")], "/a/v")]
    #[case("/a/[[x]", &[("x", "v")], "/a/v")]
    #[case("/a/[]/b", &[], "/a/[]/b")]
    fn test_resolve(#[case] route_id: &str, #[case] pairs: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(BasePath::default().resolve(route_id, &params(pairs)), expected);
    }

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let resolver = BasePath::new("/base/");
        assert_eq!(resolver.base(), "/base");
        assert_eq!(resolver.resolve("/", &Params::new()), "/base/");
        assert_eq!(resolver.resolve("/a", &Params::new()), "/base/a");
    }
}
