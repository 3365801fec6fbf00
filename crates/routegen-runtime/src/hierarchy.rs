/// Lazy iterator over a route identifier and its ancestors
///
/// For `/a/b/c`, yields: `/a/b/c` → `/a/b` → `/a` → `/`
///
/// Only whole segments are dropped, so `/blogger` never yields `/blog`.
/// Borrows from the input; nothing is allocated.
///
/// # Examples
///
/// ```
/// use routegen_runtime::RouteHierarchy;
///
/// let ids: Vec<&str> = RouteHierarchy::new("/blog/[slug]/edit").collect();
/// assert_eq!(ids, vec!["/blog/[slug]/edit", "/blog/[slug]", "/blog", "/"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> RouteHierarchy<'a> {
    pub fn new(route_id: &'a str) -> Self {
        Self {
            current: Some(route_id),
        }
    }
}

impl<'a> Iterator for RouteHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = if current == "/" {
            None
        } else {
            match current.rfind('/') {
                Some(0) => Some("/"),
                Some(slash) => Some(&current[..slash]),
                None => None,
            }
        };

        Some(current)
    }
}

/// Parent identifier of a multi-segment route, `None` for `/` and top-level routes
pub fn parent(route_id: &str) -> Option<&str> {
    let trimmed = route_id.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(slash) if slash > 0 => Some(&trimmed[..slash]),
        _ => None,
    }
}

/// Wildcard prefixes of a set of route identifiers
///
/// The parent of every multi-segment identifier followed by `/*`, sorted and
/// deduplicated. `/*` itself is never listed.
///
/// ```
/// use routegen_runtime::hierarchy::prefixes;
///
/// assert_eq!(prefixes(["/", "/blog", "/blog/[slug]", "/blog/[slug]/edit"]), vec!["/blog/*", "/blog/[slug]/*"]);
/// ```
pub fn prefixes<'a>(route_ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut prefixes: Vec<String> = route_ids
        .into_iter()
        .filter_map(parent)
        .map(|parent| format!("{}/*", parent))
        .collect();

    prefixes.sort();
    prefixes.dedup();
    prefixes
}
