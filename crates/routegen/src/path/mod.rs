/// Route identifier derivation from project-relative file paths
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a route identifier is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use routegen::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/blog/[slug]"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("blog")); // Missing leading /
/// assert!(!is_canonical("/blog/")); // Trailing /
/// assert!(!is_canonical("/blog//[slug]")); // Double //
/// assert!(!is_canonical("/blog\\[slug]")); // Backslash
/// ```
pub fn is_canonical(id: &str) -> bool {
    if id.is_empty() || !id.starts_with('/') {
        return false;
    }

    if id.contains("//") || id.contains('\\') {
        return false;
    }

    id == "/" || !id.ends_with('/')
}

/// Normalize a route identifier to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/blog/` → `/blog`
/// - Double slashes: `/blog//post` → `/blog/post`
/// - Backslashes: `\blog\[slug]` → `/blog/[slug]`
/// - Empty input: `` → `/`
///
/// # Examples
///
/// ```
/// use routegen::path::normalize;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize("\\blog\\[slug]"), "/blog/[slug]");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(id: &str) -> Cow<'_, str> {
    if is_canonical(id) {
        return Cow::Borrowed(id);
    }

    let normalized = id
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Returns the part of `local_path` below `root`, or `None` when the file lives elsewhere.
///
/// Matching happens on whole directory names: `src/routes-old/x` is not below `src/routes`.
pub fn strip_root<'a>(local_path: &'a str, root: &str) -> Option<&'a str> {
    let root = root.trim_end_matches('/');
    local_path.strip_prefix(root)?.strip_prefix('/')
}

/// Derives the route identifier for a route file
///
/// The routes root and the file's own name are stripped; only the parent
/// directory path remains.
///
/// # Examples
///
/// ```
/// use routegen::path::route_id_from_file;
///
/// let id = route_id_from_file("src/routes/blog/[slug]/+page.svelte", "src/routes");
/// assert_eq!(id.as_deref(), Some("/blog/[slug]"));
///
/// let id = route_id_from_file("src/routes/+page.svelte", "src/routes");
/// assert_eq!(id.as_deref(), Some("/"));
///
/// assert_eq!(route_id_from_file("src/params/number.ts", "src/routes"), None);
/// ```
pub fn route_id_from_file(local_path: &str, routes_dir: &str) -> Option<String> {
    let relative = strip_root(local_path, routes_dir)?;
    let directory = relative.rsplit_once('/').map_or("", |(dir, _file)| dir);

    Some(normalize(directory).into_owned())
}

/// Base name of a matcher module: directory and extension stripped
///
/// ```
/// use routegen::path::matcher_name;
///
/// assert_eq!(matcher_name("src/params/number.ts"), "number");
/// assert_eq!(matcher_name("src/params/hex.test.ts"), "hex.test");
/// ```
pub fn matcher_name(local_path: &str) -> &str {
    let file = local_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(local_path);

    match file.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("/"));
        assert!(is_canonical("/about"));
        assert!(is_canonical("/blog/[[page=int]]"));

        assert!(!is_canonical(""));
        assert!(!is_canonical("about"));
        assert!(!is_canonical("/about/"));
        assert!(!is_canonical("/about//page"));
    }

    #[test]
    fn test_normalize_canonical_is_borrowed() {
        assert!(matches!(normalize("/about"), Cow::Borrowed("/about")));
        assert!(matches!(normalize("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_windows_separators() {
        assert_eq!(normalize("\\users\\[id]"), "/users/[id]");
        assert_eq!(normalize("users\\[id]\\"), "/users/[id]");
    }

    #[test]
    fn test_strip_root_requires_directory_boundary() {
        assert_eq!(strip_root("src/routes/a/+page.svelte", "src/routes"), Some("a/+page.svelte"));
        assert_eq!(strip_root("src/routes/a/+page.svelte", "src/routes/"), Some("a/+page.svelte"));
        assert_eq!(strip_root("src/routes-old/a/+page.svelte", "src/routes"), None);
    }

    #[test]
    fn test_route_id_from_nested_file() {
        assert_eq!(
            route_id_from_file("src/routes/(app)/settings/[[tab]]/+server.ts", "src/routes").as_deref(),
            Some("/(app)/settings/[[tab]]")
        );
    }

    #[test]
    fn test_route_id_from_root_file() {
        assert_eq!(route_id_from_file("src/routes/+server.ts", "src/routes").as_deref(), Some("/"));
    }

    #[test]
    fn test_matcher_name_without_extension() {
        assert_eq!(matcher_name("src/params/slug"), "slug");
        assert_eq!(matcher_name("number.ts"), "number");
    }
}
