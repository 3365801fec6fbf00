//! Type names for generated route structs.

use std::collections::HashSet;

use crate::route::pattern::{tokenize_segment, SegmentToken};

/// Names a generated struct must not take
///
/// Either the generated module refers to them unqualified (`Self`,
/// `ROUTES`), or user code next to it commonly does.
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "Self", "String", "Option", "Result", "Vec", "Box", "Some", "None", "Ok", "Err", "ROUTES",
    "Into", "ToString", "Default", "Clone", "Debug", "PartialEq", "Eq", "Route", "Params",
    "IntoParam",
];

/// Converts a route identifier into a PascalCase type name
///
/// Literal words are capitalised; parameters read as `ByName`, `MaybeName`
/// (optional) or `AllName` (catch-all). The root route is `Root`.
///
/// # Examples
///
/// ```
/// use routegen::emit::ident::type_name;
///
/// assert_eq!(type_name("/"), "Root");
/// assert_eq!(type_name("/blog/[slug]"), "BlogBySlug");
/// assert_eq!(type_name("/(app)/user-settings/[[tab]]"), "AppUserSettingsMaybeTab");
/// assert_eq!(type_name("/docs/[...path]"), "DocsAllPath");
/// ```
pub fn type_name(route_id: &str) -> String {
    let mut name = String::new();

    for token in route_id.split('/').flat_map(tokenize_segment) {
        match token {
            SegmentToken::Static(text) => push_words(&mut name, text),
            SegmentToken::Param(param) => {
                name.push_str(match (param.optional, param.catch_all) {
                    (true, true) => "MaybeAll",
                    (true, false) => "Maybe",
                    (false, true) => "All",
                    (false, false) => "By",
                });
                push_words(&mut name, param.name);
            }
        }
    }

    if name.is_empty() {
        return "Root".to_string();
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "Route");
    }

    name
}

/// Assigns a unique type name to every route id, in iteration order
///
/// The first route claiming a name keeps it; later ones get `2`, `3`, ...
/// Names in [`RESERVED_TYPE_NAMES`] and `extra_reserved` count as claimed
/// from the start.
///
/// # Examples
///
/// ```
/// use routegen::emit::ident::unique_type_names;
///
/// let names = unique_type_names(["/string", "/uuid"], &["Uuid"]);
/// assert_eq!(names[0].1, "String2");
/// assert_eq!(names[1].1, "Uuid2");
/// ```
pub fn unique_type_names<'a>(
    route_ids: impl IntoIterator<Item = &'a str>,
    extra_reserved: &[&str],
) -> Vec<(&'a str, String)> {
    let mut used: HashSet<String> = RESERVED_TYPE_NAMES
        .iter()
        .chain(extra_reserved)
        .map(|name| name.to_string())
        .collect();

    route_ids
        .into_iter()
        .map(|id| {
            let base = type_name(id);
            let mut name = base.clone();
            let mut suffix = 1;

            while used.contains(&name) {
                suffix += 1;
                name = format!("{}{}", base, suffix);
            }

            used.insert(name.clone());
            (id, name)
        })
        .collect()
}

/// Appends alphanumeric runs of `text` as capitalised words
fn push_words(name: &mut String, text: &str) {
    for word in text.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_literals() {
        assert_eq!(type_name("/about"), "About");
        assert_eq!(type_name("/api/v1/health-check"), "ApiV1HealthCheck");
    }

    #[test]
    fn test_type_name_params() {
        assert_eq!(type_name("/items/[id=int]"), "ItemsById");
        assert_eq!(type_name("/[[lang]]/docs/[[...path]]"), "MaybeLangDocsMaybeAllPath");
        assert_eq!(type_name("/files/[from]-[to]"), "FilesByFromByTo");
    }

    #[test]
    fn test_type_name_leading_digit() {
        assert_eq!(type_name("/404"), "Route404");
    }

    #[test]
    fn test_unique_type_names_suffixes_collisions() {
        let names = unique_type_names(["/blog-post", "/blog/post", "/blog_post"], &[]);
        assert_eq!(
            names,
            vec![
                ("/blog-post", "BlogPost".to_string()),
                ("/blog/post", "BlogPost2".to_string()),
                ("/blog_post", "BlogPost3".to_string()),
            ]
        );
    }

    #[test]
    fn test_unique_type_names_skips_taken_suffix() {
        let names = unique_type_names(["/a2", "/a", "/(a)"], &[]);
        let names: Vec<_> = names.into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["A2", "A", "A3"]);
    }

    #[test]
    fn test_unique_type_names_avoid_reserved_names() {
        let names = unique_type_names(["/self", "/string", "/option", "/ROUTES", "/vec"], &[]);
        let names: Vec<_> = names.into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Self2", "String2", "Option2", "ROUTES2", "Vec2"]);
    }

    #[test]
    fn test_unique_type_names_avoid_extra_reserved() {
        let names = unique_type_names(["/uuid", "/uuid2"], &["Uuid"]);
        let names: Vec<_> = names.into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Uuid2", "Uuid22"]);
    }
}
