//! Compiles a route table exactly as the generator writes it
//!
//! `fixtures/generated_routes.rs` is kept byte-identical to generator output
//! by `test_generated_module_matches_runtime_fixture` in the routegen crate.
//! It covers route names that clash with prelude items, a parameter called
//! `query`, keyword and non-identifier parameter names, and optional
//! matcher-typed parameters.

use pretty_assertions::assert_eq;
use routegen_runtime::{path, BasePath, Route};

mod generated {
    include!("fixtures/generated_routes.rs");
}

use generated::*;

#[test]
fn test_prelude_named_routes_keep_prelude_types() {
    assert_eq!(String2::ID, "/string");
    assert_eq!(Option2::ID, "/option");
    assert_eq!(Self2::ID, "/self");

    // Fields still use the real `String` and `Option`
    let slug: String = BlogBySlug::new("hi".to_string()).slug;
    let page: Option<u32> = ListMaybePage::new(None).page;
    assert_eq!(slug, "hi");
    assert_eq!(page, None);
}

#[test]
fn test_renamed_fields_resolve_under_their_param_names() {
    let resolver = BasePath::default();

    let search = SearchByQuery::new("rust lang".to_string()).with_query("page", "2");
    assert_eq!(search.query_, "rust lang");
    assert_eq!(path(&resolver, &search), "/search/rust%20lang?page=2");
    assert_eq!(search.path_params().get("query").map(String::as_str), Some("rust lang"));

    assert_eq!(path(&resolver, &MeBySelf::new("me".to_string())), "/me/me");
    assert_eq!(path(&resolver, &FilesByFileName::new("a.txt".to_string())), "/files/a.txt");
    assert_eq!(path(&resolver, &KindsByType::new("plain".to_string())), "/kinds/plain");
}

#[test]
fn test_optional_matcher_params() {
    let resolver = BasePath::default();

    assert_eq!(path(&resolver, &ListMaybePage::new(None)), "/list");
    assert_eq!(path(&resolver, &ListMaybePage::new(Some(3))), "/list/3");
    assert_eq!(
        path(&resolver, &DocsMaybeLangAllPath::new(None, "guide/intro".to_string())),
        "/docs/guide/intro"
    );
}

#[test]
fn test_route_map_lists_param_names() {
    assert_eq!(ROUTES.len(), 11);
    assert_eq!(ROUTES.get("/search/[query]").unwrap().param_names(), vec!["query"]);
    assert_eq!(ROUTES.get("/me/[self]").unwrap().param_names(), vec!["self"]);
    assert_eq!(ROUTES.get("/files/[file-name]").unwrap().param_names(), vec!["file-name"]);
    assert_eq!(ROUTES.get("/kinds/[type]").unwrap().param_names(), vec!["type"]);
    assert_eq!(Root::new().id(), "/");
}
