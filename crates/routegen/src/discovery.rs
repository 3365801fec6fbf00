//! Partitioning of the build pipeline's file list into route identifiers and
//! matcher modules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::RoutegenOptions;
use crate::context::{Diagnostic, GenerationContext};
use crate::path::{matcher_name, route_id_from_file};

/// A file handed over by the build pipeline
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path relative to the project root, `/`-separated
    pub local_path: String,
}

impl SourceFile {
    pub fn new(local_path: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
        }
    }
}

impl std::fmt::Display for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.local_path)
    }
}

/// Collects the route identifiers of `files`
///
/// Files below the routes root contribute their parent directory as a route
/// identifier. Every other file is treated as a matcher module: its base name
/// is registered as a string matcher when the caller did not list it, with an
/// [`Diagnostic::UnregisteredMatcher`] left on the context.
pub fn extract_routes(
    files: &[SourceFile],
    options: &RoutegenOptions,
    ctx: &mut GenerationContext,
) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| {
            if let Some(route_id) = route_id_from_file(&file.local_path, &options.routes_dir) {
                return Some(route_id);
            }

            let matcher = matcher_name(&file.local_path);
            if ctx.matchers.register_default(matcher) {
                ctx.warn(Diagnostic::UnregisteredMatcher {
                    file: file.local_path.clone(),
                    matcher: matcher.to_string(),
                });
            }

            None
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MatcherRegistry;

    fn files(paths: &[&str]) -> Vec<SourceFile> {
        paths.iter().map(|p| SourceFile::new(*p)).collect()
    }

    #[test]
    fn test_routes_and_matchers_are_partitioned() {
        let mut ctx = GenerationContext::default();
        let routes = extract_routes(
            &files(&[
                "src/routes/+page.svelte",
                "src/routes/blog/[slug]/+page.svelte",
                "src/routes/blog/[slug]/+server.ts",
                "src/params/number.ts",
            ]),
            &RoutegenOptions::default(),
            &mut ctx,
        );

        assert_eq!(
            routes.into_iter().collect::<Vec<_>>(),
            vec!["/".to_string(), "/blog/[slug]".to_string()]
        );
        assert_eq!(ctx.matchers.get("number"), Some("String"));
    }

    #[test]
    fn test_registered_matcher_file_is_silent() {
        let mut ctx = GenerationContext::new([("number", "u32")].into_iter().collect::<MatcherRegistry>());
        let routes = extract_routes(
            &files(&["src/params/number.ts"]),
            &RoutegenOptions::default(),
            &mut ctx,
        );

        assert!(routes.is_empty());
        assert!(ctx.diagnostics().is_empty());
        assert_eq!(ctx.matchers.get("number"), Some("u32"));
    }

    #[test]
    fn test_unregistered_matcher_file_is_reported() {
        let mut ctx = GenerationContext::default();
        extract_routes(&files(&["src/params/hex.ts"]), &RoutegenOptions::default(), &mut ctx);

        assert_eq!(
            ctx.diagnostics(),
            &[Diagnostic::UnregisteredMatcher {
                file: "src/params/hex.ts".to_string(),
                matcher: "hex".to_string(),
            }]
        );
    }

    #[test]
    fn test_discovery_is_idempotent() {
        let input = files(&[
            "src/routes/a/+page.svelte",
            "src/routes/b/[id]/+page.svelte",
            "src/params/id.ts",
        ]);

        let first = extract_routes(&input, &RoutegenOptions::default(), &mut GenerationContext::default());
        let second = extract_routes(&input, &RoutegenOptions::default(), &mut GenerationContext::default());

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_routes_dir() {
        let options = RoutegenOptions {
            routes_dir: "app/pages".to_string(),
            ..RoutegenOptions::default()
        };
        let routes = extract_routes(
            &files(&["app/pages/docs/+page.svelte"]),
            &options,
            &mut GenerationContext::default(),
        );

        assert!(routes.contains("/docs"));
    }
}
