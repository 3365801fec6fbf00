//! # routegen
//!
//! Build-time route table generator for file-system-based routers:
//! - Route discovery from a route tree (`src/routes/**/+page.svelte`)
//! - Bracket parameter grammar: `[id]`, `[id=int]`, `[[tab]]`, `[...path]`
//! - Parameter matchers mapped to Rust types (`int = "u32"`)
//! - Deterministic code emission into a marker region of a template
//!
//! The generated module expands through `routegen_runtime::routes!` into one
//! typed struct per route plus a `ROUTES` map.
//!
//! ## Diagnostics
//!
//! Unregistered matcher files, unknown matcher references and duplicate
//! parameter names fall back to string typing. They are logged through
//! `tracing` and collected on the pass, never failing it. Only a template
//! without a well-formed marker pair aborts generation.
//!
//! ## Example
//!
//! ```
//! use routegen::{generate_routes, MatcherRegistry, RoutegenOptions, SourceFile};
//!
//! let files = vec![
//!     SourceFile::new("src/routes/blog/[slug]/+page.svelte"),
//!     SourceFile::new("src/params/number.ts"),
//! ];
//!
//! let module = generate_routes(&files, MatcherRegistry::new(), &RoutegenOptions::default()).unwrap();
//! assert!(module.contains(r#""/blog/[slug]" => BlogBySlug { slug: ::std::string::String = slug };"#));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod context;
pub mod discovery;
pub mod emit;
mod error;
pub mod job;
pub mod path;
pub mod route;

pub use config::{Config, RoutegenOptions, CONFIG_FILE};
pub use context::{Diagnostic, GenerationContext, MatcherRegistry, DEFAULT_PARAM_TYPE};
pub use discovery::{extract_routes, SourceFile};
pub use emit::splice::{END_MARKER, START_MARKER};
pub use emit::RenderedRoute;
pub use error::{MarkerError, Result, RoutegenError};
pub use job::{routegen_job, CacheBy, CodegenJob, Generated, JobOutcome};
pub use route::{parse_params, ParsedParam, ParsedRoute};

/// Runs one generation pass with the built-in template
///
/// Shorthand for building a job and calling [`CodegenJob::generate`].
pub fn generate_routes(
    files: &[SourceFile],
    param_types: MatcherRegistry,
    options: &RoutegenOptions,
) -> Result<String> {
    routegen_job(options.output.clone(), param_types, options.clone())?
        .generate(files)
        .map(|generated| generated.content)
}
