//! Rendering of route entries and their splicing into the module template.
//!
//! Every route becomes one line inside the `routes!` invocation of the
//! template:
//!
//! ```text
//! "/about" => About;
//! "/blog/[id=int]/[[tab]]" => BlogByIdMaybeTab { id: u32 = id.to_string(), tab: ::core::option::Option<::std::string::String> = tab };
//! "/me/[self]" => MeBySelf { self_ as "self": ::std::string::String = self_ };
//! ```
//!
//! Standard types are written fully qualified, so a route struct called
//! `Option2` or a user type named like a prelude item cannot change what a
//! field means.

pub mod ident;
pub mod splice;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::context::GenerationContext;
use crate::error::Result;
use crate::route::{parse_params, ParsedRoute};

/// Fixed indentation applied to every generated line
pub const INDENT: &str = "    ";

/// Template used when the configuration names none
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/route_map.rs.in");

/// One route as emitted into the generated module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRoute {
    pub route_id: String,
    pub type_name: String,
    pub params: ParsedRoute,
    /// Generated line, without indentation
    pub line: String,
}

/// Renders the line for one route
pub fn render_entry(route_id: &str, type_name: &str, parsed: &ParsedRoute) -> String {
    if parsed.is_empty() {
        return format!("{:?} => {};", route_id, type_name);
    }

    let fields = parsed
        .type_fragments()
        .into_iter()
        .zip(parsed.value_exprs())
        .map(|(fragment, value)| format!("{} = {}", fragment, value))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{:?} => {} {{ {} }};", route_id, type_name, fields)
}

/// Parses and renders every route, sorted by the full line text
///
/// Matcher types that are bare identifiers are kept free of route structs.
pub fn render_entries(route_ids: &BTreeSet<String>, ctx: &mut GenerationContext) -> Vec<RenderedRoute> {
    let user_types: Vec<String> = ctx
        .matchers
        .iter()
        .map(|(_, ty)| ty)
        .filter(|ty| is_bare_ident(ty))
        .map(str::to_string)
        .collect();
    let user_types: Vec<&str> = user_types.iter().map(String::as_str).collect();

    let mut entries: Vec<RenderedRoute> = ident::unique_type_names(route_ids.iter().map(String::as_str), &user_types)
        .into_iter()
        .map(|(route_id, type_name)| {
            let params = parse_params(route_id, ctx);
            let line = render_entry(route_id, &type_name, &params);
            RenderedRoute {
                route_id: route_id.to_string(),
                type_name,
                params,
                line,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.line.cmp(&b.line));
    entries
}

fn is_bare_ident(ty: &str) -> bool {
    ty.starts_with(|c: char| c.is_ascii_alphabetic())
        && ty.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splices the rendered routes into `template`
///
/// Fails only when `template` lacks a well-formed marker pair; nothing is
/// produced in that case.
pub fn render(entries: &[RenderedRoute], template: &str) -> Result<String> {
    let closing_indent = splice::marker_indent(template);

    let body = entries
        .iter()
        .map(|entry| format!("{}{}", INDENT, entry.line))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(routes = entries.len(), "rendered route entries");

    Ok(splice::splice(template, &body, closing_indent)?)
}
