//! Parameter facts for one route identifier
//!
//! Folds the tokenizer output into the ordered list of distinct parameters,
//! resolving each matcher through the pass context.

use std::collections::HashSet;

use serde::Serialize;

use super::pattern::{params_of, ParamSyntax};
use crate::context::{Diagnostic, GenerationContext, DEFAULT_PARAM_TYPE};

/// Rust keywords that cannot be used as plain field names
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords with no raw identifier form
const NON_RAW: &[&str] = &["self", "super", "crate", "Self", "_"];

/// Field every generated route already has
const RESERVED_FIELD: &str = "query";

/// One accepted parameter of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedParam {
    pub name: String,
    /// Field identifier in generated code
    ///
    /// Equal to `name` when it is usable as is, `r#name` for keywords,
    /// otherwise a sanitized name with trailing underscores until unique.
    pub ident: String,
    /// Matcher named in the group, `None` for the default string type
    pub matcher: Option<String>,
    /// Resolved Rust type name
    pub ty: String,
    pub optional: bool,
    pub catch_all: bool,
}

impl ParsedParam {
    pub fn is_string(&self) -> bool {
        self.ty == DEFAULT_PARAM_TYPE
    }

    /// Whether the field needs an explicit `as "name"` key
    pub fn is_renamed(&self) -> bool {
        self.ident.strip_prefix("r#").unwrap_or(&self.ident) != self.name
    }

    /// Type as written in generated code, with `String` fully qualified
    pub fn rust_type(&self) -> String {
        let ty = if self.is_string() {
            "::std::string::String"
        } else {
            self.ty.as_str()
        };

        if self.optional {
            format!("::core::option::Option<{}>", ty)
        } else {
            ty.to_string()
        }
    }

    /// `ident: Ty`, or `ident as "name": Ty` for renamed fields
    pub fn type_fragment(&self) -> String {
        if self.is_renamed() {
            format!("{} as {:?}: {}", self.ident, self.name, self.rust_type())
        } else {
            format!("{}: {}", self.ident, self.rust_type())
        }
    }

    /// Expression producing the string value handed to the resolver
    ///
    /// String params pass through untouched; matcher-typed ones are
    /// stringified, mapping through the `Option` when optional.
    pub fn value_expr(&self) -> String {
        match (self.is_string(), self.optional) {
            (true, _) => self.ident.clone(),
            (false, false) => format!("{}.to_string()", self.ident),
            (false, true) => format!(
                "{}.as_ref().map(::std::string::ToString::to_string)",
                self.ident
            ),
        }
    }
}

/// Turns a parameter name into a field identifier not yet in `used`
fn field_ident(name: &str, used: &HashSet<String>) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    if NON_RAW.contains(&ident.as_str()) {
        ident.push('_');
    } else if KEYWORDS.contains(&ident.as_str()) {
        ident.insert_str(0, "r#");
    }

    while ident == RESERVED_FIELD || used.contains(&ident) {
        ident.push('_');
    }

    ident
}

/// Parameters of a route in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRoute {
    pub params: Vec<ParsedParam>,
    /// Names dropped because they already appeared earlier in the route
    pub duplicates: Vec<String>,
}

impl ParsedRoute {
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn type_fragments(&self) -> Vec<String> {
        self.params.iter().map(ParsedParam::type_fragment).collect()
    }

    pub fn value_exprs(&self) -> Vec<String> {
        self.params.iter().map(ParsedParam::value_expr).collect()
    }
}

/// Fold accumulator
struct ParseState<'r> {
    route_id: &'r str,
    seen: HashSet<String>,
    idents: HashSet<String>,
    parsed: ParsedRoute,
}

impl<'r> ParseState<'r> {
    fn new(route_id: &'r str) -> Self {
        Self {
            route_id,
            seen: HashSet::new(),
            idents: HashSet::new(),
            parsed: ParsedRoute::default(),
        }
    }

    /// Adds a parameter group, skipping names already seen in this route
    fn with_param(mut self, syntax: ParamSyntax<'_>, ctx: &mut GenerationContext) -> Self {
        if !self.seen.insert(syntax.name.to_string()) {
            ctx.warn(Diagnostic::DuplicateParam {
                param: syntax.name.to_string(),
                route: self.route_id.to_string(),
            });
            self.parsed.duplicates.push(syntax.name.to_string());
            return self;
        }

        let ty = match syntax.matcher {
            Some(matcher) => ctx.matcher_type(matcher, syntax.name, self.route_id),
            None => DEFAULT_PARAM_TYPE.to_string(),
        };

        let ident = field_ident(syntax.name, &self.idents);
        self.idents.insert(ident.clone());

        self.parsed.params.push(ParsedParam {
            name: syntax.name.to_string(),
            ident,
            matcher: syntax.matcher.map(str::to_string),
            ty,
            optional: syntax.optional,
            catch_all: syntax.catch_all,
        });
        self
    }
}

/// Parses the parameters of `route_id`
///
/// Unknown matchers are registered on `ctx` as strings and duplicate names are
/// dropped; both leave a diagnostic behind and never fail the pass. Names
/// that cannot be a field as written get a renamed [`ParsedParam::ident`].
///
/// # Examples
///
/// ```
/// use routegen::context::{GenerationContext, MatcherRegistry};
/// use routegen::route::parse_params;
///
/// let mut ctx = GenerationContext::new([("int", "u32")].into_iter().collect::<MatcherRegistry>());
/// let parsed = parse_params("/items/[id=int]/[[tab]]", &mut ctx);
///
/// assert_eq!(parsed.names(), vec!["id", "tab"]);
/// assert_eq!(
///     parsed.type_fragments(),
///     vec!["id: u32", "tab: ::core::option::Option<::std::string::String>"]
/// );
/// assert_eq!(parsed.value_exprs(), vec!["id.to_string()", "tab"]);
/// ```
pub fn parse_params(route_id: &str, ctx: &mut GenerationContext) -> ParsedRoute {
    params_of(route_id)
        .fold(ParseState::new(route_id), |state, syntax| {
            state.with_param(syntax, ctx)
        })
        .parsed
}
