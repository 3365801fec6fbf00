//! Per-pass generation state: the matcher registry and the diagnostics channel.

use std::collections::BTreeMap;
use std::fmt;

/// Type name every unregistered or unknown matcher falls back to
pub const DEFAULT_PARAM_TYPE: &str = "String";

/// Matcher name → Rust type name
///
/// Starts from caller-supplied entries and gains [`DEFAULT_PARAM_TYPE`]
/// entries while a pass discovers matcher files or references it has never
/// seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherRegistry {
    types: BTreeMap<String, String>,
}

impl MatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, matcher: &str) -> bool {
        self.types.contains_key(matcher)
    }

    pub fn get(&self, matcher: &str) -> Option<&str> {
        self.types.get(matcher).map(String::as_str)
    }

    /// Registers `matcher`, replacing any previous type
    pub fn insert(&mut self, matcher: impl Into<String>, ty: impl Into<String>) {
        self.types.insert(matcher.into(), ty.into());
    }

    /// Registers `matcher` with the default string type unless already known.
    /// Returns `true` when a new entry was added.
    pub fn register_default(&mut self, matcher: &str) -> bool {
        if self.contains(matcher) {
            return false;
        }
        self.insert(matcher, DEFAULT_PARAM_TYPE);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MatcherRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Non-fatal findings of a generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A file in the matchers directory whose name was not registered
    UnregisteredMatcher { file: String, matcher: String },
    /// A `[name=matcher]` reference to a matcher nobody registered
    UnknownMatcher {
        matcher: String,
        param: String,
        route: String,
    },
    /// The same parameter name appears twice in one route
    DuplicateParam { param: String, route: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnregisteredMatcher { file, .. } => {
                write!(f, "unregistered param matcher '{}'", file)
            }
            Diagnostic::UnknownMatcher {
                matcher,
                param,
                route,
            } => write!(
                f,
                "unknown param matcher '{}' for param '{}' in route '{}'",
                matcher, param, route
            ),
            Diagnostic::DuplicateParam { param, route } => {
                write!(f, "duplicate parameter '{}' in route '{}'", param, route)
            }
        }
    }
}

/// Mutable state threaded by reference through exactly one generation pass
///
/// Nothing survives the pass: every job invocation builds a fresh context
/// from the caller's matcher types.
#[derive(Debug, Default)]
pub struct GenerationContext {
    pub matchers: MatcherRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(matchers: MatcherRegistry) -> Self {
        Self {
            matchers,
            diagnostics: Vec::new(),
        }
    }

    /// Logs a diagnostic and records it for the caller
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Resolves the type for a matcher reference, registering unknown matchers
    /// as strings on the way
    pub fn matcher_type(&mut self, matcher: &str, param: &str, route: &str) -> String {
        if self.matchers.register_default(matcher) {
            self.warn(Diagnostic::UnknownMatcher {
                matcher: matcher.to_string(),
                param: param.to_string(),
                route: route.to_string(),
            });
        }

        self.matchers
            .get(matcher)
            .unwrap_or(DEFAULT_PARAM_TYPE)
            .to_string()
    }
}
