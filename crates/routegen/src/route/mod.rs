//! Route module for the bracket parameter grammar
//!
//! `pattern` tokenizes segments (shared with the runtime's path resolver),
//! `parser` folds the tokens into parameter facts.

pub mod parser;

pub use routegen_runtime::pattern;

// Re-export commonly used types
pub use parser::{parse_params, ParsedParam, ParsedRoute};
pub use pattern::{params_of, tokenize_segment, ParamSyntax, SegmentToken};
