use std::path::PathBuf;

use thiserror::Error;

/// Fatal generation failures
///
/// Diagnostics (unknown matchers, duplicate params) are not errors; see
/// [`crate::context::Diagnostic`].
#[derive(Debug, Error)]
pub enum RoutegenError {
    /// The template has no usable marker region
    #[error("template marker error: {0}")]
    Marker(#[from] MarkerError),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Ways a template can fail to provide exactly one marker pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("start marker `{0}` not found")]
    MissingStart(&'static str),

    #[error("end marker `{0}` not found after the start marker")]
    MissingEnd(&'static str),

    #[error("marker `{0}` appears more than once")]
    Duplicate(&'static str),
}

impl RoutegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = RoutegenError> = std::result::Result<T, E>;
