// File: src/config.rs
// Purpose: Configuration parsing from routegen.toml

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::context::MatcherRegistry;
use crate::error::{Result, RoutegenError};

/// Default configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "routegen.toml";

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutegenOptions,

    /// Matcher name → Rust type of the values it accepts
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

/// Where routes and matchers live and where the generated module goes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutegenOptions {
    /// Generated module path (default: "src/routes.rs")
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Root of the route tree (default: "src/routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Directory holding parameter matcher modules (default: "src/params")
    #[serde(default = "default_matchers_dir")]
    pub matchers_dir: String,

    /// File names that turn their directory into a route
    #[serde(default = "default_route_files")]
    pub route_files: Vec<String>,

    /// Extensions of matcher modules
    #[serde(default = "default_matcher_extensions")]
    pub matcher_extensions: Vec<String>,

    /// Custom template; the built-in one is used when absent
    #[serde(default)]
    pub template: Option<PathBuf>,
}

// Default values
fn default_output() -> PathBuf {
    PathBuf::from("src/routes.rs")
}

fn default_routes_dir() -> String {
    "src/routes".to_string()
}

fn default_matchers_dir() -> String {
    "src/params".to_string()
}

fn default_route_files() -> Vec<String> {
    vec!["+page.svelte".to_string(), "+server.ts".to_string()]
}

fn default_matcher_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

impl Default for RoutegenOptions {
    fn default() -> Self {
        Self {
            output: default_output(),
            routes_dir: default_routes_dir(),
            matchers_dir: default_matchers_dir(),
            route_files: default_route_files(),
            matcher_extensions: default_matcher_extensions(),
            template: None,
        }
    }
}

impl Config {
    /// Load configuration from a routegen.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| RoutegenError::io(path, e))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml(&content).map_err(|source| RoutegenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from default path (./routegen.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Caller-supplied matcher types, the seed of every generation pass
    pub fn matcher_registry(&self) -> MatcherRegistry {
        self.params
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.as_str()))
            .collect()
    }
}
