//! Generation job descriptor handed to a build pipeline.
//!
//! A job declares which files it reads, which file it writes, the function
//! computing the output and how its cache is keyed. [`CodegenJob::run`] is a
//! minimal driver for pipelines (and the CLI) that have no cache of their own.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::{Config, RoutegenOptions};
use crate::context::{Diagnostic, GenerationContext, MatcherRegistry};
use crate::discovery::{extract_routes, SourceFile};
use crate::emit::{self, RenderedRoute, DEFAULT_TEMPLATE};
use crate::error::{Result, RoutegenError};

/// How a pipeline decides that the output is stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBy {
    /// Regenerate only when the matched file set or any matched file's contents change
    Files,
}

/// Result of one generation pass
#[derive(Debug, Clone)]
pub struct Generated {
    pub content: String,
    pub routes: Vec<String>,
    /// Emitted routes in output order
    pub entries: Vec<RenderedRoute>,
    pub matchers: MatcherRegistry,
    pub diagnostics: Vec<Diagnostic>,
}

/// What [`CodegenJob::run`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Output (re)written
    Written { routes: usize, diagnostics: usize },
    /// Inputs unchanged since the last run
    Fresh,
}

/// Declarative description of the route table generation
#[derive(Debug, Clone)]
pub struct CodegenJob {
    /// Glob patterns, relative to the project root
    pub input: Vec<String>,
    /// Generated module path, relative to the project root
    pub output: PathBuf,
    pub cache_by: CacheBy,
    /// `input`, compiled once
    patterns: Vec<Pattern>,
    param_types: MatcherRegistry,
    options: RoutegenOptions,
    template: Option<String>,
}

/// Builds the job for `output` with the caller's matcher types
///
/// Directory names, file names and extensions from `options` are taken
/// literally, so a routes directory such as `src/[app]/routes` is matched as
/// written.
///
/// # Examples
///
/// ```
/// use routegen::{routegen_job, MatcherRegistry, RoutegenOptions};
///
/// let job = routegen_job("src/routes.rs", MatcherRegistry::new(), RoutegenOptions::default()).unwrap();
/// assert_eq!(
///     job.input,
///     vec![
///         "src/params/*.ts",
///         "src/routes/**/+page.svelte",
///         "src/routes/**/+server.ts",
///     ]
/// );
/// ```
pub fn routegen_job(
    output: impl Into<PathBuf>,
    param_types: MatcherRegistry,
    options: RoutegenOptions,
) -> Result<CodegenJob> {
    let matchers_dir = Pattern::escape(options.matchers_dir.trim_end_matches('/'));
    let routes_dir = Pattern::escape(options.routes_dir.trim_end_matches('/'));

    let input: Vec<String> = options
        .matcher_extensions
        .iter()
        .map(|ext| format!("{}/*.{}", matchers_dir, Pattern::escape(ext)))
        .chain(
            options
                .route_files
                .iter()
                .map(|file| format!("{}/**/{}", routes_dir, Pattern::escape(file))),
        )
        .collect();

    let patterns = input
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| RoutegenError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CodegenJob {
        input,
        output: output.into(),
        cache_by: CacheBy::Files,
        patterns,
        param_types,
        options,
        template: None,
    })
}

impl CodegenJob {
    /// Builds the job described by a configuration file
    ///
    /// A custom template path is resolved against `root`.
    pub fn from_config(config: &Config, root: &Path) -> Result<Self> {
        let mut job = routegen_job(
            config.routes.output.clone(),
            config.matcher_registry(),
            config.routes.clone(),
        )?;

        if let Some(template) = &config.routes.template {
            let path = root.join(template);
            let content = fs::read_to_string(&path).map_err(|e| RoutegenError::io(&path, e))?;
            job = job.with_template(content);
        }

        Ok(job)
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn options(&self) -> &RoutegenOptions {
        &self.options
    }

    pub fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }

    /// Runs one generation pass over `files`
    ///
    /// Each call starts from a fresh copy of the caller's matcher types.
    pub fn generate(&self, files: &[SourceFile]) -> Result<Generated> {
        let mut ctx = GenerationContext::new(self.param_types.clone());
        let route_ids = extract_routes(files, &self.options, &mut ctx);
        let entries = emit::render_entries(&route_ids, &mut ctx);
        let content = emit::render(&entries, self.template())?;

        tracing::debug!(
            files = files.len(),
            routes = route_ids.len(),
            diagnostics = ctx.diagnostics().len(),
            "generated route table"
        );

        Ok(Generated {
            content,
            routes: route_ids.into_iter().collect(),
            entries,
            diagnostics: ctx.diagnostics().to_vec(),
            matchers: ctx.matchers,
        })
    }

    /// Whether a project-relative path is one of the job's inputs
    pub fn matches(&self, local_path: &str) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(local_path, options))
    }

    /// Walks `root` and returns every input file, sorted by path
    pub fn collect(&self, root: &Path) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|source| RoutegenError::Walk {
                path: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let local_path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if self.matches(&local_path) {
                files.push(SourceFile::new(local_path));
            }
        }

        files.sort();
        Ok(files)
    }

    /// Content hash over the matched paths and their bytes
    pub fn cache_key(&self, root: &Path, files: &[SourceFile]) -> Result<String> {
        let mut sorted: Vec<&SourceFile> = files.iter().collect();
        sorted.sort();

        let mut hasher = blake3::Hasher::new();
        hasher.update(self.template().as_bytes());
        for (name, ty) in self.param_types.iter() {
            hasher.update(name.as_bytes());
            hasher.update(&[0]);
            hasher.update(ty.as_bytes());
            hasher.update(&[0]);
        }

        for file in sorted {
            let path = root.join(&file.local_path);
            let content = fs::read(&path).map_err(|e| RoutegenError::io(&path, e))?;

            hasher.update(file.local_path.as_bytes());
            hasher.update(&[0]);
            hasher.update(&(content.len() as u64).to_le_bytes());
            hasher.update(&content);
        }

        Ok(hex::encode(hasher.finalize().as_bytes()))
    }

    /// Where the cache key of the last successful run is stored
    pub fn cache_file(&self, root: &Path) -> PathBuf {
        let mut name = self
            .output
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".cache");
        root.join(&self.output).with_file_name(name)
    }

    /// Collects inputs, compares the cache key and regenerates when stale
    pub fn run(&self, root: &Path, force: bool) -> Result<JobOutcome> {
        let files = self.collect(root)?;
        let key = self.cache_key(root, &files)?;
        let cache_file = self.cache_file(root);
        let output = root.join(&self.output);

        if !force && output.exists() {
            if let Ok(previous) = fs::read_to_string(&cache_file) {
                if previous.trim() == key {
                    tracing::debug!(output = %output.display(), "route table is fresh");
                    return Ok(JobOutcome::Fresh);
                }
            }
        }

        let generated = self.generate(&files)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| RoutegenError::io(parent, e))?;
        }
        fs::write(&output, &generated.content).map_err(|e| RoutegenError::io(&output, e))?;
        fs::write(&cache_file, &key).map_err(|e| RoutegenError::io(&cache_file, e))?;

        Ok(JobOutcome::Written {
            routes: generated.routes.len(),
            diagnostics: generated.diagnostics.len(),
        })
    }
}

/// Hidden directories and dependency or build trees never hold inputs
fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| {
                name.starts_with('.') || name == "node_modules" || name == "target"
            })
}
