pub mod generate;
pub mod routes;
#[cfg(feature = "watch")]
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use routegen::{CodegenJob, Config, CONFIG_FILE};

/// Project root plus its loaded configuration
pub struct Project {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl Project {
    /// Loads `config` (or `<root>/routegen.toml`); a missing file yields defaults
    pub fn load(root: &Path, config: Option<&Path>) -> Result<Self> {
        let config_path = match config {
            Some(path) => path.to_path_buf(),
            None => root.join(CONFIG_FILE),
        };

        let loaded = Config::load(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        tracing::debug!(root = %root.display(), config = %config_path.display(), "loaded configuration");

        Ok(Self {
            root: root.to_path_buf(),
            config_path,
            config: loaded,
        })
    }

    pub fn job(&self) -> Result<CodegenJob> {
        CodegenJob::from_config(&self.config, &self.root).context("Failed to prepare generation job")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::load(dir.path(), None).unwrap();

        assert_eq!(project.config_path, dir.path().join(CONFIG_FILE));
        assert_eq!(project.config.routes.routes_dir, "src/routes");
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[routes]\nroutes_dir = \"app/routes\"\n").unwrap();

        let project = Project::load(dir.path(), Some(&path)).unwrap();
        assert_eq!(project.config.routes.routes_dir, "app/routes");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[routes\n").unwrap();

        assert!(Project::load(dir.path(), None).is_err());
    }
}
