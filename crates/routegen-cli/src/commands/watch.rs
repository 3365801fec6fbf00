use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::generate::report;
use super::Project;

/// Quiet period collapsing a burst of file events into one regeneration
const DEBOUNCE: Duration = Duration::from_millis(300);

pub fn execute(project: &Project) -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(watch(project))
}

async fn watch(project: &Project) -> Result<()> {
    regenerate(project)?;

    let (tx, mut rx) = mpsc::channel::<PathBuf>(100);

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                for path in event.paths {
                    let _ = tx.blocking_send(path);
                }
            }
        }
    })?;

    for path in watch_paths(project) {
        if path.exists() {
            let mode = if path.is_dir() {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            watcher
                .watch(&path, mode)
                .with_context(|| format!("Failed to watch {}", path.display()))?;
            println!("  {} Watching: {}", "👀".cyan(), path.display());
        }
    }

    println!();
    println!("{}", "Press Ctrl+C to stop".dimmed());

    let root = project.root.clone();
    let config_path = project.config_path.clone();

    loop {
        tokio::select! {
            received = rx.recv() => {
                let Some(first) = received else { break };
                let changed = drain_burst(&mut rx, first).await;

                if changed.iter().all(|path| is_generated(project, path)) {
                    continue;
                }

                for path in &changed {
                    tracing::debug!(path = %path.display(), "file changed");
                }
                println!("{} {} file(s) changed", "🔄".yellow(), changed.len());

                // Pick up edits to the configuration or template as well
                let result = Project::load(&root, Some(&config_path))
                    .and_then(|reloaded| regenerate(&reloaded));
                if let Err(e) = result {
                    eprintln!("{} {:#}", "❌".red(), e);
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    drop(watcher);
    println!("{}", "Stopped watching".dimmed());
    Ok(())
}

fn regenerate(project: &Project) -> Result<()> {
    let job = project.job()?;
    let output = project.root.join(&job.output);
    let outcome = job
        .run(&project.root, false)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    report(&outcome, &output.display().to_string());
    Ok(())
}

/// Collects every event arriving within [`DEBOUNCE`] of the previous one
async fn drain_burst(rx: &mut mpsc::Receiver<PathBuf>, first: PathBuf) -> Vec<PathBuf> {
    let mut changed = vec![first];

    while let Ok(Some(path)) = tokio::time::timeout(DEBOUNCE, rx.recv()).await {
        if !changed.contains(&path) {
            changed.push(path);
        }
    }

    changed
}

/// Directories and files whose changes can alter the output
fn watch_paths(project: &Project) -> Vec<PathBuf> {
    let options = &project.config.routes;
    let mut paths = vec![
        project.root.join(&options.routes_dir),
        project.root.join(&options.matchers_dir),
        project.config_path.clone(),
    ];

    if let Some(template) = &options.template {
        paths.push(project.root.join(template));
    }

    paths
}

/// Whether `path` is the generated module or its cache record
fn is_generated(project: &Project, path: &Path) -> bool {
    let output = project.root.join(&project.config.routes.output);
    let mut cache = output.clone().into_os_string();
    cache.push(".cache");

    path == output || path == Path::new(&cache)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_paths_follow_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("routegen.toml"),
            "[routes]\nroutes_dir = \"app/routes\"\ntemplate = \"routes.rs.in\"\n",
        )
        .unwrap();
        let project = Project::load(dir.path(), None).unwrap();

        let paths = watch_paths(&project);

        assert!(paths.contains(&dir.path().join("app/routes")));
        assert!(paths.contains(&dir.path().join("src/params")));
        assert!(paths.contains(&dir.path().join("routes.rs.in")));
        assert!(paths.contains(&dir.path().join("routegen.toml")));
    }

    #[test]
    fn test_generated_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::load(dir.path(), None).unwrap();

        assert!(is_generated(&project, &dir.path().join("src/routes.rs")));
        assert!(is_generated(&project, &dir.path().join("src/routes.rs.cache")));
        assert!(!is_generated(&project, &dir.path().join("src/routes/+page.svelte")));
    }

    #[tokio::test]
    async fn test_drain_burst_deduplicates() {
        let (tx, mut rx) = mpsc::channel(10);
        tx.send(PathBuf::from("a")).await.unwrap();
        tx.send(PathBuf::from("b")).await.unwrap();
        tx.send(PathBuf::from("a")).await.unwrap();
        drop(tx);

        let first = rx.recv().await.unwrap();
        let changed = drain_burst(&mut rx, first).await;

        assert_eq!(changed, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
