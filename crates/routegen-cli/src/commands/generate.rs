use anyhow::{Context, Result};
use colored::Colorize;
use routegen::JobOutcome;

use super::Project;

pub fn execute(project: &Project, force: bool) -> Result<JobOutcome> {
    let job = project.job()?;
    let output = project.root.join(&job.output);

    println!("{}", "Generating route table...".green().bold());

    let outcome = job
        .run(&project.root, force)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    report(&outcome, &output.display().to_string());
    Ok(outcome)
}

pub(crate) fn report(outcome: &JobOutcome, output: &str) {
    match outcome {
        JobOutcome::Written { routes, diagnostics } => {
            println!("  {} Wrote {} ({} routes)", "✓".green(), output.cyan(), routes);
            if *diagnostics > 0 {
                println!(
                    "  {} {} warning(s), see log above",
                    "⚠".yellow(),
                    diagnostics
                );
            }
        }
        JobOutcome::Fresh => {
            println!("  {} {} is up to date", "✓".green(), output.cyan());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_then_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("src/routes/about/+page.svelte");
        fs::create_dir_all(page.parent().unwrap()).unwrap();
        fs::write(&page, "about").unwrap();

        let project = Project::load(dir.path(), None).unwrap();

        assert_eq!(
            execute(&project, false).unwrap(),
            JobOutcome::Written { routes: 1, diagnostics: 0 }
        );
        assert_eq!(execute(&project, false).unwrap(), JobOutcome::Fresh);

        let generated = fs::read_to_string(dir.path().join("src/routes.rs")).unwrap();
        assert!(generated.contains(r#""/about" => About;"#));
    }
}
