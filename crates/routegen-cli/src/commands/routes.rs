use std::collections::BTreeMap;

use anyhow::{Context, Result};
use colored::Colorize;
use routegen::{Generated, RenderedRoute};
use routegen_runtime::hierarchy::prefixes;
use serde::Serialize;

use super::Project;

/// Machine-readable route listing
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub routes: &'a [RenderedRoute],
    pub prefixes: Vec<String>,
    pub matchers: BTreeMap<&'a str, &'a str>,
    pub diagnostics: Vec<String>,
}

impl<'a> Listing<'a> {
    pub fn new(generated: &'a Generated) -> Self {
        Self {
            routes: &generated.entries,
            prefixes: prefixes(generated.routes.iter().map(String::as_str)),
            matchers: generated.matchers.iter().collect(),
            diagnostics: generated.diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn execute(project: &Project, json: bool) -> Result<()> {
    let job = project.job()?;
    let files = job
        .collect(&project.root)
        .with_context(|| format!("Failed to scan {}", project.root.display()))?;
    let generated = job.generate(&files).context("Failed to generate route table")?;
    let listing = Listing::new(&generated);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", format!("{} routes", listing.routes.len()).green().bold());
    println!();

    for route in listing.routes {
        println!("  {}  {}", route.route_id.cyan(), route.type_name.dimmed());
        for param in &route.params.params {
            let mut flags = Vec::new();
            if param.optional {
                flags.push("optional");
            }
            if param.catch_all {
                flags.push("rest");
            }
            println!(
                "      {}: {} {}",
                param.name,
                param.ty.yellow(),
                flags.join(", ").dimmed()
            );
        }
    }

    if !listing.prefixes.is_empty() {
        println!();
        println!("{}", "Prefixes".bold());
        for prefix in &listing.prefixes {
            println!("  {}", prefix);
        }
    }

    if !listing.diagnostics.is_empty() {
        println!();
        for diagnostic in &listing.diagnostics {
            println!("  {} {}", "⚠".yellow(), diagnostic);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use routegen::{routegen_job, MatcherRegistry, RoutegenOptions, SourceFile};

    #[test]
    fn test_listing_json_shape() {
        let job = routegen_job("src/routes.rs", MatcherRegistry::new(), RoutegenOptions::default())
            .unwrap();
        let generated = job
            .generate(&[
                SourceFile::new("src/routes/blog/[slug]/+page.svelte"),
                SourceFile::new("src/params/number.ts"),
            ])
            .unwrap();

        let value = serde_json::to_value(Listing::new(&generated)).unwrap();

        assert_eq!(value["routes"][0]["route_id"], "/blog/[slug]");
        assert_eq!(value["routes"][0]["type_name"], "BlogBySlug");
        assert_eq!(value["routes"][0]["params"]["params"][0]["name"], "slug");
        assert_eq!(value["prefixes"], serde_json::json!(["/blog/*"]));
        assert_eq!(value["matchers"]["number"], "String");
        assert_eq!(value["diagnostics"].as_array().unwrap().len(), 1);
    }
}
