mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use commands::Project;

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version, about = "routegen - typed route tables for file-system routers", long_about = None)]
struct Cli {
    /// Configuration file (defaults to routegen.toml in the project root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log every generation step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the route table module
    Generate {
        /// Regenerate even when inputs are unchanged
        #[arg(short, long)]
        force: bool,
    },

    /// List discovered routes
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Regenerate whenever a route or matcher file changes
    #[cfg(feature = "watch")]
    Watch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let project = Project::load(&cli.root, cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { force } => {
            commands::generate::execute(&project, force)?;
        }
        Commands::Routes { json } => {
            commands::routes::execute(&project, json)?;
        }
        #[cfg(feature = "watch")]
        Commands::Watch => {
            commands::watch::execute(&project)?;
        }
    }

    Ok(())
}
