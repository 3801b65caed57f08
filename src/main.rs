//! CLI entry point for hugo-yml-corrector

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hugo_yml_corrector::Corrector;

#[derive(Parser)]
#[command(name = "hugo-yml-corrector")]
#[command(version)]
#[command(about = "Normalizes the YAML front-matter of Hugo markdown files", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of <DIR>/.yml-corrector.yml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct front-matter of every content file in place
    #[command(alias = "f")]
    Fix {
        /// Content directory to process
        dir: PathBuf,
    },

    /// Report files whose front-matter would change, without writing
    Check {
        /// Content directory to inspect
        dir: PathBuf,
    },

    /// List the content files that would be processed
    List {
        /// Content directory to inspect
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "hugo_yml_corrector=debug,info"
    } else {
        "hugo_yml_corrector=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Fix { dir } => {
            let corrector = Corrector::with_config_file(&dir, config)?;
            tracing::info!("Correcting front-matter in {:?}", dir);

            let summary = corrector.fix()?;
            if summary.has_failures() {
                anyhow::bail!("{} of {} files failed", summary.failed.len(), summary.total());
            }
        }

        Commands::Check { dir } => {
            let corrector = Corrector::with_config_file(&dir, config)?;

            let summary = corrector.check()?;
            if summary.has_failures() {
                anyhow::bail!(
                    "{} of {} files could not be checked",
                    summary.failed.len(),
                    summary.total()
                );
            }
            if summary.updated > 0 {
                anyhow::bail!("{} files need correcting", summary.updated);
            }
        }

        Commands::List { dir } => {
            let corrector = Corrector::with_config_file(&dir, config)?;
            hugo_yml_corrector::commands::list::run(&corrector)?;
        }
    }

    Ok(())
}
