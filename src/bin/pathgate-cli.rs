use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pathgate::config::ObservabilityConfig;
use pathgate::docs::{self, DocKind};
use pathgate::observability::logging;

#[derive(Parser)]
#[command(name = "pathgate-cli")]
#[command(about = "Tooling for pathgate route tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Markdown documentation from a route manifest
    Generate {
        /// Sections to include (all, routes, middlewares, static-files or 0-3)
        #[arg(short = 't', long, value_enum, default_value_t = DocKind::All)]
        kind: DocKind,

        /// Manifest describing routes, middlewares and static files
        #[arg(short = 'f', long, default_value = "./pathgate-docs.toml")]
        source: PathBuf,

        /// Output file; `.md` is appended when missing
        #[arg(short, long, default_value = "./documentation")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig::default())?;

    match cli.command {
        Commands::Generate {
            kind,
            source,
            output,
        } => {
            let written = docs::write_docs(&source, &output, kind)?;
            println!("Documentation written to {}", written.display());
        }
    }

    Ok(())
}
