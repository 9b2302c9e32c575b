//! Command-line interface for mockgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # One object of the document's root schema
//! mockgen generate --schema users.yaml
//!
//! # 100 reproducible objects as JSON lines, with references expanded
//! mockgen generate --schema users.yaml \
//!   --count 100 --seed 42 --handle-references \
//!   --format jsonl --output users.jsonl
//! ```
//!
//! ## Describe
//! ```bash
//! # How each field of a schema is classified, in generation order
//! mockgen describe --schema users.yaml --root Profile
//! ```
//!
//! Every flag can also be set with a `MOCKGEN_*` environment variable, and
//! logging is controlled with `RUST_LOG` (logs go to stderr).

use clap::{Parser, Subcommand};
use mockgen::{run_describe, run_generate, DescribeArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "mockgen")]
#[command(about = "Generate mock objects from declarative field schemas")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate mock objects for a schema
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Print the field descriptors of a schema in generation order
    Describe {
        #[command(flatten)]
        args: DescribeArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for generated data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(&args),
        Commands::Describe { args } => run_describe(&args),
    }
}
