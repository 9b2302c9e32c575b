//! mockgen library
//!
//! Command handlers and argument types behind the `mockgen` binary. The
//! generation engine itself lives in `mock_generator`; schema documents and
//! values live in `mock_core`.
//!
//! # CLI Usage
//!
//! ```bash
//! # One object for the document's root schema, as pretty JSON
//! mockgen generate --schema users.yaml
//!
//! # Ten reproducible objects, one JSON document per line
//! mockgen generate --schema users.yaml --count 10 --seed 42 --format jsonl
//!
//! # Expand references and write YAML to a file
//! mockgen generate --schema users.yaml --handle-references --format yaml --output users.out.yaml
//!
//! # Show how each field of a schema will be generated
//! mockgen describe --schema users.yaml --root Profile
//! ```

use clap::{Parser, ValueEnum};
use mock_core::OptionOverrides;
use std::path::PathBuf;

pub mod commands;
pub mod output;

pub use commands::describe::run_describe;
pub use commands::generate::run_generate;

/// Output encoding for generated objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON: an object, or an array when count > 1
    #[default]
    #[value(name = "json")]
    Json,
    /// One compact JSON object per line
    #[value(name = "jsonl")]
    Jsonl,
    /// YAML: a mapping, or a sequence when count > 1
    #[value(name = "yaml")]
    Yaml,
}

/// Schema document selection, shared by all subcommands.
#[derive(Parser, Clone, Debug)]
pub struct SchemaOpts {
    /// Path to the schema document (YAML)
    #[arg(long, value_name = "PATH", env = "MOCKGEN_SCHEMA")]
    pub schema: PathBuf,

    /// Schema to generate (default: the document's `root`, else its first schema)
    #[arg(long, value_name = "NAME", env = "MOCKGEN_ROOT")]
    pub root: Option<String>,
}

/// Arguments of `mockgen generate`.
#[derive(Parser, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub schema_opts: SchemaOpts,

    /// Number of objects to generate
    #[arg(long, default_value = "1", env = "MOCKGEN_COUNT")]
    pub count: usize,

    /// Element count for generated arrays
    #[arg(long, env = "MOCKGEN_ARRAY_LENGTH")]
    pub array_length: Option<usize>,

    /// Recursion ceiling for nested schemas
    #[arg(long, env = "MOCKGEN_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Expand reference fields into the referenced schema (`--handle-references false` turns it off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        env = "MOCKGEN_HANDLE_REFERENCES"
    )]
    pub handle_references: Option<bool>,

    /// Seed for reproducible output
    #[arg(long, env = "MOCKGEN_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "json", env = "MOCKGEN_FORMAT")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "PATH", env = "MOCKGEN_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Option overrides given on the command line.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            array_length: self.array_length,
            max_depth: self.max_depth,
            // An absent flag leaves the document setting alone
            handle_references: self.handle_references,
            seed: self.seed,
        }
    }
}

/// Arguments of `mockgen describe`.
#[derive(Parser, Clone, Debug)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub schema_opts: SchemaOpts,
}
