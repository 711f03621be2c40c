//! schema-builder CLI
//!
//! Exports JSON Schema documents to SQL, GraphQL and Protobuf, and generates
//! sample data from them.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schema_builder_sdk::cli::commands::{export, format, generate};
use schema_builder_sdk::config::CliConfig;

#[derive(Parser)]
#[command(name = "schema-builder", version, about = "Derive artifacts from JSON Schema documents")]
struct Cli {
    /// Path to a TOML config file (defaults to ./schema-builder.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a schema to sql, gql or proto
    Export {
        /// Schema file, or - for stdin
        #[arg(short, long)]
        input: String,
        /// Target format: sql, gql or proto
        #[arg(short, long)]
        format: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate sample records as a JSON array
    Generate {
        /// Schema file, or - for stdin
        #[arg(short, long)]
        input: String,
        /// Number of samples (clamped to 1..=25)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-emit a schema as a pretty-printed JSON Schema file
    Format {
        /// Schema file, or - for stdin
        #[arg(short, long)]
        input: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Export {
            input,
            format: target,
            output,
        } => export::handle_export(&input, target.as_deref(), output.as_deref(), &config)?,
        Commands::Generate {
            input,
            count,
            compact,
            output,
        } => generate::handle_generate(&input, count, compact, output.as_deref(), &config)?,
        Commands::Format { input, output } => format::handle_format(&input, output.as_deref())?,
    }

    Ok(())
}
