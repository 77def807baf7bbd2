//! `varexport` CLI: print a JSON document as a PHP `var_export` literal.
//!
//! ## Usage
//!
//! ```sh
//! # stdin → stdout
//! echo '{"key":"value","another":{"nested":false}}' | varexport
//!
//! # Truncate below two levels
//! varexport -i data.json --max-depth 2
//!
//! # Render JSON objects as (object) array(...) instead of arrays
//! varexport -i data.json --objects -o data.php.txt
//! ```
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use varexport_core::{JsonObjects, MaxDepth, VarExport};

#[derive(Parser)]
#[command(
    name = "varexport",
    version,
    about = "Print JSON as a PHP var_export literal"
)]
struct Cli {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Levels to expand before truncating: a non-negative integer, -1 or "unbounded"
    #[arg(short = 'd', long, default_value = "unbounded", allow_hyphen_values = true)]
    max_depth: String,

    /// Render JSON objects as anonymous objects instead of arrays
    #[arg(long)]
    objects: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let max_depth: MaxDepth = cli
        .max_depth
        .parse()
        .context("Failed to parse --max-depth")?;
    let objects = if cli.objects {
        JsonObjects::Records
    } else {
        JsonObjects::Arrays
    };

    let json = read_input(cli.input.as_deref())?;
    let value = varexport_core::from_json_str(&json, objects)
        .context("Failed to read JSON input")?;
    let rendered = VarExport::new(value).export(max_depth);
    tracing::info!(%max_depth, bytes = rendered.len(), "export finished");

    write_output(cli.output.as_deref(), &rendered)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
