//! Diagnostic commands over the option catalog and the global default.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use regex::Regex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "reqopts",
    version,
    about = "Inspect curl transport options and request configuration defaults"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known transport options as a three-column table
    ListOptions {
        /// Regex applied to the short option alias
        #[arg(long)]
        filter: Option<String>,
        /// Emit the rows as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Print the libcurl documentation URL for an option
    Docs {
        /// Short alias or CURLOPT_ name
        name: String,
    },
    /// Print the currently active global configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::ListOptions { filter, json } => {
            let pattern = filter
                .as_deref()
                .map(Regex::new)
                .transpose()
                .context("invalid --filter pattern")?;
            let entries = reqopts::list_options(pattern.as_ref());
            tracing::debug!(rows = entries.len(), "listing transport options");
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", reqopts::format_catalog(entries));
            }
        }
        Command::Docs { name } => match reqopts::doc_url(&name) {
            Ok(url) => println!("{url}"),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        Command::Show => print!("{}", reqopts::global_config()),
    }
    Ok(())
}
