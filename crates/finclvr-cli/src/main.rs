mod digest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "finclvr-cli")]
#[command(about = "Finclvr social digest command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a generated sample digest as JSON
    Generate {
        /// Content niche; blank falls back to `finance`
        #[arg(long, default_value = finclvr_core::DEFAULT_NICHE)]
        niche: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Summarise a digest payload the way the dashboard does
    Dashboard {
        /// Digest content JSON; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print the metrics as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate {
            niche,
            pretty,
            output,
        }) => digest::run_generate(&niche, pretty, output.as_deref())?,
        Some(Commands::Dashboard { file, json }) => {
            digest::run_dashboard(file.as_deref(), json)?;
        }
        None => println!("finclvr-cli: try `generate` or `dashboard`"),
    }

    Ok(())
}
