use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::{fs::File, io::BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bank_ledger::CentralBank;

mod menu;
mod script;

/// In-memory retail banking ledger
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Operations script to run instead of the interactive menu
    #[clap(long, value_parser, value_name = "SCRIPT_FILE", value_hint = clap::ValueHint::FilePath)]
    script: Option<PathBuf>,

    /// Title shown above the menu
    #[clap(long, value_parser, default_value = "HSBC Bank App")]
    title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr, stdout belongs to the menu and reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut bank = CentralBank::new();

    match args.script {
        Some(path) => {
            let script_file = File::open(&path)
                .await
                .with_context(|| format!("Failed to read script from {}", path.display()))?;
            let outcome = script::run(&mut bank, script_file).await?;
            info!(applied = outcome.applied, rejected = outcome.rejected, "script finished");

            // print account snapshots
            script::write_snapshots(&bank, &mut tokio::io::stdout()).await?;
        }
        None => {
            let mut session = menu::Session::new(
                &args.title,
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            );
            session.run(&mut bank).await?;
        }
    }

    Ok(())
}
