mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Options;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    info!("ordo starting");

    let options = Options::parse();
    debug!(?options, "parsed options");

    let ordered = cli::score_moves(&options).context("failed to score moves")?;
    for (mv, score) in ordered {
        debug!(%mv, score, "picked move");
        println!("{mv} {score}");
    }
    Ok(())
}
