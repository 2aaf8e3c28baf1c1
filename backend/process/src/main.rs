use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw nested JSON export of regions, provinces, municipalities and barangays
    input: PathBuf,

    /// Where to write the normalized dataset
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    process::process_divisions(&args.input, &args.output)?;

    Ok(())
}
