/*
MIT License

Copyright (c) 2026 posdiff developers
*/

//! Main executable for posdiff

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging; warnings (e.g. lattice mismatch) are visible by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = posdiff::cli::Cli::parse();
    posdiff::cli::run(&cli)?;

    Ok(())
}
