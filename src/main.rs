use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use linecmp::cli::Args;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    linecmp::compare_files(&args.patterns, &args.report_options(), &mut out)
        .context("comparing files")?;
    Ok(())
}
