use std::path::Path;

use anyhow::{Context, Result};

use linecmp::data::sample::{SampleSpec, generate_files};

fn main() -> Result<()> {
    env_logger::init();

    let spec = SampleSpec::default();
    let output_dir = Path::new("sample_data");
    let paths = generate_files(output_dir, &spec)
        .with_context(|| format!("writing samples to {}", output_dir.display()))?;

    println!(
        "Wrote {} files (up to {} lines, {} variants per line) to {}/",
        paths.len(),
        spec.lines,
        spec.variants,
        output_dir.display()
    );
    println!("Try: cargo run -- '{}/*.txt'", output_dir.display());
    Ok(())
}
