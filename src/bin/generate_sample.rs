//! Writes a synthetic `id,platform,text` CSV for trying out `/analyze`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use csv_analyzer::ingest::sample::{generate_rows, write_csv};

/// Generate a sample CSV dataset
#[derive(Parser, Debug)]
#[command(name = "generate_sample", version, about, long_about = None)]
struct Args {
    /// Number of data rows
    #[arg(short, long, default_value_t = 50)]
    rows: usize,

    /// Output file
    #[arg(short, long, default_value = "file.csv")]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let rows = generate_rows(args.rows, args.seed);
    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_csv(BufWriter::new(file), &rows)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let path = args.output.canonicalize().unwrap_or(args.output);
    println!("CSV created: {}", path.display());
    Ok(())
}
