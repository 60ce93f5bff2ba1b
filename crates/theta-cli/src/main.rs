// ============================================================
// CLI / Presentation Layer
// ============================================================
// Entry point for user interaction. Uses `clap` to parse the
// command line and delegates all computation to the thetasort
// library; this layer only routes, never computes.
//
// Usage:
//   theta [FILE]          read vectors from FILE (default: test.txt)
//   theta --strict [FILE] error on unparseable tokens

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use thetasort::prelude::*;

/// Name used when no input file is given on the command line.
const DEFAULT_FNAME: &str = "test.txt";

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "theta",
    version,
    about = "Compute pairwise angles between input vectors, sorted ascending."
)]
struct Cli {
    /// Input file: one vector per line, whitespace-separated numbers
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Treat unparseable tokens as errors instead of skipping the
    /// remainder of the line
    #[arg(long)]
    strict: bool,
}

impl Cli {
    /// Open the input, run the pipeline, and print each pair with its
    /// angle in ascending-angle order.
    fn run(self) -> Result<()> {
        let path = self.input.unwrap_or_else(|| PathBuf::from(DEFAULT_FNAME));

        let text = fs::read_to_string(&path)
            .with_context(|| format!("no input file: {}", path.display()))?;

        let policy = if self.strict { Strict } else { Permissive };
        let model = ThetaSort::new().token_policy(policy).build()?;

        let result: ThetaResult<f64> = model.run(&text)?;
        print!("{result}");

        Ok(())
    }
}

fn main() -> Result<()> {
    Cli::parse().run()
}
