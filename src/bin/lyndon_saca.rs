use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;

use lyndon_saca::prepare;
use lyndon_saca::stats::{NoStats, Stats};
use lyndon_saca::verify;
use lyndon_saca::{build_with, MsdSort, SaIndex};

/// Build the suffix array of a file.
#[derive(Parser)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Only read the first PREFIX bytes of the input
    #[arg(long)]
    prefix: Option<u64>,

    /// Initial sort prefix length (1, 2 or 3)
    #[arg(long, default_value_t = 1)]
    sort_prefix: usize,

    /// Verify the result with the linear checker
    #[arg(long)]
    check: bool,

    /// Collect per-phase timings and print a RESULT line
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        (1..=3).contains(&args.sort_prefix),
        "sort prefix must be 1, 2 or 3"
    );

    let data = prepare::read_file(&args.input, args.prefix)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    ensure!(!data.is_empty(), "input file is empty");
    let (text, sigma) = prepare::prepare_bytes(&data);

    if text.len() <= <u32 as SaIndex>::MAX_TEXT_LEN {
        run::<u32>(&text, sigma, &args)
    } else {
        run::<u64>(&text, sigma, &args)
    }
}

fn run<I: SaIndex>(text: &[u8], sigma: u32, args: &Args) -> Result<()> {
    let mut sa = vec![I::from_index(0); text.len()];
    if args.stats {
        let mut stats = Stats::new();
        build_with::<u8, I, MsdSort>(text, &mut sa, args.sort_prefix, &mut stats);
        println!(
            "RESULT algo=ds{} n={} sigma={} {}",
            args.sort_prefix,
            text.len(),
            sigma,
            stats
        );
    } else {
        build_with::<u8, I, MsdSort>(text, &mut sa, args.sort_prefix, &mut NoStats);
    }

    if args.check {
        if let Some(v) = verify::first_violation(text, &sa) {
            bail!("suffix array check failed at slot {}: {}", v.slot, v.reason);
        }
        println!("suffix array verified");
    }
    Ok(())
}
