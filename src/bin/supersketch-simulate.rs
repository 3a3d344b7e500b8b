use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use supersketch::consts::{DEFAULT_N, DEFAULT_R, DEFAULT_RUNS};
use supersketch::io::{open_output, write_rows};
use supersketch::simulate::compare_with_exact;
use supersketch::tracing::start_supersketch_tracing_subscriber;
use tracing::info;

/// Simulates super-sketch matches and writes the observed frequency next to the exact probability (k, empirical, exact).
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'n', long, default_value_t = DEFAULT_N)]
    /// Number of sketches in a super-sketch (binomial trials)
    trials: u64,

    #[arg(short, long, default_value_t = DEFAULT_R)]
    /// Probability that a single sketch matches
    rate: f64,

    #[arg(long, default_value_t = DEFAULT_RUNS)]
    /// Number of simulated super-sketches
    runs: u64,

    #[arg(short, long)]
    /// Seed for the random number generator. A random seed is chosen and logged if omitted.
    seed: Option<u64>,

    #[arg(short, long, verbatim_doc_comment)]
    /// Where to write the rows.
    /// If a file is provided, the extension '.supersketch.tsv' is added.
    /// If a directory is provided, 'supersketch.tsv' will be the file name.
    /// If omitted, rows are written to stdout.
    output_location: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_supersketch_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();
    let output_loc_path = args.output_location.as_deref().map(Path::new);
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    // Open the output first so a bad path errors before computation
    let mut output_writer = open_output(output_loc_path).context("could not create output file")?;

    info!(
        "simulating {} super-sketches with n = {}, r = {} (seed {})",
        args.runs, args.trials, args.rate, seed
    );
    let rows = compare_with_exact(args.trials, args.rate, args.runs, &mut rng)?;

    write_rows(&mut output_writer, &rows).context("could not write to output")?;

    info!("done!");
    Ok(())
}
