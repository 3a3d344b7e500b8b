use anyhow::Context;
use clap::Parser;
use std::path::Path;
use supersketch::consts::{
    DEFAULT_MIN_MATCHES, DEFAULT_RATE_END, DEFAULT_RATE_START, DEFAULT_RATE_STEP, DEFAULT_SWEEP_N,
};
use supersketch::io::{open_output, write_rows};
use supersketch::sweep::{at_least_by_rate, RateGrid};
use supersketch::tracing::start_supersketch_tracing_subscriber;
use tracing::{debug, info};

/// Writes the probability of at least m matching sketches across a range of match rates (r, probability).
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'n', long, default_value_t = DEFAULT_SWEEP_N)]
    /// Number of sketches in a super-sketch (binomial trials)
    trials: u64,

    #[arg(short, long, default_value_t = DEFAULT_MIN_MATCHES)]
    /// Minimum number of matching sketches
    min_matches: u64,

    #[arg(long, default_value_t = DEFAULT_RATE_START)]
    /// First match rate of the sweep
    start: f64,

    #[arg(long, default_value_t = DEFAULT_RATE_END)]
    /// Last match rate of the sweep (inclusive)
    end: f64,

    #[arg(long, default_value_t = DEFAULT_RATE_STEP)]
    /// Distance between consecutive match rates
    step: f64,

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
    let rates = RateGrid::new(args.start, args.end, args.step)?;

    // Open the output first so a bad path errors before computation
    let mut output_writer = open_output(output_loc_path).context("could not create output file")?;

    debug!("sweeping {} match rates", rates.len());
    info!(
        "computing probability of at least {} of {} matches from r = {} to r = {}",
        args.min_matches, args.trials, args.start, args.end
    );
    let rows = at_least_by_rate(args.trials, args.min_matches, &rates)?;

    write_rows(&mut output_writer, &rows).context("could not write to output")?;

    info!("done!");
    Ok(())
}
