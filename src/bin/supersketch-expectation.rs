use anyhow::Context;
use clap::Parser;
use std::path::Path;
use supersketch::consts::{DEFAULT_N, DEFAULT_R, DEFAULT_RATE_END, DEFAULT_RATE_STEP};
use supersketch::io::{open_output, write_rows};
use supersketch::sweep::{cumulative_expectation, expectation_by_rate, RateGrid};
use supersketch::tracing::start_supersketch_tracing_subscriber;
use tracing::info;

/// Writes the running expected fraction of matching sketches for every k (k, cumulative expectation).
/// With --start, sweeps a range of match rates instead (r, k, cumulative expectation).
/// The final value for each rate is the expected match fraction, which equals the rate.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'n', long, default_value_t = DEFAULT_N)]
    /// Number of sketches in a super-sketch (binomial trials)
    trials: u64,

    #[arg(short, long, conflicts_with = "start")]
    /// Probability that a single sketch matches [default: 0.9]
    rate: Option<f64>,

    #[arg(long)]
    /// First match rate of a sweep. Enables the (r, k, value) output.
    start: Option<f64>,

    #[arg(long, requires = "start")]
    /// Last match rate of a sweep (inclusive) [default: 1]
    end: Option<f64>,

    #[arg(long, requires = "start")]
    /// Distance between consecutive match rates of a sweep [default: 0.01]
    step: Option<f64>,

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
    let rates = match args.start {
        Some(start) => Some(RateGrid::new(
            start,
            args.end.unwrap_or(DEFAULT_RATE_END),
            args.step.unwrap_or(DEFAULT_RATE_STEP),
        )?),
        None => None,
    };

    // Open the output first so a bad path errors before computation
    let mut output_writer = open_output(output_loc_path).context("could not create output file")?;

    match rates {
        Some(rates) => {
            info!(
                "computing cumulative expectation for n = {} over {} match rates",
                args.trials,
                rates.len()
            );
            let rows = expectation_by_rate(args.trials, &rates)?;
            write_rows(&mut output_writer, &rows).context("could not write to output")?;
        }
        None => {
            let rate = args.rate.unwrap_or(DEFAULT_R);
            info!(
                "computing cumulative expectation for n = {}, r = {}",
                args.trials, rate
            );
            let rows = cumulative_expectation(args.trials, rate)?;
            if let Some(last) = rows.last() {
                info!("expected match fraction: {}", last.value);
            }
            write_rows(&mut output_writer, &rows).context("could not write to output")?;
        }
    }

    info!("done!");
    Ok(())
}
