use anyhow::Context;
use clap::Parser;
use std::path::Path;
use supersketch::consts::{DEFAULT_N, DEFAULT_R};
use supersketch::io::{open_output, write_rows};
use supersketch::sweep::cumulative_mass;
use supersketch::tracing::start_supersketch_tracing_subscriber;
use tracing::info;

/// Writes the probability of at most k matching sketches for every k (k, cumulative probability).
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'n', long, default_value_t = DEFAULT_N)]
    /// Number of sketches in a super-sketch (binomial trials)
    trials: u64,

    #[arg(short, long, default_value_t = DEFAULT_R)]
    /// Probability that a single sketch matches
    rate: f64,

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

    // Open the output first so a bad path errors before computation
    let mut output_writer = open_output(output_loc_path).context("could not create output file")?;

    info!(
        "computing cumulative probability for n = {}, r = {}",
        args.trials, args.rate
    );
    let rows = cumulative_mass(args.trials, args.rate)?;

    write_rows(&mut output_writer, &rows).context("could not write to output")?;

    info!("done!");
    Ok(())
}
