use std::io;
use tracing_subscriber::EnvFilter;

// Logs go to stderr so stdout only carries the tab separated rows.
// The level is taken from RUST_LOG and defaults to info.
pub fn start_supersketch_tracing_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
