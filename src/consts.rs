// Sketches per super-sketch when estimating the expected match fraction
pub const DEFAULT_N: u64 = 14;
// Per-sketch match probability for the expected match fraction
pub const DEFAULT_R: f64 = 0.9;

// Sketches per super-sketch when sweeping "at least m matches"
pub const DEFAULT_SWEEP_N: u64 = 6;
pub const DEFAULT_MIN_MATCHES: u64 = 2;

pub const DEFAULT_RATE_START: f64 = 0.01;
pub const DEFAULT_RATE_END: f64 = 1.0;
pub const DEFAULT_RATE_STEP: f64 = 0.01;

pub const DEFAULT_RUNS: u64 = 100_000;

// Rate grid values past the first are rounded to this many significant digits,
// which every decimal input of up to 15 digits survives
pub const RATE_SIGNIFICANT_DIGITS: i32 = 15;
// Upper bound on the number of rates a single grid may hold
pub const MAX_RATES: usize = 1_000_000;

pub const OUTPUT_EXTENSION: &str = "supersketch.tsv";
