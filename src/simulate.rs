//! Monte Carlo estimate of the match count distribution, used to check the
//! closed-form mass against repeated experiments.

use indicatif::ProgressIterator;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

use crate::binomial::pmf;
use crate::error::{check_probability, InvalidArgument, Result};

/// Runs `runs` experiments of `n` sketches, each matching with probability
/// `r`, and counts how many experiments ended with each number of matches.
pub fn match_count_histogram<R: Rng>(
    n: u64,
    r: f64,
    runs: u64,
    rng: &mut R,
) -> Result<Vec<u64>> {
    check_probability(r)?;
    if runs == 0 {
        return Err(InvalidArgument::Runs);
    }

    let mut histogram = vec![0_u64; n as usize + 1];
    for _ in (0..runs).progress_count(runs) {
        let matches = (0..n).filter(|_| rng.random_bool(r)).count();
        histogram[matches] += 1;
    }
    Ok(histogram)
}

/// The histogram normalised by the number of runs.
pub fn empirical_mass<R: Rng>(
    n: u64,
    r: f64,
    runs: u64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let histogram = match_count_histogram(n, r, runs, rng)?;
    Ok(histogram
        .into_iter()
        .map(|count| count as f64 / runs as f64)
        .collect_vec())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRow {
    pub k: u64,
    pub empirical: f64,
    pub exact: f64,
}

impl fmt::Display for SimulationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.k, self.empirical, self.exact)
    }
}

/// Pairs the simulated frequency of every `k` with its exact mass.
pub fn compare_with_exact<R: Rng>(
    n: u64,
    r: f64,
    runs: u64,
    rng: &mut R,
) -> Result<Vec<SimulationRow>> {
    empirical_mass(n, r, runs, rng)?
        .into_iter()
        .zip(0..=n)
        .map(|(empirical, k)| -> Result<SimulationRow> {
            Ok(SimulationRow {
                k,
                empirical,
                exact: pmf(n, r, k)?,
            })
        })
        .collect()
}
