use itertools::Itertools;
use std::fmt;

use crate::binomial::{at_least, pmf, weighted_mass};
use crate::consts::{MAX_RATES, RATE_SIGNIFICANT_DIGITS};
use crate::error::{InvalidArgument, Result};

/// An inclusive arithmetic range of success rates within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateGrid {
    start: f64,
    end: f64,
    step: f64,
    count: usize,
}

impl RateGrid {
    /// Fails when the bounds leave [0, 1], `start > end`, `step` is not a
    /// positive finite number, or the grid would hold more than
    /// [`MAX_RATES`] values.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        let invalid = InvalidArgument::RateGrid { start, end, step };
        let unit = 0.0..=1.0;
        if !(unit.contains(&start)
            && unit.contains(&end)
            && start <= end
            && step.is_finite()
            && step > 0.0)
        {
            return Err(invalid);
        }

        // The small slack keeps `end` when (end - start) / step lands just below an integer
        let intervals = ((end - start) / step + 1e-9).floor();
        if !(intervals < MAX_RATES as f64) {
            return Err(invalid);
        }
        let count = (intervals as usize).checked_add(1).ok_or(invalid)?;

        Ok(RateGrid {
            start,
            end,
            step,
            count,
        })
    }

    /// A grid holding only `rate`.
    pub fn single(rate: f64) -> Result<Self> {
        Self::new(rate, rate, 1.0)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Each value is computed from its index rather than by repeated addition.
    /// `start` is kept as given; later values drop the float noise of the
    /// multiplication so that 0.01 + 2 * 0.01 prints as 0.03.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| {
            if i == 0 {
                self.start
            } else {
                round_float_noise(self.start + i as f64 * self.step).min(self.end)
            }
        })
    }
}

fn round_float_noise(rate: f64) -> f64 {
    let magnitude = rate.abs().log10().floor() as i32;
    let scale = 10.0_f64.powi(RATE_SIGNIFICANT_DIGITS - 1 - magnitude);
    let rounded = (rate * scale).round() / scale;
    // Rates near the bottom of the f64 range have no finite scale
    if rounded.is_finite() {
        rounded
    } else {
        rate
    }
}

/// `k` and a running total up to and including `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeRow {
    pub k: u64,
    pub value: f64,
}

impl fmt::Display for CumulativeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.k, self.value)
    }
}

/// A success rate and a probability computed at that rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRow {
    pub r: f64,
    pub value: f64,
}

impl fmt::Display for RateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.r, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectationRow {
    pub r: f64,
    pub k: u64,
    pub value: f64,
}

impl fmt::Display for ExpectationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.r, self.k, self.value)
    }
}

fn running_total(values: Vec<f64>) -> Vec<CumulativeRow> {
    values
        .into_iter()
        .enumerate()
        .scan(0.0, |total, (k, value)| {
            *total += value;
            Some(CumulativeRow {
                k: k as u64,
                value: *total,
            })
        })
        .collect_vec()
}

/// Running `P(X <= k)` for every `k` in `0..=n`.
pub fn cumulative_mass(n: u64, r: f64) -> Result<Vec<CumulativeRow>> {
    let masses = (0..=n).map(|k| pmf(n, r, k)).collect::<Result<Vec<f64>>>()?;
    Ok(running_total(masses))
}

/// Running sum of the `k / n` weighted mass for every `k` in `0..=n`.
/// The last row is the expected fraction of matching sketches.
pub fn cumulative_expectation(n: u64, r: f64) -> Result<Vec<CumulativeRow>> {
    let weighted = (0..=n)
        .map(|k| weighted_mass(n, r, k))
        .collect::<Result<Vec<f64>>>()?;
    Ok(running_total(weighted))
}

/// `P(X >= min_k)` at every rate of the grid.
pub fn at_least_by_rate(n: u64, min_k: u64, rates: &RateGrid) -> Result<Vec<RateRow>> {
    rates
        .iter()
        .map(|r| -> Result<RateRow> {
            Ok(RateRow {
                r,
                value: at_least(n, r, min_k)?,
            })
        })
        .collect()
}

/// [`cumulative_expectation`] repeated for every rate of the grid.
pub fn expectation_by_rate(n: u64, rates: &RateGrid) -> Result<Vec<ExpectationRow>> {
    rates
        .iter()
        .map(|r| {
            cumulative_expectation(n, r).map(|rows| {
                rows.into_iter()
                    .map(|row| ExpectationRow {
                        r,
                        k: row.k,
                        value: row.value,
                    })
                    .collect_vec()
            })
        })
        .flatten_ok()
        .collect()
}
