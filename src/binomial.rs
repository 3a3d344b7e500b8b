//! Binomial coefficient and probability mass evaluation.
//!
//! `n` is the number of sketches in a super-sketch, `r` the probability that a
//! single sketch matches and `k` the number of matching sketches.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use statrs::function::factorial::ln_binomial;

use crate::error::{check_probability, check_success_count, Result};

/// Computes `n choose k` exactly.
///
/// The falling product `(n-k+1) * ... * n` is divided by `k!`, both in
/// arbitrary precision, so the result never overflows.
pub fn coefficient(n: u64, k: u64) -> Result<BigUint> {
    check_success_count(n, k)?;
    if k == 0 {
        return Ok(BigUint::one());
    }

    let numerator = (n - k + 1..=n).fold(BigUint::one(), |acc, i| acc * i);
    let denominator = (2..=k).fold(BigUint::one(), |acc, i| acc * i);

    Ok(numerator / denominator)
}

/// Natural log of `n choose k`.
pub fn ln_coefficient(n: u64, k: u64) -> Result<f64> {
    check_success_count(n, k)?;
    Ok(ln_binomial(n, k))
}

// Callers must have validated r in [0, 1] and k <= n
fn ln_pmf_unchecked(n: u64, r: f64, k: u64) -> f64 {
    if r == 0.0 {
        if k == 0 {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    } else if r == 1.0 {
        if k == n {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    } else {
        ln_binomial(n, k) + k as f64 * r.ln() + (n - k) as f64 * (-r).ln_1p()
    }
}

/// Log probability of exactly `k` successes out of `n` trials.
///
/// Impossible outcomes (for example any `k > 0` when `r == 0`) are `-inf`.
pub fn ln_pmf(n: u64, r: f64, k: u64) -> Result<f64> {
    check_probability(r)?;
    check_success_count(n, k)?;
    Ok(ln_pmf_unchecked(n, r, k))
}

/// Probability of exactly `k` successes out of `n` trials with success rate `r`:
///
/// ```text
/// C(n, k) * r^k * (1 - r)^(n - k)
/// ```
///
/// Evaluated in log space so large `n` neither overflows the coefficient
/// nor underflows the powers before they are combined.
///
/// ```
/// let mass = supersketch::binomial::pmf(6, 0.5, 3).unwrap();
/// assert!((mass - 0.3125).abs() < 1e-12);
/// ```
pub fn pmf(n: u64, r: f64, k: u64) -> Result<f64> {
    ln_pmf(n, r, k).map(f64::exp)
}

/// Direct evaluation of the mass as a product of the exact coefficient and
/// the two powers. Only accurate while the coefficient fits in an `f64`.
///
/// Once it does not, the coefficient becomes `inf` and the result is not a
/// probability: `inf` while the powers stay representable (`(2000, 0.5, 1000)`)
/// and `NaN` once they underflow to zero (`(10000, 0.3, 3000)`). Use [`pmf`]
/// for large `n`.
pub fn pmf_direct(n: u64, r: f64, k: u64) -> Result<f64> {
    check_probability(r)?;
    let coefficient = coefficient(n, k)?.to_f64().unwrap_or(f64::INFINITY);
    // powf(0.0) is 1.0 for every base, which covers 0^0
    Ok(coefficient * r.powf(k as f64) * (1.0 - r).powf((n - k) as f64))
}

/// Probability of at least `k` successes: `P(X >= k)`.
pub fn at_least(n: u64, r: f64, k: u64) -> Result<f64> {
    check_probability(r)?;
    check_success_count(n, k)?;
    let total = (k..=n)
        .map(|j| ln_pmf_unchecked(n, r, j).exp())
        .sum::<f64>();
    Ok(total.min(1.0))
}

/// Probability of at most `k` successes: `P(X <= k)`.
pub fn at_most(n: u64, r: f64, k: u64) -> Result<f64> {
    check_probability(r)?;
    check_success_count(n, k)?;
    let total = (0..=k)
        .map(|j| ln_pmf_unchecked(n, r, j).exp())
        .sum::<f64>();
    Ok(total.min(1.0))
}

/// The mass of `k` successes weighted by the matching fraction `k / n`.
///
/// Summed over every `k` this is the expected fraction of matching sketches.
/// With `n == 0` there is nothing to match, so the weight is 0.
pub fn weighted_mass(n: u64, r: f64, k: u64) -> Result<f64> {
    let mass = pmf(n, r, k)?;
    if n == 0 {
        Ok(0.0)
    } else {
        Ok(mass * (k as f64 / n as f64))
    }
}

/// Expected fraction of the `n` sketches that match, computed by summing
/// [`weighted_mass`] over every `k`. Equal to `r` whenever `n > 0`.
pub fn expected_match_fraction(n: u64, r: f64) -> Result<f64> {
    (0..=n).map(|k| weighted_mass(n, r, k)).sum()
}
