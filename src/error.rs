use thiserror::Error;

/// Raised when an argument is outside the domain of a binomial computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("success count {k} is not in [0, {n}]")]
    SuccessCount { n: u64, k: u64 },

    #[error("probability {0} is NaN or not in [0, 1]")]
    Probability(f64),

    #[error(
        "rate grid {start}..={end} with step {step} is invalid (need 0 <= start <= end <= 1, a positive step and at most {} rates)",
        crate::consts::MAX_RATES
    )]
    RateGrid { start: f64, end: f64, step: f64 },

    #[error("number of simulation runs must be positive")]
    Runs,
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;

pub(crate) fn check_probability(r: f64) -> Result<()> {
    if r.is_nan() || !(0.0..=1.0).contains(&r) {
        Err(InvalidArgument::Probability(r))
    } else {
        Ok(())
    }
}

pub(crate) fn check_success_count(n: u64, k: u64) -> Result<()> {
    if k > n {
        Err(InvalidArgument::SuccessCount { n, k })
    } else {
        Ok(())
    }
}
