use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use supersketch::error::InvalidArgument;
use supersketch::simulate::{compare_with_exact, empirical_mass, match_count_histogram};

#[test]
fn histogram_counts_every_run() {
    let mut rng = StdRng::seed_from_u64(7);
    let histogram = match_count_histogram(14, 0.9, 1_000, &mut rng).unwrap();

    assert_eq!(histogram.len(), 15);
    assert_eq!(histogram.iter().sum::<u64>(), 1_000);
}

#[test]
fn certain_outcomes() {
    let mut rng = StdRng::seed_from_u64(7);

    let always = match_count_histogram(5, 1.0, 100, &mut rng).unwrap();
    assert_eq!(always, vec![0, 0, 0, 0, 0, 100]);

    let never = match_count_histogram(5, 0.0, 100, &mut rng).unwrap();
    assert_eq!(never, vec![100, 0, 0, 0, 0, 0]);
}

#[test]
fn simulation_close_to_exact() {
    let mut rng = StdRng::seed_from_u64(42);
    let rows = compare_with_exact(6, 0.5, 100_000, &mut rng).unwrap();

    assert_eq!(rows.len(), 7);
    rows.iter().for_each(|row| {
        assert_abs_diff_eq!(row.empirical, row.exact, epsilon = 0.01);
    });
    assert_abs_diff_eq!(rows[3].exact, 0.3125, epsilon = 1e-12);
}

#[test]
fn empirical_mass_sums_to_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let mass = empirical_mass(14, 0.9, 10_000, &mut rng).unwrap();

    assert_abs_diff_eq!(mass.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn invalid_simulations() {
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        match_count_histogram(6, 0.5, 0, &mut rng),
        Err(InvalidArgument::Runs)
    );
    assert_eq!(
        match_count_histogram(6, 1.5, 10, &mut rng),
        Err(InvalidArgument::Probability(1.5))
    );
}
