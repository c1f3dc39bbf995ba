//! Synthetic infrastructure score generation.
//!
//! Scores stand in for a real predictive model: each metric is drawn
//! around a locality desirability scalar (`base_price_per_sqft / 2000`)
//! and clamped into its documented range. Pollution and noise invert
//! the center, modeling that pricier localities are cleaner and
//! quieter. Generation is intentionally randomized per call; callers
//! must not assume repeatability for the same locality.

use homesight_models::InfraScores;
use rand::Rng;

use crate::price::{round1, round2};

/// Divisor that maps a base price per sqft onto the 0-10 score scale.
const DESIRABILITY_DIVISOR: f64 = 2000.0;

/// Generates the full score bundle for a locality.
///
/// Every bounded metric lands inside its documented closed interval
/// for any RNG sequence; rounding (one decimal, two for the similarity
/// score) is applied last. Count metrics (schools, hospitals, parks)
/// are floored to whole numbers inside their 0-10 display range.
pub fn generate<R: Rng>(base_price_per_sqft: f64, rng: &mut R) -> InfraScores {
    let base = base_price_per_sqft / DESIRABILITY_DIVISOR;
    let inverse = 10.0 - base;

    InfraScores {
        power: round1(sample(rng, base, 2.0, 6.0, 10.0)),
        internet: round1(sample(rng, base, 2.0, 6.0, 10.0)),
        water: round1(sample(rng, base, 3.0, 5.0, 10.0)),
        greenery: round1(sample(rng, base, 4.0, 4.0, 10.0)),
        road: round1(sample(rng, base, 2.0, 6.0, 10.0)),
        pollution: round1(sample(rng, inverse, 2.0, 3.0, 10.0)),
        noise: round1(sample(rng, inverse, 3.0, 3.0, 10.0)),
        schools: round1(count(rng, base, 2.0, 5.0, 10.0)),
        hospitals: round1(count(rng, base, 2.0, 5.0, 10.0)),
        parks: round1(count(rng, base, 3.0, 4.0, 10.0)),
        // Uncentered draw: distance only grows as desirability falls.
        metro_distance_km: round1((inverse + rng.gen_range(0.0..1.0) * 3.0).clamp(0.5, 8.0)),
        building_density: round1(sample(rng, base * 10.0, 30.0, 0.0, 100.0)),
        similarity_score: round2(sample(rng, 0.75, 0.4, 0.0, 1.0)),
    }
}

/// Draws `center + (r - 0.5) * spread` clamped into `[lo, hi]`.
fn sample<R: Rng>(rng: &mut R, center: f64, spread: f64, lo: f64, hi: f64) -> f64 {
    (center + (rng.gen_range(0.0..1.0) - 0.5) * spread).clamp(lo, hi)
}

/// Like [`sample`], floored to a whole number. `lo`/`hi` are whole, so
/// flooring stays inside the interval.
fn count<R: Rng>(rng: &mut R, center: f64, spread: f64, lo: f64, hi: f64) -> f64 {
    sample(rng, center, spread, lo, hi).floor()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;

    fn assert_within(value: f64, lo: f64, hi: f64, metric: &str) {
        assert!(
            (lo..=hi).contains(&value),
            "{metric} = {value} outside [{lo}, {hi}]"
        );
    }

    #[test]
    fn all_metrics_stay_in_documented_ranges() {
        // Base prices spanning the full table, cheapest to priciest.
        for base_price in [6_500.0, 10_000.0, 15_000.0, 17_000.0] {
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let scores = generate(base_price, &mut rng);

                assert_within(scores.power, 6.0, 10.0, "power");
                assert_within(scores.internet, 6.0, 10.0, "internet");
                assert_within(scores.water, 5.0, 10.0, "water");
                assert_within(scores.greenery, 4.0, 10.0, "greenery");
                assert_within(scores.road, 6.0, 10.0, "road");
                assert_within(scores.pollution, 3.0, 10.0, "pollution");
                assert_within(scores.noise, 3.0, 10.0, "noise");
                assert_within(scores.schools, 5.0, 10.0, "schools");
                assert_within(scores.hospitals, 5.0, 10.0, "hospitals");
                assert_within(scores.parks, 4.0, 10.0, "parks");
                assert_within(scores.metro_distance_km, 0.5, 8.0, "metro_distance_km");
                assert_within(scores.building_density, 0.0, 100.0, "building_density");
                assert_within(scores.similarity_score, 0.0, 1.0, "similarity_score");
            }
        }
    }

    #[test]
    fn count_metrics_are_whole_numbers() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let scores = generate(12_000.0, &mut rng);
            assert!((scores.schools - scores.schools.trunc()).abs() < f64::EPSILON);
            assert!((scores.hospitals - scores.hospitals.trunc()).abs() < f64::EPSILON);
            assert!((scores.parks - scores.parks.trunc()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn zero_randomness_pins_clamping_and_rounding() {
        // StepRng yielding all zeros makes every draw come out 0.0, so
        // each metric is exactly clamp(center - spread / 2, lo, hi).
        let mut rng = StepRng::new(0, 0);
        let scores = generate(15_000.0, &mut rng); // base = 7.5

        assert!((scores.power - 6.5).abs() < 1e-9);
        assert!((scores.internet - 6.5).abs() < 1e-9);
        assert!((scores.water - 6.0).abs() < 1e-9);
        assert!((scores.greenery - 5.5).abs() < 1e-9);
        assert!((scores.road - 6.5).abs() < 1e-9);
        assert!((scores.pollution - 3.0).abs() < 1e-9); // 1.5 clamped up
        assert!((scores.noise - 3.0).abs() < 1e-9); // 1.0 clamped up
        assert!((scores.schools - 6.0).abs() < 1e-9); // floor(6.5)
        assert!((scores.hospitals - 6.0).abs() < 1e-9);
        assert!((scores.parks - 6.0).abs() < 1e-9);
        assert!((scores.metro_distance_km - 2.5).abs() < 1e-9);
        assert!((scores.building_density - 60.0).abs() < 1e-9);
        assert!((scores.similarity_score - 0.55).abs() < 1e-9);
    }

    #[test]
    fn same_seed_reproduces_scores() {
        let a = generate(9_500.0, &mut StdRng::seed_from_u64(7));
        let b = generate(9_500.0, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
